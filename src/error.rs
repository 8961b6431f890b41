//! Crate error type.
//!
//! Round operations never fail; everything here is raised while loading word
//! data or settings, before a round exists.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SprintError>;

#[derive(Debug, Error)]
pub enum SprintError {
    /// A round was asked to start with no words to show.
    #[error("a round needs at least one word")]
    EmptyWordSource,

    /// A deck file parsed but contained no words.
    #[error("deck '{0}' has no words")]
    EmptyDeck(String),

    /// Two entries in one deck share an id, which breaks decoy selection.
    #[error("deck '{deck}' has duplicate word id '{id}'")]
    DuplicateWordId { deck: String, id: String },

    /// No embedded deck with this name.
    #[error("unknown deck '{0}'")]
    UnknownDeck(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid word data: {0}")]
    Json(#[from] serde_json::Error),
}
