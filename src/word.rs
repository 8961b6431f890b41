use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SprintError};

static DECK_DIR: Dir = include_dir!("src/decks");

/// A word and its translation, as served by the word source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub word: String,
    #[serde(rename = "wordTranslate")]
    pub translation: String,
}

impl WordEntry {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
        }
    }
}

/// Named collection of words a round draws from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub words: Vec<WordEntry>,
}

// Deck files are either a named deck or a bare array of word records
#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Named(Deck),
    Bare(Vec<WordEntry>),
}

impl Deck {
    /// Load one of the decks compiled into the binary
    pub fn builtin(name: &str) -> Result<Self> {
        let file = DECK_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| SprintError::UnknownDeck(name.to_string()))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| SprintError::UnknownDeck(name.to_string()))?;

        Self::from_json(name, contents)
    }

    /// Names of the embedded decks, sorted
    pub fn builtin_names() -> Vec<String> {
        let mut names: Vec<String> = DECK_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|f| f.path().file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let fallback_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        Self::from_json(&fallback_name, &contents)
    }

    /// Parse and validate deck JSON. `fallback_name` names bare word arrays.
    pub fn from_json(fallback_name: &str, json: &str) -> Result<Self> {
        let deck = match serde_json::from_str::<DeckFile>(json)? {
            DeckFile::Named(deck) => deck,
            DeckFile::Bare(words) => Deck {
                name: fallback_name.to_string(),
                words,
            },
        };
        deck.validate()?;
        log::debug!("loaded deck '{}' ({} words)", deck.name, deck.words.len());
        Ok(deck)
    }

    pub fn validate(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(SprintError::EmptyDeck(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for entry in &self.words {
            if !seen.insert(entry.id.as_str()) {
                return Err(SprintError::DuplicateWordId {
                    deck: self.name.clone(),
                    id: entry.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Pick up to `count` distinct words in random order; `None` shuffles the whole deck
    pub fn sample<R: Rng + ?Sized>(&self, count: Option<usize>, rng: &mut R) -> Vec<WordEntry> {
        let amount = count.unwrap_or(self.words.len()).min(self.words.len());
        self.words
            .choose_multiple(rng, amount)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
