use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::timer::DEFAULT_ROUND_SECS;
use crate::word::Deck;

pub const DEFAULT_DECK: &str = "basic";
pub const DEFAULT_WORDS_PER_ROUND: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seconds per round, 0 plays without a clock
    pub round_secs: u64,
    /// `None` plays the whole deck
    pub words_per_round: Option<usize>,
    pub deck: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            words_per_round: Some(DEFAULT_WORDS_PER_ROUND),
            deck: DEFAULT_DECK.to_string(),
        }
    }
}

impl Config {
    /// Fold resolved settings into this config. A deck file is not a deck
    /// name, so the stored deck stays when one is in play.
    pub fn with_settings(&self, rs: &RuntimeSettings) -> Self {
        Self {
            round_secs: rs.round_secs.unwrap_or(0),
            words_per_round: rs.words_per_round,
            deck: match &rs.deck {
                DeckChoice::Builtin(name) => name.clone(),
                DeckChoice::File(_) => self.deck.clone(),
            },
        }
    }
}

/// Where the round's words come from
#[derive(Debug, Clone, PartialEq)]
pub enum DeckChoice {
    Builtin(String),
    File(PathBuf),
}

/// Command line values that take precedence over the stored config
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub round_secs: Option<u64>,
    pub no_timer: bool,
    pub words_per_round: Option<usize>,
    pub deck: Option<String>,
    pub deck_file: Option<PathBuf>,
}

/// Settings the running app plays with
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub round_secs: Option<u64>,
    pub words_per_round: Option<usize>,
    pub deck: DeckChoice,
}

impl RuntimeSettings {
    pub fn resolve(overrides: &SettingsOverrides, config: &Config) -> Self {
        let round_secs = if overrides.no_timer {
            None
        } else {
            Some(overrides.round_secs.unwrap_or(config.round_secs)).filter(|&secs| secs > 0)
        };

        let deck = match (&overrides.deck_file, &overrides.deck) {
            (Some(path), _) => DeckChoice::File(path.clone()),
            (None, Some(name)) => DeckChoice::Builtin(name.clone()),
            (None, None) => DeckChoice::Builtin(config.deck.clone()),
        };

        Self {
            round_secs,
            words_per_round: overrides
                .words_per_round
                .or(config.words_per_round)
                .filter(|&n| n > 0),
            deck,
        }
    }

    pub fn load_deck(&self) -> Result<Deck> {
        match &self.deck {
            DeckChoice::Builtin(name) => Deck::builtin(name),
            DeckChoice::File(path) => Deck::from_path(path),
        }
    }

    pub fn deck_label(&self) -> String {
        match &self.deck {
            DeckChoice::Builtin(name) => name.clone(),
            DeckChoice::File(path) => path.display().to_string(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(AppDirs::fallback_config_path);
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable config at {}: {err}",
                    self.path.display()
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
