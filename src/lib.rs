// Library surface for headless/integration tests and reuse.
// Terminal rendering and the CLI live in the binary.
pub mod app_dirs;
pub mod config;
pub mod distractor;
pub mod error;
pub mod game;
pub mod round;
pub mod runtime;
pub mod scoring;
pub mod sequencer;
pub mod session;
pub mod timer;
pub mod word;

pub use error::{Result, SprintError};
