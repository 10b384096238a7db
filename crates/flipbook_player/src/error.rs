// SPDX-License-Identifier: MIT OR Apache-2.0
//! Player errors.

use flipbook_sequencer::{ConfigError, SequencerError};
use std::path::PathBuf;
use thiserror::Error;

/// Player application errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Clip file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Clip or animator configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Playback contract violation
    #[error("Sequencer error: {0}")]
    Sequencer(#[from] SequencerError),

    /// Clip values out of range
    #[error("Invalid clip: {0}")]
    InvalidClip(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
