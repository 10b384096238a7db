// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the sequencer.

use thiserror::Error;

/// Host-contract violations raised by the sequencer.
///
/// None of these are transient: each one points at a call site that has to
/// change, so they are returned to the caller as-is and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencerError {
    /// The operation needs at least one frame
    #[error("Sequence has no frames")]
    NoFrames,

    /// Frame index outside the sequence
    #[error("Frame index {index} out of range for sequence of {len} frames")]
    InvalidFrameIndex {
        /// Requested index
        index: usize,
        /// Number of frames in the sequence
        len: usize,
    },

    /// Frame list edited while playback is running
    #[error("Frames cannot be modified while playing")]
    ImmutableWhilePlaying,

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Negative or non-finite tick duration
    #[error("Invalid delta time: {0}")]
    InvalidDeltaTime(f32),
}

/// Result type for sequencer operations
pub type Result<T> = std::result::Result<T, SequencerError>;

/// Error when loading configuration from text
#[derive(Debug, Error)]
pub enum ConfigError {
    /// RON syntax or shape error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Parsed values failed validation
    #[error(transparent)]
    Invalid(#[from] SequencerError),
}
