// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clip description files.
//!
//! A clip is a RON file naming the frames to play, the animator settings, and
//! how long the headless host should run:
//!
//! ```ron
//! (
//!     config: (frames_per_second: 12.0, completion: Loop),
//!     frames: ["idle_0", "idle_1", "idle_2"],
//!     duration: 2.0,
//!     tick_rate: 60.0,
//! )
//! ```

use crate::error::{PlayerError, Result};
use flipbook_sequencer::{AnimatorConfig, CompletionPolicy, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A clip to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipFile {
    /// Animator settings
    pub config: AnimatorConfig,
    /// Frame names in playback order
    pub frames: Vec<String>,
    /// Seconds of host time to simulate
    pub duration: f32,
    /// Host updates per second
    pub tick_rate: f32,
}

impl Default for ClipFile {
    fn default() -> Self {
        Self {
            config: AnimatorConfig::default(),
            frames: Vec::new(),
            duration: 1.0,
            tick_rate: 60.0,
        }
    }
}

impl ClipFile {
    /// Built-in clip used when no file is given
    pub fn demo() -> Self {
        Self {
            config: AnimatorConfig::default()
                .with_frames_per_second(6.0)
                .with_completion(CompletionPolicy::Deactivate),
            frames: ["A", "B", "C"].map(String::from).to_vec(),
            duration: 2.0,
            tick_rate: 30.0,
        }
    }

    /// Parse and validate RON text
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let clip: Self = ron::from_str(text).map_err(ConfigError::from)?;
        clip.validate()?;
        Ok(clip)
    }

    /// Read a clip file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PlayerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Check the host-side values and the animator config
    pub fn validate(&self) -> Result<()> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(PlayerError::InvalidClip(format!(
                "tick_rate must be a positive number, got {}",
                self.tick_rate
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(PlayerError::InvalidClip(format!(
                "duration must not be negative, got {}",
                self.duration
            )));
        }
        self.config.validate().map_err(ConfigError::from)?;
        Ok(())
    }

    /// Number of host updates to simulate
    pub fn tick_count(&self) -> u64 {
        (f64::from(self.duration) * f64::from(self.tick_rate)).round() as u64
    }
}
