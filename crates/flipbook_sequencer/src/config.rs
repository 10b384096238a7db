// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animator configuration.

use crate::clock::DEFAULT_MAX_ADVANCES_PER_TICK;
use crate::error::{ConfigError, Result, SequencerError};
use crate::policy::CompletionPolicy;
use serde::{Deserialize, Serialize};

/// Playback settings for an animator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Playback rate
    pub frames_per_second: f32,
    /// What to do past the last frame
    pub completion: CompletionPolicy,
    /// Start playing when the host starts the owning entity
    pub play_on_start: bool,
    /// Start playing whenever the owning entity is enabled
    pub play_on_enable: bool,
    /// Rewind to frame 0 whenever the owning entity is enabled
    pub restart_on_enable: bool,
    /// Cap on catch-up advances per tick
    pub max_advances_per_tick: u32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 60.0,
            completion: CompletionPolicy::Stop,
            play_on_start: true,
            play_on_enable: true,
            restart_on_enable: true,
            max_advances_per_tick: DEFAULT_MAX_ADVANCES_PER_TICK,
        }
    }
}

impl AnimatorConfig {
    /// Set the playback rate
    pub fn with_frames_per_second(mut self, frames_per_second: f32) -> Self {
        self.frames_per_second = frames_per_second;
        self
    }

    /// Set the completion policy
    pub fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    /// Set the catch-up cap
    pub fn with_max_advances_per_tick(mut self, max: u32) -> Self {
        self.max_advances_per_tick = max;
        self
    }

    /// Check every value
    pub fn validate(&self) -> Result<()> {
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(SequencerError::InvalidConfiguration(format!(
                "frames_per_second must be a positive number, got {}",
                self.frames_per_second
            )));
        }
        if self.max_advances_per_tick == 0 {
            return Err(SequencerError::InvalidConfiguration(
                "max_advances_per_tick must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate RON text. Missing fields take their defaults.
    pub fn from_ron_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed RON
    pub fn to_ron_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frames_per_second, 60.0);
        assert_eq!(config.completion, CompletionPolicy::Stop);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = AnimatorConfig::from_ron_str("(frames_per_second: 12.0, completion: Loop)")
            .unwrap();
        assert_eq!(config.frames_per_second, 12.0);
        assert_eq!(config.completion, CompletionPolicy::Loop);
        assert!(config.restart_on_enable);
        assert_eq!(config.max_advances_per_tick, DEFAULT_MAX_ADVANCES_PER_TICK);
    }

    #[test]
    fn test_invalid_rate_in_ron() {
        let err = AnimatorConfig::from_ron_str("(frames_per_second: 0.0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SequencerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_advance_cap_in_ron() {
        let err = AnimatorConfig::from_ron_str("(max_advances_per_tick: 0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SequencerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_malformed_ron() {
        let err = AnimatorConfig::from_ron_str("(frames_per_second: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_ron_text_reloads() {
        let config = AnimatorConfig::default()
            .with_completion(CompletionPolicy::Deactivate)
            .with_max_advances_per_tick(4);
        let text = config.to_ron_string().unwrap();
        assert_eq!(AnimatorConfig::from_ron_str(&text).unwrap(), config);
    }
}
