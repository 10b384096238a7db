// SPDX-License-Identifier: MIT OR Apache-2.0
//! Engine-style activation hooks built from the animator's primitives.
//!
//! The animator itself never reads `play_on_start` and friends. Hosts that
//! have awake/start/enable/disable events can forward them here instead of
//! wiring `reset`/`start`/`stop` by hand.

use crate::animator::FrameAnimator;
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::host::AnimationHost;

/// Activation flags taken from [`AnimatorConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    /// Start playing on the host's start event
    pub play_on_start: bool,
    /// Start playing on every enable event
    pub play_on_enable: bool,
    /// Rewind on every enable event
    pub restart_on_enable: bool,
}

impl Lifecycle {
    /// Copy the activation flags out of a config
    pub fn from_config(config: &AnimatorConfig) -> Self {
        Self {
            play_on_start: config.play_on_start,
            play_on_enable: config.play_on_enable,
            restart_on_enable: config.restart_on_enable,
        }
    }

    /// The owning entity was created. Shows frame 0 if there is one.
    pub fn awake<F, H: AnimationHost<F>>(&self, animator: &mut FrameAnimator<F, H>) -> Result<()> {
        if animator.sequence().is_empty() {
            return Ok(());
        }
        animator.reset()
    }

    /// The owning entity started
    pub fn start<F, H: AnimationHost<F>>(&self, animator: &mut FrameAnimator<F, H>) -> Result<()> {
        if self.play_on_start {
            animator.start()?;
        }
        Ok(())
    }

    /// The owning entity was enabled
    pub fn enable<F, H: AnimationHost<F>>(&self, animator: &mut FrameAnimator<F, H>) -> Result<()> {
        if self.restart_on_enable {
            animator.reset()?;
        }
        if self.play_on_enable {
            animator.start()?;
        }
        tracing::debug!(sequence = ?animator.id(), playing = animator.is_playing(), "Animator enabled");
        Ok(())
    }

    /// The owning entity was disabled
    pub fn disable<F, H: AnimationHost<F>>(&self, animator: &mut FrameAnimator<F, H>) {
        animator.stop();
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::from_config(&AnimatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::SequencerError;

    fn animator(frames: &[u8]) -> FrameAnimator<u8, RecordingHost<u8>> {
        FrameAnimator::new(frames.iter().copied(), &AnimatorConfig::default(), RecordingHost::new())
            .unwrap()
    }

    #[test]
    fn test_awake_shows_first_frame() {
        let mut animator = animator(&[4, 5]);
        Lifecycle::default().awake(&mut animator).unwrap();
        assert_eq!(animator.host().displayed, Some(4));
        assert!(!animator.is_playing());
    }

    #[test]
    fn test_awake_skips_empty_sequence() {
        let mut animator = animator(&[]);
        Lifecycle::default().awake(&mut animator).unwrap();
        assert_eq!(animator.host().applied_count, 0);
    }

    #[test]
    fn test_start_respects_flag() {
        let mut animator = animator(&[1, 2]);
        let lifecycle = Lifecycle {
            play_on_start: false,
            ..Lifecycle::default()
        };
        lifecycle.start(&mut animator).unwrap();
        assert!(!animator.is_playing());

        Lifecycle::default().start(&mut animator).unwrap();
        assert!(animator.is_playing());
    }

    #[test]
    fn test_reenable_restarts_from_first_frame() {
        let mut animator = animator(&[1, 2, 3]);
        let lifecycle = Lifecycle::default();
        lifecycle.start(&mut animator).unwrap();
        animator.advance().unwrap();
        lifecycle.disable(&mut animator);
        assert!(!animator.is_playing());
        assert_eq!(animator.current_index(), Ok(1));

        lifecycle.enable(&mut animator).unwrap();
        assert!(animator.is_playing());
        assert_eq!(animator.current_index(), Ok(0));
        assert_eq!(animator.host().displayed, Some(1));
    }

    #[test]
    fn test_enable_without_restart_resumes() {
        let mut animator = animator(&[1, 2, 3]);
        let lifecycle = Lifecycle {
            restart_on_enable: false,
            ..Lifecycle::default()
        };
        animator.set_current_frame(2).unwrap();
        lifecycle.enable(&mut animator).unwrap();
        assert_eq!(animator.current_index(), Ok(2));
        assert!(animator.is_playing());
    }

    #[test]
    fn test_enable_empty_sequence_fails() {
        let mut animator = animator(&[]);
        assert_eq!(
            Lifecycle::default().enable(&mut animator),
            Err(SequencerError::NoFrames)
        );
    }
}
