// SPDX-License-Identifier: MIT OR Apache-2.0
//! What happens when playback runs past the last frame.

use serde::{Deserialize, Serialize};

/// Behaviour applied when an advance is attempted on the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompletionPolicy {
    /// Wrap around to the first frame and keep playing
    Loop,
    /// Stop playback and hold the last frame
    #[default]
    Stop,
    /// Stop playback and ask the host to disable the owning entity
    Deactivate,
}

impl CompletionPolicy {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loop => "Loop",
            Self::Stop => "Stop",
            Self::Deactivate => "Deactivate",
        }
    }

    /// Whether completion under this policy ends playback
    pub fn halts(&self) -> bool {
        !matches!(self, Self::Loop)
    }
}

/// Result of a single advance attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Gated advance while stopped; nothing happened
    Idle,
    /// Moved to the given frame index
    Advanced(usize),
    /// Completed and wrapped back to frame 0
    Looped,
    /// Completed and stopped on the last frame
    Stopped,
    /// Completed, stopped, and asked the host to deactivate
    Deactivated,
}

impl AdvanceOutcome {
    /// Whether this advance fired a completion event
    pub fn completed(&self) -> bool {
        matches!(self, Self::Looped | Self::Stopped | Self::Deactivated)
    }

    /// Whether playback is halted after this advance
    pub fn halted(&self) -> bool {
        matches!(self, Self::Stopped | Self::Deactivated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_stops() {
        assert_eq!(CompletionPolicy::default(), CompletionPolicy::Stop);
        assert!(CompletionPolicy::Stop.halts());
        assert!(CompletionPolicy::Deactivate.halts());
        assert!(!CompletionPolicy::Loop.halts());
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(!AdvanceOutcome::Idle.completed());
        assert!(!AdvanceOutcome::Advanced(3).completed());
        assert!(AdvanceOutcome::Looped.completed());
        assert!(!AdvanceOutcome::Looped.halted());
        assert!(AdvanceOutcome::Deactivated.halted());
    }
}
