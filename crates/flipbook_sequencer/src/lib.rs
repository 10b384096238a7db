// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-sequence playback engine.
//!
//! This crate decides which frame of a flipbook is showing and when playback
//! ends or repeats:
//! - Frame sequence with bounds-checked cursor and editing
//! - Fixed-rate playback clock driven by host ticks
//! - Completion policies (loop, stop, deactivate)
//! - Frame-changed and completion listeners
//!
//! ## Architecture
//!
//! The engine is single-threaded and synchronous. A host calls
//! [`FrameAnimator::tick`] once per update with the elapsed time; every
//! resulting state change, surface update and listener callback happens
//! before `tick` returns. Rendering stays on the host side of the
//! [`AnimationHost`] trait.

pub mod animator;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod listener;
pub mod policy;
pub mod sequence;

pub use animator::FrameAnimator;
pub use clock::{PlaybackClock, PlaybackState, DEFAULT_MAX_ADVANCES_PER_TICK};
pub use config::AnimatorConfig;
pub use error::{ConfigError, Result, SequencerError};
pub use host::{AnimationHost, RecordingHost};
pub use lifecycle::Lifecycle;
pub use listener::{
    CallbackListener, CompleteCallback, FrameChangedCallback, ListenerId, ListenerRegistry,
    SequenceListener,
};
pub use policy::{AdvanceOutcome, CompletionPolicy};
pub use sequence::{FrameSequence, SequenceId};
