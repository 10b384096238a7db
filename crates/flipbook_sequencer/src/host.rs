// SPDX-License-Identifier: MIT OR Apache-2.0
//! Outbound calls from the animator to its host environment.

/// The host side of an animator.
///
/// `apply_frame` is the only contact point with rendering: whenever the
/// current index changes, the frame at the new index is pushed here.
pub trait AnimationHost<F> {
    /// Display `frame` on the host's visual surface
    fn apply_frame(&mut self, frame: &F);

    /// Disable the entity that owns the animator.
    ///
    /// Only called under [`CompletionPolicy::Deactivate`](crate::CompletionPolicy::Deactivate).
    fn request_deactivate(&mut self) {}
}

/// Host that keeps the last applied frame and remembers deactivation
/// requests. Handy for headless use and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingHost<F> {
    /// Last frame pushed by the animator
    pub displayed: Option<F>,
    /// Number of frames applied so far
    pub applied_count: usize,
    /// Whether a deactivation was requested
    pub deactivate_requested: bool,
}

impl<F> RecordingHost<F> {
    /// Create a host with nothing displayed
    pub fn new() -> Self {
        Self {
            displayed: None,
            applied_count: 0,
            deactivate_requested: false,
        }
    }
}

impl<F> Default for RecordingHost<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> AnimationHost<F> for RecordingHost<F> {
    fn apply_frame(&mut self, frame: &F) {
        self.displayed = Some(frame.clone());
        self.applied_count += 1;
    }

    fn request_deactivate(&mut self) {
        self.deactivate_requested = true;
    }
}
