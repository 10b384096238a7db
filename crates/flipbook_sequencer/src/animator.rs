// SPDX-License-Identifier: MIT OR Apache-2.0
//! The frame animator: sequence, clock, completion policy and listeners
//! wired into one state machine.
//!
//! There is exactly one advance algorithm. It is entered by the clock from
//! [`FrameAnimator::tick`], by the gated [`FrameAnimator::advance`], or by
//! [`FrameAnimator::force_advance`] which ignores the playing state.
//!
//! Event order for one advance:
//! - mid-sequence: surface update, then frame-changed
//! - on the last frame: completion first, then (for [`CompletionPolicy::Loop`])
//!   the wrap to frame 0 and its frame-changed

use crate::clock::{PlaybackClock, PlaybackState};
use crate::config::AnimatorConfig;
use crate::error::{Result, SequencerError};
use crate::host::AnimationHost;
use crate::listener::{CallbackListener, ListenerId, ListenerRegistry, SequenceListener};
use crate::policy::{AdvanceOutcome, CompletionPolicy};
use crate::sequence::{FrameSequence, SequenceId};

/// Plays a [`FrameSequence`] onto an [`AnimationHost`]
#[derive(Debug)]
pub struct FrameAnimator<F, H> {
    sequence: FrameSequence<F>,
    clock: PlaybackClock,
    completion: CompletionPolicy,
    listeners: ListenerRegistry<F>,
    host: H,
}

impl<F, H: AnimationHost<F>> FrameAnimator<F, H> {
    /// Create a stopped animator positioned on the first frame.
    ///
    /// Nothing is pushed to the host until the first index change or
    /// [`reset`](Self::reset).
    pub fn new(
        frames: impl IntoIterator<Item = F>,
        config: &AnimatorConfig,
        host: H,
    ) -> Result<Self> {
        config.validate()?;
        let mut clock = PlaybackClock::new(config.frames_per_second)?;
        clock.set_max_advances_per_tick(config.max_advances_per_tick)?;

        Ok(Self {
            sequence: FrameSequence::new(frames),
            clock,
            completion: config.completion,
            listeners: ListenerRegistry::new(),
            host,
        })
    }

    // Accessors

    /// Get the frame sequence
    pub fn sequence(&self) -> &FrameSequence<F> {
        &self.sequence
    }

    /// Get the sequence ID
    pub fn id(&self) -> SequenceId {
        self.sequence.id
    }

    /// Get all frames
    pub fn frames(&self) -> &[F] {
        self.sequence.frames()
    }

    /// Get the playback clock
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.clock.state()
    }

    /// Is currently playing
    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// True while on the last frame
    pub fn is_complete(&self) -> bool {
        self.sequence.is_complete()
    }

    /// Index of the displayed frame
    pub fn current_index(&self) -> Result<usize> {
        self.sequence.current_index()
    }

    /// The displayed frame
    pub fn current_frame(&self) -> Result<&F> {
        self.sequence.current_frame()
    }

    /// Active completion policy
    pub fn completion_policy(&self) -> CompletionPolicy {
        self.completion
    }

    /// Get the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get the host mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the animator and return its host
    pub fn into_host(self) -> H {
        self.host
    }

    // Configuration

    /// Switch the completion policy; takes effect on the next completion
    pub fn set_completion_policy(&mut self, policy: CompletionPolicy) {
        self.completion = policy;
    }

    /// Change the playback rate without losing accumulated time
    pub fn set_frames_per_second(&mut self, frames_per_second: f32) -> Result<()> {
        self.clock.set_frames_per_second(frames_per_second)
    }

    /// Limit catch-up advances per tick
    pub fn set_max_advances_per_tick(&mut self, max: u32) -> Result<()> {
        self.clock.set_max_advances_per_tick(max)
    }

    // Listeners

    /// Register a listener for frame-changed and completion events
    pub fn register_listener(&mut self, listener: Box<dyn SequenceListener<F>>) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Register a pair of closures as a listener
    pub fn register_callbacks(
        &mut self,
        on_frame_changed: impl FnMut(&FrameSequence<F>, usize) + Send + 'static,
        on_complete: impl FnMut(&FrameSequence<F>) + Send + 'static,
    ) -> ListenerId
    where
        F: 'static,
    {
        self.listeners.register(Box::new(CallbackListener::new(
            Some(Box::new(on_frame_changed)),
            Some(Box::new(on_complete)),
        )))
    }

    /// Remove a listener, returning whether it was registered
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    /// Get listener count
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Playback control

    /// Begin playback from the current frame
    pub fn start(&mut self) -> Result<()> {
        self.sequence.validate_non_empty()?;
        if !self.clock.is_playing() {
            tracing::debug!(sequence = ?self.sequence.id, "Playback started");
        }
        self.clock.play();
        Ok(())
    }

    /// Stop playback, holding the current frame. Idempotent.
    pub fn stop(&mut self) {
        if self.clock.is_playing() {
            tracing::debug!(sequence = ?self.sequence.id, "Playback stopped");
        }
        self.clock.stop();
    }

    /// Rewind to frame 0 and clear accumulated time.
    ///
    /// The host receives frame 0; no frame-changed event fires.
    pub fn reset(&mut self) -> Result<()> {
        self.sequence.validate_non_empty()?;
        self.sequence.set_index(0)?;
        self.clock.clear();
        self.present_current();
        Ok(())
    }

    /// Feed elapsed host time. Returns the number of advances performed.
    ///
    /// Every full frame period in the accumulator produces one advance, up to
    /// the configured cap. Surplus whole periods are dropped once the cap is
    /// hit or playback halts; the sub-period remainder is always kept.
    pub fn tick(&mut self, delta_time: f32) -> Result<u32> {
        self.clock.accumulate(delta_time)?;
        if !self.clock.is_playing() {
            return Ok(0);
        }

        let cap = self.clock.max_advances_per_tick();
        let mut advances = 0;
        while self.clock.consume_period() {
            advances += 1;
            if self.advance_frame()?.halted() {
                self.clock.discard_surplus();
                break;
            }
            if advances >= cap {
                if self.clock.accumulated() >= self.clock.frame_period() {
                    tracing::debug!(
                        sequence = ?self.sequence.id,
                        cap = advances,
                        "Advance cap reached, dropping surplus frames"
                    );
                }
                self.clock.discard_surplus();
                break;
            }
        }
        Ok(advances)
    }

    /// Advance one frame if playing; [`AdvanceOutcome::Idle`] otherwise
    pub fn advance(&mut self) -> Result<AdvanceOutcome> {
        if !self.clock.is_playing() {
            return Ok(AdvanceOutcome::Idle);
        }
        self.advance_frame()
    }

    /// Advance one frame regardless of the playing state
    pub fn force_advance(&mut self) -> Result<AdvanceOutcome> {
        self.advance_frame()
    }

    /// Jump to `index`, update the host and fire frame-changed
    pub fn set_current_frame(&mut self, index: usize) -> Result<()> {
        self.change_frame(index)
    }

    // Frame editing

    /// Swap in a new frame list and rewind to frame 0.
    ///
    /// Rejected while playing. An empty list is accepted.
    pub fn replace_frames(&mut self, frames: impl IntoIterator<Item = F>) -> Result<()> {
        self.ensure_stopped()?;
        self.sequence.replace(frames.into_iter().collect());
        self.clock.clear();
        self.present_current();
        tracing::debug!(
            sequence = ?self.sequence.id,
            frames = self.sequence.len(),
            "Frames replaced"
        );
        Ok(())
    }

    /// Swap in a new frame list, staying on the current index.
    ///
    /// Fails without changes if the index does not exist in the new list.
    /// An empty list leaves the cursor at 0 for whatever is added next.
    pub fn replace_frames_keeping_index(
        &mut self,
        frames: impl IntoIterator<Item = F>,
    ) -> Result<()> {
        self.ensure_stopped()?;
        self.sequence
            .replace_keeping_index(frames.into_iter().collect())?;
        self.present_current();
        Ok(())
    }

    /// Append a frame
    pub fn push_frame(&mut self, frame: F) -> Result<()> {
        self.ensure_stopped()?;
        self.sequence.push(frame);
        self.present_current();
        Ok(())
    }

    /// Insert a frame at `index` (`index <= len`)
    pub fn insert_frame(&mut self, index: usize, frame: F) -> Result<()> {
        self.ensure_stopped()?;
        self.sequence.insert(index, frame)?;
        self.present_current();
        Ok(())
    }

    /// Remove and return the frame at `index`
    pub fn remove_frame(&mut self, index: usize) -> Result<F> {
        self.ensure_stopped()?;
        let frame = self.sequence.remove(index)?;
        self.present_current();
        Ok(frame)
    }

    /// Move the frame at `from` so it ends up at `to`
    pub fn move_frame(&mut self, from: usize, to: usize) -> Result<()> {
        self.ensure_stopped()?;
        self.sequence.move_frame(from, to)?;
        self.present_current();
        Ok(())
    }

    // Internals

    fn ensure_stopped(&self) -> Result<()> {
        if self.clock.is_playing() {
            Err(SequencerError::ImmutableWhilePlaying)
        } else {
            Ok(())
        }
    }

    fn present_current(&mut self) {
        if let Ok(frame) = self.sequence.current_frame() {
            self.host.apply_frame(frame);
        }
    }

    fn change_frame(&mut self, index: usize) -> Result<()> {
        self.sequence.set_index(index)?;
        self.present_current();
        tracing::trace!(sequence = ?self.sequence.id, index, "Frame changed");
        self.listeners.notify_frame_changed(&self.sequence, index);
        Ok(())
    }

    fn advance_frame(&mut self) -> Result<AdvanceOutcome> {
        let current = self.sequence.current_index()?;
        if !self.sequence.is_complete() {
            let next = current + 1;
            self.change_frame(next)?;
            return Ok(AdvanceOutcome::Advanced(next));
        }

        tracing::debug!(
            sequence = ?self.sequence.id,
            policy = self.completion.name(),
            "Sequence complete"
        );
        self.listeners.notify_complete(&self.sequence);

        match self.completion {
            CompletionPolicy::Loop => {
                self.change_frame(0)?;
                Ok(AdvanceOutcome::Looped)
            }
            CompletionPolicy::Stop => {
                self.stop();
                Ok(AdvanceOutcome::Stopped)
            }
            CompletionPolicy::Deactivate => {
                self.stop();
                self.host.request_deactivate();
                Ok(AdvanceOutcome::Deactivated)
            }
        }
    }
}
