// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback clock: turns host delta times into frame advances.
//!
//! The clock accumulates elapsed time against a fixed frame period. Each
//! time the accumulator crosses the period, exactly one period is subtracted
//! (never reset to zero) so sub-frame timing carries over between ticks of
//! uneven size.

use crate::error::{Result, SequencerError};

/// Default upper bound on advances produced by a single tick
pub const DEFAULT_MAX_ADVANCES_PER_TICK: u32 = 64;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Ticks are accepted but never advance
    #[default]
    Stopped,
    /// Ticks accumulate time and advance frames
    Playing,
}

impl PlaybackState {
    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Get a status string for display
    pub fn status_text(&self) -> &'static str {
        match self {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
        }
    }
}

/// Fixed-rate frame clock
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Configured playback rate
    frames_per_second: f32,
    /// Seconds per frame, derived from the rate
    frame_period: f64,
    /// Time elapsed since the last advance
    accumulated: f64,
    /// Playback state
    state: PlaybackState,
    /// Upper bound on advances produced by one tick
    max_advances_per_tick: u32,
}

impl PlaybackClock {
    /// Create a stopped clock running at `frames_per_second`
    pub fn new(frames_per_second: f32) -> Result<Self> {
        let frame_period = Self::period_for(frames_per_second)?;
        Ok(Self {
            frames_per_second,
            frame_period,
            accumulated: 0.0,
            state: PlaybackState::Stopped,
            max_advances_per_tick: DEFAULT_MAX_ADVANCES_PER_TICK,
        })
    }

    fn period_for(frames_per_second: f32) -> Result<f64> {
        if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
            return Err(SequencerError::InvalidConfiguration(format!(
                "frames_per_second must be a positive number, got {frames_per_second}"
            )));
        }
        Ok(1.0 / f64::from(frames_per_second))
    }

    /// Change the playback rate. Accumulated time is kept.
    pub fn set_frames_per_second(&mut self, frames_per_second: f32) -> Result<()> {
        self.frame_period = Self::period_for(frames_per_second)?;
        self.frames_per_second = frames_per_second;
        Ok(())
    }

    /// Limit how many advances a single tick may produce
    pub fn set_max_advances_per_tick(&mut self, max: u32) -> Result<()> {
        if max == 0 {
            return Err(SequencerError::InvalidConfiguration(
                "max_advances_per_tick must be at least 1".into(),
            ));
        }
        self.max_advances_per_tick = max;
        Ok(())
    }

    /// Configured playback rate
    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    /// Seconds per frame
    pub fn frame_period(&self) -> f64 {
        self.frame_period
    }

    /// Time accumulated since the last advance
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Advance cap per tick
    pub fn max_advances_per_tick(&self) -> u32 {
        self.max_advances_per_tick
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Is currently playing
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub(crate) fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub(crate) fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Add `delta_time` seconds to the accumulator.
    ///
    /// The duration is validated even when stopped; a stopped clock is left
    /// untouched.
    pub(crate) fn accumulate(&mut self, delta_time: f32) -> Result<()> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(SequencerError::InvalidDeltaTime(delta_time));
        }
        if self.is_playing() {
            self.accumulated += f64::from(delta_time);
        }
        Ok(())
    }

    /// Subtract one frame period if the accumulator has crossed it
    pub(crate) fn consume_period(&mut self) -> bool {
        if self.accumulated >= self.frame_period {
            self.accumulated -= self.frame_period;
            true
        } else {
            false
        }
    }

    /// Drop whole periods still pending, keeping the sub-period remainder
    pub(crate) fn discard_surplus(&mut self) {
        self.accumulated %= self.frame_period;
    }

    /// Zero the accumulator
    pub(crate) fn clear(&mut self) {
        self.accumulated = 0.0;
    }
}
