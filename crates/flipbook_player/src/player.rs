// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-step host loop.
//!
//! Plays the part of a game engine: owns the display surface, forwards
//! lifecycle events to the animator and ticks it at a constant rate.

use crate::clip::ClipFile;
use crate::error::Result;
use flipbook_sequencer::{AnimationHost, FrameAnimator, Lifecycle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Display surface that logs instead of drawing
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    /// Frame currently on screen
    pub showing: Option<String>,
    /// Frames pushed so far
    pub frames_shown: usize,
    /// Set once the animator asks to be disabled
    pub deactivated: bool,
}

impl AnimationHost<String> for ConsoleSurface {
    fn apply_frame(&mut self, frame: &String) {
        tracing::info!("Showing frame {frame}");
        self.showing = Some(frame.clone());
        self.frames_shown += 1;
    }

    fn request_deactivate(&mut self) {
        tracing::info!("Deactivation requested");
        self.deactivated = true;
    }
}

/// What happened during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Host updates performed
    pub ticks: u64,
    /// Frame advances across all ticks
    pub advances: u64,
    /// Completion events observed
    pub completions: usize,
    /// Frames pushed to the surface
    pub frames_shown: usize,
    /// Frame on screen at the end
    pub final_frame: Option<String>,
    /// Whether the run ended by deactivation
    pub deactivated: bool,
}

/// Play `clip` to the end of its duration or until deactivated
pub fn run(clip: ClipFile) -> Result<PlaybackSummary> {
    clip.validate()?;
    let lifecycle = Lifecycle::from_config(&clip.config);
    let step = 1.0 / clip.tick_rate;
    let tick_count = clip.tick_count();

    let mut animator = FrameAnimator::new(clip.frames, &clip.config, ConsoleSurface::default())?;
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();
    animator.register_callbacks(
        |_, index| tracing::debug!(index, "Frame changed"),
        move |sequence| {
            counter.fetch_add(1, Ordering::Relaxed);
            tracing::info!(sequence = ?sequence.id, "Clip complete");
        },
    );

    tracing::info!(
        frames = animator.sequence().len(),
        fps = animator.clock().frames_per_second(),
        policy = animator.completion_policy().name(),
        ticks = tick_count,
        "Starting playback"
    );

    lifecycle.awake(&mut animator)?;
    lifecycle.start(&mut animator)?;

    let mut ticks = 0;
    let mut advances = 0;
    while ticks < tick_count {
        advances += u64::from(animator.tick(step)?);
        ticks += 1;

        if animator.host().deactivated {
            lifecycle.disable(&mut animator);
            break;
        }
    }

    let surface = animator.into_host();
    Ok(PlaybackSummary {
        ticks,
        advances,
        completions: completions.load(Ordering::Relaxed),
        frames_shown: surface.frames_shown,
        final_frame: surface.showing,
        deactivated: surface.deactivated,
    })
}
