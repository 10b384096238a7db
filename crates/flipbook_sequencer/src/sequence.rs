// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered frame list and the current position within it.

use crate::error::{Result, SequencerError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub Uuid);

impl SequenceId {
    /// Create a new random sequence ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SequenceId {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered list of opaque frame handles plus a cursor.
///
/// The sequence never looks inside `F`; it only hands frames out to be
/// displayed. `current_index` is kept in `0..len` whenever the list is
/// non-empty.
#[derive(Debug, Clone)]
pub struct FrameSequence<F> {
    /// Unique sequence ID
    pub id: SequenceId,
    /// Frames in playback order
    frames: Vec<F>,
    /// Position of the displayed frame
    current_index: usize,
}

impl<F> FrameSequence<F> {
    /// Create a sequence positioned on the first frame
    pub fn new(frames: impl IntoIterator<Item = F>) -> Self {
        Self {
            id: SequenceId::new(),
            frames: frames.into_iter().collect(),
            current_index: 0,
        }
    }

    /// Get all frames in playback order
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Get a frame by index
    pub fn frame(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    /// Get frame count
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the final frame, if any
    pub fn last_index(&self) -> Option<usize> {
        self.frames.len().checked_sub(1)
    }

    /// Fail with [`SequencerError::NoFrames`] when empty
    pub fn validate_non_empty(&self) -> Result<()> {
        if self.frames.is_empty() {
            Err(SequencerError::NoFrames)
        } else {
            Ok(())
        }
    }

    /// Index of the displayed frame
    pub fn current_index(&self) -> Result<usize> {
        self.validate_non_empty()?;
        Ok(self.current_index)
    }

    /// The displayed frame
    pub fn current_frame(&self) -> Result<&F> {
        self.frames
            .get(self.current_index)
            .ok_or(SequencerError::NoFrames)
    }

    /// True while the cursor sits on the last frame.
    ///
    /// A single-frame sequence is complete from the start; the next advance
    /// is what triggers completion handling.
    pub fn is_complete(&self) -> bool {
        self.last_index() == Some(self.current_index)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.frames.len() {
            Ok(())
        } else {
            Err(SequencerError::InvalidFrameIndex {
                index,
                len: self.frames.len(),
            })
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.current_index = index;
        Ok(())
    }

    pub(crate) fn replace(&mut self, frames: Vec<F>) {
        self.frames = frames;
        self.current_index = 0;
    }

    pub(crate) fn replace_keeping_index(&mut self, frames: Vec<F>) -> Result<()> {
        if !frames.is_empty() && self.current_index >= frames.len() {
            return Err(SequencerError::InvalidFrameIndex {
                index: self.current_index,
                len: frames.len(),
            });
        }
        if frames.is_empty() {
            self.current_index = 0;
        }
        self.frames = frames;
        Ok(())
    }

    /// Pull the cursor back onto the last frame, or to 0 when empty
    fn clamp_cursor(&mut self) {
        self.current_index = self.current_index.min(self.last_index().unwrap_or(0));
    }

    pub(crate) fn push(&mut self, frame: F) {
        self.frames.push(frame);
        self.clamp_cursor();
    }

    pub(crate) fn insert(&mut self, index: usize, frame: F) -> Result<()> {
        if index > self.frames.len() {
            return Err(SequencerError::InvalidFrameIndex {
                index,
                len: self.frames.len(),
            });
        }
        self.frames.insert(index, frame);
        self.clamp_cursor();
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<F> {
        self.check_index(index)?;
        let frame = self.frames.remove(index);
        self.clamp_cursor();
        Ok(frame)
    }

    pub(crate) fn move_frame(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let frame = self.frames.remove(from);
        self.frames.insert(to, frame);
        Ok(())
    }
}

impl<F> Default for FrameSequence<F> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
