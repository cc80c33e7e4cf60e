// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame coalescing of move samples.
//!
//! Pointer moves can arrive far more often than the host paints. A
//! [`FrameCoalescer`] keeps only the most recent sample between frames: the host
//! pushes every move, takes at most one sample per animation frame, and flushes
//! the pending sample when the gesture ends so the last move is never lost.
//!
//! ```
//! use attira_event_state::coalesce::FrameCoalescer;
//!
//! let mut moves = FrameCoalescer::new();
//! moves.push(10.0);
//! moves.push(12.0);
//! assert_eq!(moves.take_for_frame(), Some(12.0));
//! assert_eq!(moves.take_for_frame(), None);
//!
//! moves.push(30.0);
//! // Gesture ends before the next frame: the final sample is still delivered.
//! assert_eq!(moves.flush(), Some(30.0));
//! ```

/// Holds the latest not-yet-applied sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    replaced: u64,
}

impl<T> FrameCoalescer<T> {
    /// Create an empty coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            replaced: 0,
        }
    }

    /// Store `sample`, replacing any sample still waiting for a frame.
    ///
    /// Returns `true` if this push needs a new frame request (nothing was pending).
    pub fn push(&mut self, sample: T) -> bool {
        let needs_frame = self.pending.is_none();
        if !needs_frame {
            self.replaced += 1;
        }
        self.pending = Some(sample);
        needs_frame
    }

    /// Take the pending sample for the current frame.
    pub fn take_for_frame(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Take the final pending sample at the end of a gesture.
    ///
    /// Same as [`take_for_frame`](Self::take_for_frame), for the close path.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop any pending sample without applying it.
    pub fn discard(&mut self) {
        self.pending = None;
    }

    /// Returns `true` if a sample is waiting for a frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of samples overwritten before a frame consumed them.
    #[must_use]
    pub fn replaced_count(&self) -> u64 {
        self.replaced
    }
}
