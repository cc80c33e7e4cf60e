// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host rendering contract.
//!
//! The host stacks the "after" image under the "before" image and clips the
//! foreground so that only its left `position` fraction shows. A divider is
//! drawn at `position` of the width.
//!
//! ```
//! use attira_reveal::clip::{ClipInset, handle_left_percent};
//!
//! let inset = ClipInset::for_position(0.25);
//! assert_eq!(inset.right_percent, 75.0);
//! assert_eq!(inset.to_string(), "inset(0 75% 0 0)");
//! assert_eq!(handle_left_percent(0.25), 25.0);
//! ```

use core::fmt;

use kurbo::Rect;

use crate::state::RevealState;

/// Right-edge inset that clips the foreground image to the reveal fraction.
///
/// Its [`Display`](fmt::Display) form is a CSS `clip-path` value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipInset {
    /// Percentage of the width hidden from the right edge, in `[0, 100]`.
    pub right_percent: f64,
}

impl ClipInset {
    /// The inset for a reveal fraction; the fraction is clamped first.
    #[must_use]
    pub fn for_position(position: f64) -> Self {
        Self {
            right_percent: 100.0 - clamp_unit(position) * 100.0,
        }
    }
}

impl fmt::Display for ClipInset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inset(0 {}% 0 0)", self.right_percent)
    }
}

/// Left offset of the divider, as a percentage of the container width.
#[must_use]
pub fn handle_left_percent(position: f64) -> f64 {
    clamp_unit(position) * 100.0
}

/// Divider x coordinate inside `container`.
#[must_use]
pub fn handle_x(position: f64, container: Rect) -> f64 {
    container.x0 + clamp_unit(position) * container.width()
}

/// The visible part of the foreground image inside `container`.
#[must_use]
pub fn foreground_rect(position: f64, container: Rect) -> Rect {
    Rect::new(
        container.x0,
        container.y0,
        handle_x(position, container),
        container.y1,
    )
}

impl RevealState {
    /// Clip for the foreground image.
    #[must_use]
    pub fn clip_inset(&self) -> ClipInset {
        ClipInset::for_position(self.position)
    }

    /// Divider offset as a percentage of the width.
    #[must_use]
    pub fn handle_left_percent(&self) -> f64 {
        handle_left_percent(self.position)
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
