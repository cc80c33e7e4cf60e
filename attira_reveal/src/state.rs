// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase and state values returned by the control.

use attira_event_state::drag::AxisIntent;

/// The device class a gesture comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSource {
    /// A mouse or other indirect pointer; there is no competing page-scroll gesture.
    Mouse,
    /// A finger or stylus on a touch surface, which may be trying to scroll the page.
    Touch,
}

/// Where a [`RevealControl`](crate::RevealControl) is in its gesture lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealPhase {
    /// No gesture is tracked.
    #[default]
    Idle,
    /// A touch gesture was claimed but has not moved far enough to pick an axis.
    ArmedUnresolved,
    /// The gesture drives the reveal position.
    DraggingHorizontal,
    /// The gesture belongs to the page's vertical scroll; the control ignores it.
    PassthroughVertical,
}

impl RevealPhase {
    /// Returns `true` while a gesture is tracked, including passthrough.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }

    /// Returns `true` once the tracked gesture has committed to an axis.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::DraggingHorizontal | Self::PassthroughVertical)
    }

    pub(crate) fn from_intent(intent: AxisIntent) -> Self {
        match intent {
            AxisIntent::Unresolved => Self::ArmedUnresolved,
            AxisIntent::Horizontal => Self::DraggingHorizontal,
            AxisIntent::Vertical => Self::PassthroughVertical,
        }
    }
}

/// Snapshot of a reveal control, as consumed by the host renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealState {
    /// Visible fraction of the "before" image, in `[0, 1]`.
    ///
    /// `0.0` shows only the "after" image, `1.0` only the "before" image.
    pub position: f64,
    /// Gesture phase.
    pub phase: RevealPhase,
}

impl RevealState {
    /// An idle state at `position`.
    #[must_use]
    pub const fn idle(position: f64) -> Self {
        Self {
            position,
            phase: RevealPhase::Idle,
        }
    }
}
