// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor tracking with one-shot axis intent resolution.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the contact position. This is the anchor.
//! 2) On each move, call [`DragState::update`] for the delta since the previous move, or
//!    [`DragState::resolve_axis`] to decide whether the gesture is a horizontal drag or a
//!    vertical scroll.
//! 3) End with [`DragState::end`], which clears the anchor and the latched intent.
//!
//! Axis intent is resolved once per drag: while the pointer stays within
//! [`AxisThresholds::resolve_distance`] of the anchor (on both axes) the intent is
//! [`AxisIntent::Unresolved`]. The first move that leaves that square latches either
//! [`AxisIntent::Horizontal`] (the horizontal travel beats the vertical travel by
//! [`AxisThresholds::dominance_ratio`]) or [`AxisIntent::Vertical`]. The latch holds
//! until [`DragState::end`], no matter where later moves go.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use attira_event_state::drag::{AxisIntent, AxisThresholds, DragState};
//!
//! let thresholds = AxisThresholds::default();
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(100.0, 100.0));
//! assert_eq!(drag.resolve_axis(Point::new(104.0, 102.0), thresholds), AxisIntent::Unresolved);
//!
//! // 30px right, 4px down: horizontal wins and stays latched.
//! assert_eq!(drag.resolve_axis(Point::new(130.0, 104.0), thresholds), AxisIntent::Horizontal);
//! assert_eq!(drag.resolve_axis(Point::new(130.0, 300.0), thresholds), AxisIntent::Horizontal);
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Distances that decide when and how a drag commits to an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisThresholds {
    /// Travel from the anchor, on either axis, required before the intent resolves.
    pub resolve_distance: f64,
    /// Horizontal travel must exceed vertical travel times this ratio to count as horizontal.
    pub dominance_ratio: f64,
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self {
            resolve_distance: 10.0,
            dominance_ratio: 1.5,
        }
    }
}

/// Which axis a drag committed to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisIntent {
    /// Not enough travel yet to decide.
    #[default]
    Unresolved,
    /// The drag is horizontal; the owner should consume it.
    Horizontal,
    /// The drag is vertical; the owner should let the page scroll.
    Vertical,
}

impl AxisIntent {
    /// Classify a travel vector against `thresholds`.
    ///
    /// Returns [`AxisIntent::Unresolved`] while neither component reaches the
    /// resolve distance. Non-finite travel never resolves.
    #[must_use]
    pub fn classify(travel: Vec2, thresholds: AxisThresholds) -> Self {
        let dx = travel.x.abs();
        let dy = travel.y.abs();
        if !dx.is_finite() || !dy.is_finite() {
            return Self::Unresolved;
        }
        if dx.max(dy) < thresholds.resolve_distance {
            return Self::Unresolved;
        }
        if dx > dy * thresholds.dominance_ratio {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Tracks the anchor and last position of a drag, plus its latched axis intent.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Anchor of the drag operation.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
    intent: AxisIntent,
}

impl DragState {
    /// Start tracking a new drag from `pos`, discarding any previous drag.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.intent = AxisIntent::Unresolved;
    }

    /// Record `pos` and return the movement since the previous update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `current_pos` from the anchor.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Record `pos` and return the axis intent, resolving it if still open.
    ///
    /// Outside a drag this returns [`AxisIntent::Unresolved`] and records nothing.
    pub fn resolve_axis(&mut self, pos: Point, thresholds: AxisThresholds) -> AxisIntent {
        let Some(start) = self.start_pos else {
            return AxisIntent::Unresolved;
        };
        self.last_pos = Some(pos);
        if self.intent == AxisIntent::Unresolved {
            self.intent = AxisIntent::classify(pos - start, thresholds);
        }
        self.intent
    }

    /// Latch an intent without measuring travel (for inputs that need no disambiguation).
    pub fn lock_axis(&mut self, intent: AxisIntent) {
        if self.start_pos.is_some() {
            self.intent = intent;
        }
    }

    /// The latched intent of the current drag.
    #[must_use]
    pub fn intent(&self) -> AxisIntent {
        self.intent
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: AxisThresholds = AxisThresholds {
        resolve_distance: 10.0,
        dominance_ratio: 1.5,
    };

    #[test]
    fn update_returns_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn update_outside_drag_records_nothing() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn intent_stays_unresolved_inside_resolve_square() {
        let mut drag = DragState::default();
        drag.start(Point::new(50.0, 50.0));

        assert_eq!(
            drag.resolve_axis(Point::new(59.0, 41.0), T),
            AxisIntent::Unresolved
        );
        assert_eq!(drag.last_pos, Some(Point::new(59.0, 41.0)));
    }

    #[test]
    fn exact_resolve_distance_resolves() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);

        assert_eq!(
            drag.resolve_axis(Point::new(10.0, 0.0), T),
            AxisIntent::Horizontal
        );
    }

    #[test]
    fn diagonal_travel_counts_as_vertical() {
        // 20 > 15 * 1.5 is false, so the page keeps the gesture.
        assert_eq!(
            AxisIntent::classify(Vec2::new(20.0, 15.0), T),
            AxisIntent::Vertical
        );
        assert_eq!(
            AxisIntent::classify(Vec2::new(-40.0, 2.0), T),
            AxisIntent::Horizontal
        );
    }

    #[test]
    fn vertical_latch_survives_horizontal_moves() {
        let mut drag = DragState::default();
        drag.start(Point::new(150.0, 0.0));

        assert_eq!(
            drag.resolve_axis(Point::new(152.0, 40.0), T),
            AxisIntent::Vertical
        );
        assert_eq!(
            drag.resolve_axis(Point::new(400.0, 41.0), T),
            AxisIntent::Vertical
        );
    }

    #[test]
    fn non_finite_travel_never_resolves() {
        assert_eq!(
            AxisIntent::classify(Vec2::new(f64::NAN, 50.0), T),
            AxisIntent::Unresolved
        );
    }

    #[test]
    fn lock_axis_requires_active_drag() {
        let mut drag = DragState::default();
        drag.lock_axis(AxisIntent::Horizontal);
        assert_eq!(drag.intent(), AxisIntent::Unresolved);

        drag.start(Point::ZERO);
        drag.lock_axis(AxisIntent::Horizontal);
        assert_eq!(
            drag.resolve_axis(Point::new(0.0, 100.0), T),
            AxisIntent::Horizontal
        );
    }

    #[test]
    fn end_clears_anchor_and_intent() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.resolve_axis(Point::new(60.0, 20.0), T);

        drag.end();

        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.intent(), AxisIntent::Unresolved);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.resolve_axis(Point::new(0.0, 50.0), T);

        drag.start(Point::new(50.0, 60.0));

        assert_eq!(drag.intent(), AxisIntent::Unresolved);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
