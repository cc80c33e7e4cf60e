// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use attira_event_state::drag::{AxisIntent, AxisThresholds, DragState};
use kurbo::Point;

/// Width assumed when the host reports a degenerate container width.
const FALLBACK_WIDTH: f64 = 300.0;

/// The three images of a try-on demo, in their initial stacking order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CardKind {
    /// The garment on its own.
    Garment,
    /// The person before the try-on.
    Subject,
    /// The generated result.
    Output,
}

impl CardKind {
    /// Every kind, indexed by card number.
    pub const ALL: [Self; 3] = [Self::Garment, Self::Subject, Self::Output];

    /// Kind of card `index`, if it is one of [`CardKind::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Garment => "Garment",
            Self::Subject => "Subject",
            Self::Output => "Output",
        }
    }
}

/// Tuning for [`CardDeck`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DeckConfig {
    /// Horizontal travel, as a fraction of the deck width, that cycles the top card.
    pub swipe_fraction: f64,
    /// Rotation of the dragged top card per pixel of travel, in degrees.
    pub tilt_deg_per_px: f64,
    /// Vertical offset between stacked cards, in pixels.
    pub stack_step_px: f64,
    /// Scale reduction per pixel of stack offset.
    pub scale_per_px: f64,
    /// Travel before a swipe decides between horizontal and vertical.
    pub resolve_distance_px: f64,
    /// Horizontal travel must beat vertical travel by this ratio.
    pub horizontal_dominance_ratio: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_fraction: 0.15,
            tilt_deg_per_px: 0.03,
            stack_step_px: 4.0,
            scale_per_px: 0.01,
            resolve_distance_px: 10.0,
            horizontal_dominance_ratio: 1.5,
        }
    }
}

impl DeckConfig {
    fn axis(&self) -> AxisThresholds {
        AxisThresholds {
            resolve_distance: self.resolve_distance_px,
            dominance_ratio: self.horizontal_dominance_ratio,
        }
    }
}

/// How a swipe ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// No swipe was in progress.
    NotSwiping,
    /// The gesture was a vertical scroll; the deck is unchanged.
    PassedThrough,
    /// Not far enough; the top card springs back.
    Returned,
    /// The top card moved to the back of the deck.
    Cycled,
}

/// Where the host should draw one card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardTransform {
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Stacking order; the top card is highest.
    pub z_index: i32,
    /// `true` for the card under the finger, which should not animate.
    pub follows_pointer: bool,
}

/// A stack of cards cycled by horizontal swipes.
///
/// The order lists card indices from top to bottom. A horizontal swipe past
/// [`DeckConfig::swipe_fraction`] of the deck width moves the top card to the
/// back, whichever direction it went. A swipe that resolves vertical is left
/// to the page scroll.
#[derive(Clone, Debug)]
pub struct CardDeck {
    config: DeckConfig,
    order: Vec<usize>,
    drag: DragState,
    width: f64,
    offset: f64,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new(CardKind::ALL.len(), DeckConfig::default())
    }
}

impl CardDeck {
    /// A deck of `count` cards in index order.
    #[must_use]
    pub fn new(count: usize, config: DeckConfig) -> Self {
        Self {
            config,
            order: (0..count).collect(),
            drag: DragState::default(),
            width: FALLBACK_WIDTH,
            offset: 0.0,
        }
    }

    /// Card indices from top to bottom.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Index of the top card.
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for an empty deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` while a swipe is tracked.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current horizontal travel of the top card.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.offset
    }

    /// Start a swipe at `point` over a deck `width` pixels wide.
    ///
    /// Returns `false` if a swipe is already tracked or the point is not finite.
    pub fn begin_swipe(&mut self, point: Point, width: f64) -> bool {
        if self.drag.is_dragging() || !point.is_finite() {
            return false;
        }
        self.width = if width.is_finite() && width > 0.0 {
            width
        } else {
            FALLBACK_WIDTH
        };
        self.offset = 0.0;
        self.drag.start(point);
        true
    }

    /// Feed a move of the current swipe and return the resolved axis.
    ///
    /// The top card follows the pointer until the gesture resolves vertical,
    /// at which point it snaps back and stays put.
    pub fn update_swipe(&mut self, point: Point) -> AxisIntent {
        if !self.drag.is_dragging() || !point.is_finite() {
            return self.drag.intent();
        }
        let intent = self.drag.resolve_axis(point, self.config.axis());
        self.offset = match (intent, self.drag.total_offset(point)) {
            (AxisIntent::Vertical, _) | (_, None) => 0.0,
            (_, Some(travel)) => travel.x,
        };
        intent
    }

    /// Finish the current swipe.
    pub fn end_swipe(&mut self) -> SwipeOutcome {
        if !self.drag.is_dragging() {
            return SwipeOutcome::NotSwiping;
        }
        let intent = self.drag.intent();
        let travel = self.offset;
        self.drag.end();
        self.offset = 0.0;

        if intent == AxisIntent::Vertical {
            return SwipeOutcome::PassedThrough;
        }
        if travel.abs() > self.width * self.config.swipe_fraction && self.order.len() > 1 {
            self.order.rotate_left(1);
            log::trace!("deck: cycled, top is now {:?}", self.top());
            SwipeOutcome::Cycled
        } else {
            SwipeOutcome::Returned
        }
    }

    /// Drop the current swipe without cycling.
    pub fn cancel_swipe(&mut self) {
        self.drag.end();
        self.offset = 0.0;
    }

    /// Put card `index` on top, followed by the cards after it in index order.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn bring_to_front(&mut self, index: usize) -> bool {
        let n = self.order.len();
        if index >= n {
            return false;
        }
        self.cancel_swipe();
        self.order = (0..n).map(|k| (index + k) % n).collect();
        true
    }

    /// Restore index order and drop any swipe.
    pub fn reset(&mut self) {
        self.cancel_swipe();
        let n = self.order.len();
        self.order = (0..n).collect();
    }

    /// Transform for the card at `depth` in the stack (0 is the top).
    #[must_use]
    pub fn card_transform(&self, depth: usize) -> CardTransform {
        let z_index = i32::try_from(self.order.len().saturating_sub(depth)).unwrap_or(i32::MAX);
        if depth == 0 && self.drag.is_dragging() {
            return CardTransform {
                translate_x: self.offset,
                translate_y: 0.0,
                rotate_deg: self.offset * self.config.tilt_deg_per_px,
                scale: 1.0,
                z_index,
                follows_pointer: true,
            };
        }
        let stack_offset = depth as f64 * self.config.stack_step_px;
        CardTransform {
            translate_x: 0.0,
            translate_y: stack_offset,
            rotate_deg: 0.0,
            scale: 1.0 - stack_offset * self.config.scale_per_px,
            z_index,
            follows_pointer: false,
        }
    }

    /// Card indices with their transforms, top first.
    pub fn layout(&self) -> impl Iterator<Item = (usize, CardTransform)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(depth, &card)| (card, self.card_transform(depth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(deck: &mut CardDeck, to: Point) -> SwipeOutcome {
        assert!(deck.begin_swipe(Point::new(150.0, 200.0), 300.0));
        deck.update_swipe(to);
        deck.end_swipe()
    }

    #[test]
    fn long_swipe_cycles_either_direction() {
        let mut deck = CardDeck::default();
        assert_eq!(swipe(&mut deck, Point::new(100.0, 205.0)), SwipeOutcome::Cycled);
        assert_eq!(deck.order(), &[1, 2, 0]);
        assert_eq!(swipe(&mut deck, Point::new(220.0, 200.0)), SwipeOutcome::Cycled);
        assert_eq!(deck.order(), &[2, 0, 1]);
    }

    #[test]
    fn short_swipe_returns() {
        let mut deck = CardDeck::default();
        // Threshold is 45px on a 300px deck.
        assert_eq!(swipe(&mut deck, Point::new(190.0, 200.0)), SwipeOutcome::Returned);
        assert_eq!(deck.order(), &[0, 1, 2]);
    }

    #[test]
    fn vertical_swipe_passes_through() {
        let mut deck = CardDeck::default();
        assert!(deck.begin_swipe(Point::new(150.0, 200.0), 300.0));
        assert_eq!(deck.update_swipe(Point::new(160.0, 260.0)), AxisIntent::Vertical);
        assert_eq!(deck.drag_offset(), 0.0);
        // Later horizontal travel does not revive the swipe.
        deck.update_swipe(Point::new(300.0, 260.0));
        assert_eq!(deck.end_swipe(), SwipeOutcome::PassedThrough);
        assert_eq!(deck.order(), &[0, 1, 2]);
    }

    #[test]
    fn end_without_begin() {
        let mut deck = CardDeck::default();
        assert_eq!(deck.end_swipe(), SwipeOutcome::NotSwiping);
    }

    #[test]
    fn bring_to_front_keeps_cyclic_order() {
        let mut deck = CardDeck::default();
        assert!(deck.bring_to_front(2));
        assert_eq!(deck.order(), &[2, 0, 1]);
        assert!(!deck.bring_to_front(3));
        deck.reset();
        assert_eq!(deck.order(), &[0, 1, 2]);
    }

    #[test]
    fn transforms_follow_stack_and_drag() {
        let mut deck = CardDeck::default();
        let resting = deck.card_transform(2);
        assert_eq!(resting.translate_y, 8.0);
        assert!((resting.scale - 0.92).abs() < 1e-12);
        assert_eq!(resting.z_index, 1);

        deck.begin_swipe(Point::new(150.0, 200.0), 300.0);
        deck.update_swipe(Point::new(250.0, 200.0));
        let top = deck.card_transform(0);
        assert!(top.follows_pointer);
        assert_eq!(top.translate_x, 100.0);
        assert!((top.rotate_deg - 3.0).abs() < 1e-12);
        assert_eq!(top.z_index, 3);
    }

    #[test]
    fn card_kinds() {
        assert_eq!(CardKind::from_index(2), Some(CardKind::Output));
        assert_eq!(CardKind::from_index(3), None);
        assert_eq!(CardKind::Subject.label(), "Subject");
    }
}
