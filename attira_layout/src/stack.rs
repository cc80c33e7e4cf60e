// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Geometry of the desktop gallery's sticky card stack.
///
/// Each card sticks a little lower than the one before it so the earlier
/// cards keep a strip visible above the current one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StackLayout {
    /// Sticky offset of the first card, below the fixed header.
    pub header_offset: f64,
    /// How much of each earlier card stays visible.
    pub visible_peek: f64,
    /// Stacking order of the first card.
    pub base_z_index: i32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            header_offset: 96.0,
            visible_peek: 50.0,
            base_z_index: 10,
        }
    }
}

/// Placement of one card in a [`StackLayout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackedCard {
    /// Sticky `top` offset in pixels.
    pub sticky_top: f64,
    /// Stacking order; later cards sit above earlier ones.
    pub z_index: i32,
}

impl StackLayout {
    /// Sticky `top` for the card at `index`.
    #[must_use]
    pub fn sticky_top(&self, index: usize) -> f64 {
        self.header_offset + index as f64 * self.visible_peek
    }

    /// Stacking order for the card at `index`.
    #[must_use]
    pub fn z_index(&self, index: usize) -> i32 {
        let offset = i32::try_from(index).unwrap_or(i32::MAX);
        self.base_z_index.saturating_add(offset)
    }

    /// Placement for the card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> StackedCard {
        StackedCard {
            sticky_top: self.sticky_top(index),
            z_index: self.z_index(index),
        }
    }

    /// Placements for `count` cards.
    pub fn cards(&self, count: usize) -> impl Iterator<Item = StackedCard> + '_ {
        (0..count).map(|i| self.card(i))
    }

    /// Height of the spacer after the last card so it can scroll fully into place.
    #[must_use]
    pub fn trailing_spacer(&self) -> f64 {
        self.visible_peek
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_step_down_and_up() {
        let stack = StackLayout::default();
        let cards: [StackedCard; 3] = [stack.card(0), stack.card(1), stack.card(2)];
        assert_eq!(cards[0], StackedCard { sticky_top: 96.0, z_index: 10 });
        assert_eq!(cards[1], StackedCard { sticky_top: 146.0, z_index: 11 });
        assert_eq!(cards[2], StackedCard { sticky_top: 196.0, z_index: 12 });
        assert_eq!(stack.cards(3).count(), 3);
        assert_eq!(stack.trailing_spacer(), 50.0);
    }

    #[test]
    fn z_index_saturates() {
        let stack = StackLayout::default();
        assert_eq!(stack.z_index(usize::MAX), i32::MAX);
    }
}
