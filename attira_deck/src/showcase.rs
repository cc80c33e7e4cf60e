// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attira_reveal::{RevealConfig, RevealControl};

use crate::carousel::DemoCarousel;
use crate::deck::{CardDeck, DeckConfig};

/// The gallery's interactive state for one set of demos.
///
/// Every demo is a new image pair: switching demos restores the deck's
/// initial order and resets the comparison reveal to its default position,
/// dropping any gesture in flight.
#[derive(Clone, Debug)]
pub struct Showcase {
    carousel: DemoCarousel,
    deck: CardDeck,
    reveal: RevealControl,
}

impl Showcase {
    /// A showcase over `demo_count` demos of `card_count` cards each.
    #[must_use]
    pub fn new(
        demo_count: usize,
        card_count: usize,
        deck: DeckConfig,
        reveal: RevealConfig,
    ) -> Self {
        Self {
            carousel: DemoCarousel::new(demo_count),
            deck: CardDeck::new(card_count, deck),
            reveal: RevealControl::new(reveal),
        }
    }

    /// Index of the active demo.
    #[must_use]
    pub fn active_demo(&self) -> usize {
        self.carousel.active()
    }

    /// The demo carousel.
    #[must_use]
    pub fn carousel(&self) -> &DemoCarousel {
        &self.carousel
    }

    /// The card deck of the active demo.
    #[must_use]
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    /// Mutable deck, for routing swipes.
    pub fn deck_mut(&mut self) -> &mut CardDeck {
        &mut self.deck
    }

    /// The comparison reveal of the active demo.
    #[must_use]
    pub fn reveal(&self) -> &RevealControl {
        &self.reveal
    }

    /// Mutable reveal, for routing drags.
    pub fn reveal_mut(&mut self) -> &mut RevealControl {
        &mut self.reveal
    }

    /// Show the next demo.
    pub fn next_demo(&mut self) -> usize {
        let active = self.carousel.next();
        self.pair_changed();
        active
    }

    /// Show the previous demo.
    pub fn prev_demo(&mut self) -> usize {
        let active = self.carousel.prev();
        self.pair_changed();
        active
    }

    /// Show demo `index`. Returns `false` (and changes nothing) if out of range.
    pub fn select_demo(&mut self, index: usize) -> bool {
        if !self.carousel.select(index) {
            return false;
        }
        self.pair_changed();
        true
    }

    fn pair_changed(&mut self) {
        self.deck.reset();
        self.reveal.on_active_image_pair_changed();
        log::trace!("showcase: demo {} active", self.carousel.active());
    }
}
