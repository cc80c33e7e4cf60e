// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_deck --heading-base-level=0

//! Attira Deck: gallery state for browsing try-on demos.
//!
//! - [`CardDeck`] is the mobile stack of garment, subject and output cards.
//!   Horizontal swipes cycle the top card to the back; vertical swipes are
//!   left to the page.
//! - [`DemoCarousel`] is the wrap-around demo index behind the previous/next
//!   buttons and the dot indicators.
//! - [`Showcase`] ties them to an [`attira_reveal::RevealControl`]: changing
//!   the demo changes the image pair, which resets both the deck and the reveal.
//!
//! ```rust
//! use attira_deck::{CardDeck, SwipeOutcome};
//! use kurbo::Point;
//!
//! let mut deck = CardDeck::default();
//! deck.begin_swipe(Point::new(200.0, 300.0), 300.0);
//! deck.update_swipe(Point::new(120.0, 310.0));
//! assert_eq!(deck.end_swipe(), SwipeOutcome::Cycled);
//! assert_eq!(deck.order(), &[1, 2, 0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod deck;
mod showcase;

pub use carousel::DemoCarousel;
pub use deck::{CardDeck, CardKind, CardTransform, DeckConfig, SwipeOutcome};
pub use showcase::Showcase;
