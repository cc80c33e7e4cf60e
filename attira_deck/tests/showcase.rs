// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `attira_deck` crate.
//!
//! These switch demos while swipes and reveal drags are in flight and check
//! that every image-pair change starts from a clean slate.

use attira_deck::{CardKind, DeckConfig, Showcase, SwipeOutcome};
use attira_reveal::{InputSource, RevealConfig, RevealPhase};
use kurbo::{Point, Rect};

fn showcase() -> Showcase {
    Showcase::new(4, CardKind::ALL.len(), DeckConfig::default(), RevealConfig::anywhere())
}

#[test]
fn next_demo_resets_reveal_mid_drag() {
    let mut show = showcase();
    let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);

    let reveal = show.reveal_mut();
    reveal.on_gesture_start(InputSource::Mouse, Point::new(10.0, 50.0), viewport, 0);
    reveal.on_gesture_move(Point::new(240.0, 50.0), viewport);
    assert_eq!(show.reveal().phase(), RevealPhase::DraggingHorizontal);

    assert_eq!(show.next_demo(), 1);
    assert_eq!(show.reveal().phase(), RevealPhase::Idle);
    assert_eq!(show.reveal().position(), 0.5);
}

#[test]
fn switching_demo_restores_card_order() {
    let mut show = showcase();
    let deck = show.deck_mut();
    deck.begin_swipe(Point::new(200.0, 100.0), 300.0);
    deck.update_swipe(Point::new(100.0, 100.0));
    assert_eq!(deck.end_swipe(), SwipeOutcome::Cycled);
    assert_eq!(show.deck().top(), Some(1));

    assert_eq!(show.prev_demo(), 3);
    assert_eq!(show.deck().order(), &[0, 1, 2]);
}

#[test]
fn dot_selection() {
    let mut show = showcase();
    assert!(show.select_demo(2));
    assert_eq!(show.active_demo(), 2);
    assert!(!show.select_demo(9));
    assert_eq!(show.active_demo(), 2);
    assert_eq!(show.carousel().len(), 4);
}

#[test]
fn card_dots_bring_kind_to_front() {
    let mut show = showcase();
    show.deck_mut().bring_to_front(2);
    let top = show.deck().top().and_then(CardKind::from_index);
    assert_eq!(top, Some(CardKind::Output));

    let layout: Vec<usize> = show.deck().layout().map(|(card, _)| card).collect();
    assert_eq!(layout, [2, 0, 1]);
}

#[cfg(feature = "serde")]
#[test]
fn deck_config_from_json() {
    let config: DeckConfig = serde_json::from_str(r#"{ "swipeFraction": 0.3 }"#).unwrap();
    assert_eq!(config.swipe_fraction, 0.3);
    assert_eq!(config.stack_step_px, 4.0);
}
