// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `attira_layout` crate.

use attira_layout::{Breakpoint, Disclosure, LayoutMode, LayoutTracker, StackLayout};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FooterSection {
    Product,
    Company,
    Resources,
}

#[test]
fn rotating_a_tablet_flips_layout_once() {
    let mut tracker = LayoutTracker::new(Breakpoint::default());
    let widths = [1_024.0, 1_024.0, 700.0, 700.0, 699.0, 1_024.0];
    let changes: Vec<LayoutMode> = widths
        .iter()
        .filter_map(|&w| tracker.on_resize(w))
        .collect();
    assert_eq!(changes, [LayoutMode::Mobile, LayoutMode::Desktop]);
}

#[test]
fn custom_breakpoint() {
    let mut tracker = LayoutTracker::new(Breakpoint(1_000.0));
    assert_eq!(tracker.on_resize(900.0), Some(LayoutMode::Mobile));
}

#[test]
fn footer_accordion_and_email_are_independent() {
    let mut footer = Disclosure::new();
    let mut email = Disclosure::<()>::new();

    footer.toggle(FooterSection::Product);
    email.toggle(());
    footer.toggle(FooterSection::Resources);

    assert!(footer.is_open(&FooterSection::Resources));
    assert!(!footer.is_open(&FooterSection::Product));
    assert!(!footer.is_open(&FooterSection::Company));
    assert!(email.is_open(&()));
}

#[test]
fn stack_for_gallery() {
    let stack = StackLayout::default();
    let tops: Vec<f64> = stack.cards(3).map(|c| c.sticky_top).collect();
    assert_eq!(tops, [96.0, 146.0, 196.0]);
}

#[cfg(feature = "serde")]
#[test]
fn stack_layout_from_json_fills_defaults() {
    let stack: StackLayout = serde_json::from_str(r#"{ "visiblePeek": 40.0 }"#).unwrap();
    assert_eq!(stack.header_offset, 96.0);
    assert_eq!(stack.sticky_top(2), 176.0);

    let mode: LayoutMode = serde_json::from_str(r#""mobile""#).unwrap();
    assert_eq!(mode, LayoutMode::Mobile);
}
