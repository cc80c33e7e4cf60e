// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_layout --heading-base-level=0

//! Attira Layout: responsive mode and small pieces of component-local UI state.
//!
//! - [`LayoutTracker`] turns viewport widths into a [`LayoutMode`], reporting
//!   only changes, so the host computes the mode once per resize and passes it
//!   down instead of querying the window from every component.
//! - [`Disclosure`] is the open/closed state of accordions and toggles, owned
//!   by the component that renders them.
//! - [`StackLayout`] computes sticky offsets and stacking order for the
//!   desktop gallery's card stack.
//!
//! ```rust
//! use attira_layout::{Disclosure, LayoutMode, LayoutTracker};
//!
//! let mut layout = LayoutTracker::default();
//! assert_eq!(layout.on_resize(390.0), Some(LayoutMode::Mobile));
//!
//! let mut footer = Disclosure::new();
//! footer.toggle("resources");
//! assert!(footer.is_open(&"resources"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod disclosure;
mod mode;
mod stack;

pub use disclosure::Disclosure;
pub use mode::{Breakpoint, LayoutMode, LayoutTracker};
pub use stack::{StackLayout, StackedCard};
