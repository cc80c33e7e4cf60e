// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_scrollspy --heading-base-level=0

//! Attira Scrollspy: active-section tracking for a long documentation page.
//!
//! The documentation viewer highlights the sidebar entry for whatever the
//! reader is looking at. [`ScrollSpy`] holds the bookkeeping for that:
//! - Registered section ids, in document order, each with an optional parent
//!   so a subsection can light up its section.
//! - Per-section intersection flags fed from visibility entries (or derived
//!   from layout with [`ScrollSpy::observe_layout`]).
//! - A single active id. A section becomes active when it enters the
//!   [`ObservationBand`]; leaving never clears it.
//! - A **revision** counter that bumps whenever the active id changes.
//!
//! The crate also carries the small scroll helpers the viewer needs:
//! [`ScrollAnimation`] for eased sidebar scrolling, [`anchor_scroll_target`]
//! for jumping to a section below a fixed header, [`center_in_container`] and
//! [`InitialScroll`] for hash navigation on load.
//!
//! ## Minimal example
//!
//! ```rust
//! use attira_scrollspy::ScrollSpy;
//!
//! let mut spy = ScrollSpy::new();
//! spy.observe("pipeline", None);
//! spy.observe("segmentation", Some("pipeline"));
//! spy.observe("deployment", None);
//!
//! // Section extents in document coordinates.
//! let layout = [
//!     (&"pipeline", 0.0..900.0),
//!     (&"segmentation", 900.0..1_600.0),
//!     (&"deployment", 1_600.0..3_000.0),
//! ];
//!
//! // Viewport of 1000px scrolled to 800: the band spans 1000..1100.
//! assert!(spy.observe_layout(800.0, 1_000.0, layout.iter().cloned()));
//! assert_eq!(spy.active(), Some(&"segmentation"));
//! assert!(spy.is_branch_active(&"pipeline"));
//! ```
//!
//! Call [`ScrollSpy::disconnect`] when the page is torn down.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod scroll;
mod spy;

pub use band::ObservationBand;
pub use scroll::{
    DEFAULT_HEADER_OFFSET, DEFAULT_SCROLL_DURATION_MS, Easing, InitialScroll, ScrollAnimation,
    ScrollFrame, anchor_scroll_target, center_in_container,
};
pub use spy::ScrollSpy;
