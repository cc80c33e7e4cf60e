// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_event_state --heading-base-level=0

//! Attira Event State: small gesture state helpers shared by Attira's interaction crates.
//!
//! Each module tracks just enough state to answer one question across a stream
//! of pointer events:
//!
//! - [`drag`]: where did this drag start, how far has it moved, and has it
//!   committed to the horizontal or the vertical axis?
//! - [`coalesce`]: which move sample should be applied on the next animation
//!   frame, and is there a final sample left to apply when the gesture ends?
//!
//! The crate does not assume a UI framework or event type. Callers feed it
//! positions (as [`kurbo::Point`]) taken from whatever event system they use.
//!
//! ## Swipe versus scroll
//!
//! ```rust
//! use kurbo::Point;
//! use attira_event_state::drag::{AxisIntent, AxisThresholds, DragState};
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(0.0, 0.0));
//!
//! // Mostly vertical: this gesture belongs to the page.
//! let intent = drag.resolve_axis(Point::new(3.0, 25.0), AxisThresholds::default());
//! assert_eq!(intent, AxisIntent::Vertical);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod coalesce;
pub mod drag;
