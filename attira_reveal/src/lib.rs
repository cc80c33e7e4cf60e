// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_reveal --heading-base-level=0

//! Attira Reveal: a drag-to-reveal control for before/after image comparison.
//!
//! A comparison viewer stacks two images and clips the top one at a divider.
//! [`RevealControl`] owns the divider: it turns pointer input over the viewport
//! into a clamped reveal fraction and decides, for touch input, whether a
//! gesture is a horizontal drag of the divider or a vertical scroll of the page.
//!
//! It does **not** paint anything. The host:
//! - Measures the viewport and passes its rectangle to each handler.
//! - Calls the `on_*` handlers from its input dispatch (or routes
//!   `ui_events` pointer events through the adapter behind the
//!   `ui_events_adapter` feature).
//! - Binds release and cancel at document scope so a drag that ends outside
//!   the viewport is still closed.
//! - Cancels native scrolling whenever [`RevealControl::suppresses_native_scroll`] says so.
//! - Renders the foreground clip and divider from the [`RevealState`] using [`clip`].
//!
//! ## Phases
//!
//! ```text
//! Idle --start--> ArmedUnresolved (touch) | DraggingHorizontal (mouse)
//! ArmedUnresolved --move within resolve distance--> ArmedUnresolved
//! ArmedUnresolved --move, horizontal dominant--> DraggingHorizontal
//! ArmedUnresolved --move, otherwise--> PassthroughVertical
//! DraggingHorizontal --move--> DraggingHorizontal (position follows x)
//! PassthroughVertical --move--> PassthroughVertical (ignored)
//! any --end/cancel--> Idle
//! ```
//!
//! ## Mouse drag
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use attira_reveal::{InputSource, RevealConfig, RevealControl, RevealPhase};
//!
//! let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);
//! let mut reveal = RevealControl::new(RevealConfig::anywhere());
//!
//! reveal.on_gesture_start(InputSource::Mouse, Point::new(0.0, 100.0), viewport, 0);
//! reveal.on_gesture_move(Point::new(150.0, 100.0), viewport);
//! let state = reveal.on_gesture_move(Point::new(300.0, 100.0), viewport);
//! assert_eq!(state.position, 1.0);
//!
//! let state = reveal.on_gesture_end();
//! assert_eq!(state.phase, RevealPhase::Idle);
//! assert_eq!(state.position, 1.0);
//! ```
//!
//! ## Touch with scroll passthrough
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use attira_reveal::{InputSource, RevealConfig, RevealControl, RevealPhase};
//!
//! let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);
//! let mut reveal = RevealControl::new(RevealConfig::handle_only(50.0));
//!
//! reveal.on_gesture_start(InputSource::Touch, Point::new(150.0, 0.0), viewport, 0);
//! // Mostly vertical: the page scrolls and the divider stays put.
//! let state = reveal.on_gesture_move(Point::new(152.0, 40.0), viewport);
//! assert_eq!(state.phase, RevealPhase::PassthroughVertical);
//! assert!(!reveal.suppresses_native_scroll());
//!
//! let state = reveal.on_gesture_move(Point::new(250.0, 80.0), viewport);
//! assert_eq!(state.position, 0.5);
//! ```
//!
//! ## Frame coalescing
//!
//! [`RevealControl::queue_gesture_move`] resolves the phase right away but
//! defers the position update to [`RevealControl::on_animation_frame`]. Ending
//! the gesture applies whatever is still queued.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`RevealConfig`], [`RevealState`] and friends.
//! - `ui_events_adapter`: [`adapters::ui_events::PointerBinding`] for `ui_events` pointer streams.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;
pub mod clip;
mod config;
mod control;
mod state;

pub use config::{ConfigError, GestureThresholds, RevealConfig};
pub use control::{RevealControl, fraction_in};
pub use state::{InputSource, RevealPhase, RevealState};
