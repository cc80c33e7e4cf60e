// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=attira_docs --heading-base-level=0

//! Attira Docs: the documentation page as data.
//!
//! A [`Document`] is a list of [`Section`]s, each with an optional overview and
//! a list of [`Subsection`]s whose bodies are [`Block`]s: paragraphs, in-body
//! headings, figures, code listings, lists, tables and links.
//!
//! The crate does not render markup itself. Hosts implement [`BlockRenderer`]
//! and hand it to [`Document::render`], which dispatches blocks in reading
//! order. [`PlainTextRenderer`] is a small reference implementation.
//!
//! Before rendering, [`Document::validate`] catches the mistakes that break
//! navigation: empty or duplicate anchor ids and ragged tables. The sidebar is
//! built from [`Document::outline`], and [`Document::register_sections`] feeds
//! the same ids to an [`attira_scrollspy::ScrollSpy`].
//!
//! ```rust
//! use attira_docs::{Block, Document, PlainTextRenderer, Section, Subsection};
//! use attira_scrollspy::ScrollSpy;
//!
//! let doc = Document {
//!     sections: vec![Section {
//!         id: "deployment".into(),
//!         title: "Deployment".into(),
//!         description: "Serving the pipeline".into(),
//!         overview: vec![],
//!         subsections: vec![Subsection {
//!             id: "request-flow".into(),
//!             title: "Request flow".into(),
//!             content: vec![Block::text("Requests are queued per GPU.")],
//!         }],
//!     }],
//! };
//! doc.validate().unwrap();
//!
//! let mut spy = ScrollSpy::new();
//! assert_eq!(doc.register_sections(&mut spy), 2);
//!
//! let mut out = PlainTextRenderer::new();
//! doc.render(&mut out).unwrap();
//! assert!(out.as_str().starts_with("# Deployment\n"));
//! ```
//!
//! ## Features
//!
//! - `serde`: load the tree from JSON. Blocks are tagged by a `"type"` field
//!   (`"text"`, `"heading"`, `"image"`, `"code"`, `"list"`, `"table"`,
//!   `"link"`) with camelCase fields.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod content;
mod error;
mod outline;
mod render;

pub use content::{Block, Document, HeadingLevel, Section, Subsection};
pub use error::ContentError;
pub use outline::OutlineEntry;
pub use render::{BlockRenderer, PlainTextRenderer, render_blocks};
