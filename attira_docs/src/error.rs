// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// A structural problem in a documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// A section or subsection has an empty id; carries its title.
    EmptyId(String),
    /// Two sections or subsections share an id.
    DuplicateId(String),
    /// A table row has a different number of cells than the header.
    RaggedTable {
        /// Id of the subsection (or section, for overviews) holding the table.
        owner: String,
        /// Zero-based row index.
        row: usize,
        /// Header width.
        expected: usize,
        /// Cells in the offending row.
        found: usize,
    },
    /// A heading level other than 3 or 4.
    InvalidHeadingLevel(u8),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId(title) => write!(f, "section {title:?} has an empty id"),
            Self::DuplicateId(id) => write!(f, "id {id:?} is used more than once"),
            Self::RaggedTable {
                owner,
                row,
                expected,
                found,
            } => write!(
                f,
                "table in {owner:?}: row {row} has {found} cells, header has {expected}"
            ),
            Self::InvalidHeadingLevel(level) => {
                write!(f, "heading level {level} is not supported (expected 3 or 4)")
            }
        }
    }
}

impl core::error::Error for ContentError {}
