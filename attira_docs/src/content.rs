// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ContentError;

/// Level of an in-body heading. Levels 1 and 2 belong to sections and
/// subsections.
///
/// Defaults to [`H3`](Self::H3) when a heading block gives no level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum HeadingLevel {
    /// Third-level heading.
    #[default]
    H3,
    /// Fourth-level heading.
    H4,
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ContentError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            other => Err(ContentError::InvalidHeadingLevel(other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

/// One piece of documentation body content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum Block {
    /// A paragraph.
    Text {
        /// Paragraph text.
        content: String,
    },
    /// An in-body heading.
    Heading {
        /// Heading level.
        #[cfg_attr(feature = "serde", serde(default))]
        level: HeadingLevel,
        /// Heading text.
        content: String,
    },
    /// A figure.
    Image {
        /// Image URL.
        src: String,
        /// Alternative text.
        #[cfg_attr(feature = "serde", serde(default))]
        alt: String,
        /// Optional caption below the figure.
        #[cfg_attr(feature = "serde", serde(default))]
        caption: Option<String>,
    },
    /// A code listing.
    Code {
        /// Language tag for highlighting.
        #[cfg_attr(feature = "serde", serde(default))]
        language: Option<String>,
        /// Source text.
        content: String,
    },
    /// A bulleted list.
    List {
        /// List items.
        items: Vec<String>,
    },
    /// A table with a header row.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Body rows, each as wide as `headers`.
        rows: Vec<Vec<String>>,
    },
    /// An external link on its own line.
    Link {
        /// Link target.
        href: String,
        /// Link text; renderers show `href` when absent.
        #[cfg_attr(feature = "serde", serde(default))]
        link_text: Option<String>,
    },
}

impl Block {
    /// Paragraph block.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Heading block.
    pub fn heading(level: HeadingLevel, content: impl Into<String>) -> Self {
        Self::Heading {
            level,
            content: content.into(),
        }
    }
}

/// A titled part of a [`Section`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subsection {
    /// Anchor id, unique across the document.
    pub id: String,
    /// Sidebar and heading title.
    pub title: String,
    /// Body blocks.
    pub content: Vec<Block>,
}

/// A top-level documentation section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Anchor id, unique across the document.
    pub id: String,
    /// Sidebar and heading title.
    pub title: String,
    /// One-line summary under the title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Blocks shown before the first subsection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Vec<Block>,
    /// Subsections in reading order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subsections: Vec<Subsection>,
}

/// A whole documentation page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Sections in reading order.
    pub sections: Vec<Section>,
}
