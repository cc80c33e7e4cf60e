// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::content::{Block, Document, HeadingLevel, Section, Subsection};

/// Output side of the documentation viewer: one method per block kind.
///
/// [`render_blocks`] and [`Document::render`] walk the tree and call these in
/// reading order. Section and subsection hooks default to doing nothing.
pub trait BlockRenderer {
    /// Error produced by the output sink.
    type Error;

    /// A section is starting.
    fn begin_section(&mut self, section: &Section) -> Result<(), Self::Error> {
        let _ = section;
        Ok(())
    }

    /// A subsection is starting.
    fn begin_subsection(&mut self, subsection: &Subsection) -> Result<(), Self::Error> {
        let _ = subsection;
        Ok(())
    }

    /// An in-body heading.
    fn heading(&mut self, level: HeadingLevel, text: &str) -> Result<(), Self::Error>;

    /// A paragraph.
    fn text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// A figure.
    fn image(&mut self, src: &str, alt: &str, caption: Option<&str>) -> Result<(), Self::Error>;

    /// A code listing.
    fn code(&mut self, language: Option<&str>, content: &str) -> Result<(), Self::Error>;

    /// A bulleted list.
    fn list(&mut self, items: &[String]) -> Result<(), Self::Error>;

    /// A table.
    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) -> Result<(), Self::Error>;

    /// An external link.
    fn link(&mut self, href: &str, text: &str) -> Result<(), Self::Error>;
}

/// Dispatch each block to `renderer`, stopping at the first error.
pub fn render_blocks<R: BlockRenderer + ?Sized>(
    blocks: &[Block],
    renderer: &mut R,
) -> Result<(), R::Error> {
    for block in blocks {
        match block {
            Block::Text { content } => renderer.text(content)?,
            Block::Heading { level, content } => renderer.heading(*level, content)?,
            Block::Image { src, alt, caption } => {
                renderer.image(src, alt, caption.as_deref())?;
            }
            Block::Code { language, content } => renderer.code(language.as_deref(), content)?,
            Block::List { items } => renderer.list(items)?,
            Block::Table { headers, rows } => renderer.table(headers, rows)?,
            Block::Link { href, link_text } => {
                renderer.link(href, link_text.as_deref().unwrap_or(href))?;
            }
        }
    }
    Ok(())
}

impl Document {
    /// Render every section, its overview, and its subsections in order.
    pub fn render<R: BlockRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        for section in &self.sections {
            renderer.begin_section(section)?;
            render_blocks(&section.overview, renderer)?;
            for subsection in &section.subsections {
                renderer.begin_subsection(subsection)?;
                render_blocks(&subsection.content, renderer)?;
            }
        }
        Ok(())
    }
}

/// Renders a document as Markdown-flavored plain text.
///
/// Useful for search indexing and for snapshotting content in tests.
#[derive(Clone, Debug, Default)]
pub struct PlainTextRenderer {
    out: String,
}

impl PlainTextRenderer {
    /// An empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text rendered so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the rendered text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    fn row(&mut self, cells: &[String]) {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                self.out.push_str(" | ");
            }
            self.out.push_str(cell);
        }
        self.out.push('\n');
    }
}

impl BlockRenderer for PlainTextRenderer {
    type Error = fmt::Error;

    fn begin_section(&mut self, section: &Section) -> fmt::Result {
        writeln!(self.out, "# {}", section.title)?;
        if !section.description.is_empty() {
            writeln!(self.out, "{}", section.description)?;
        }
        self.out.push('\n');
        Ok(())
    }

    fn begin_subsection(&mut self, subsection: &Subsection) -> fmt::Result {
        writeln!(self.out, "## {}\n", subsection.title)
    }

    fn heading(&mut self, level: HeadingLevel, text: &str) -> fmt::Result {
        let marks = match level {
            HeadingLevel::H3 => "###",
            HeadingLevel::H4 => "####",
        };
        writeln!(self.out, "{marks} {text}\n")
    }

    fn text(&mut self, text: &str) -> fmt::Result {
        writeln!(self.out, "{text}\n")
    }

    fn image(&mut self, src: &str, alt: &str, caption: Option<&str>) -> fmt::Result {
        writeln!(self.out, "![{alt}]({src})")?;
        if let Some(caption) = caption {
            writeln!(self.out, "{caption}")?;
        }
        self.out.push('\n');
        Ok(())
    }

    fn code(&mut self, language: Option<&str>, content: &str) -> fmt::Result {
        writeln!(self.out, "```{}\n{content}\n```\n", language.unwrap_or(""))
    }

    fn list(&mut self, items: &[String]) -> fmt::Result {
        for item in items {
            writeln!(self.out, "- {item}")?;
        }
        self.out.push('\n');
        Ok(())
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) -> fmt::Result {
        self.row(headers);
        for row in rows {
            self.row(row);
        }
        self.out.push('\n');
        Ok(())
    }

    fn link(&mut self, href: &str, text: &str) -> fmt::Result {
        writeln!(self.out, "[{text}]({href})\n")
    }
}
