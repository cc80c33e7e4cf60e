// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use attira_scrollspy::ScrollSpy;
use hashbrown::HashSet;

use crate::content::{Block, Document};
use crate::error::ContentError;

/// One sidebar entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry<'a> {
    /// Anchor id.
    pub id: &'a str,
    /// Display title.
    pub title: &'a str,
    /// Owning section for subsections.
    pub parent: Option<&'a str>,
}

impl Document {
    /// Check ids and table shapes.
    ///
    /// Every section and subsection needs a non-empty id that no other
    /// section or subsection uses, and every table row must match its header.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            check_id(&mut seen, &section.id, &section.title)?;
            check_tables(&section.id, &section.overview)?;
            for subsection in &section.subsections {
                check_id(&mut seen, &subsection.id, &subsection.title)?;
                check_tables(&subsection.id, &subsection.content)?;
            }
        }
        Ok(())
    }

    /// Sidebar entries in reading order, subsections after their section.
    #[must_use]
    pub fn outline(&self) -> Vec<OutlineEntry<'_>> {
        let mut entries = Vec::new();
        for section in &self.sections {
            entries.push(OutlineEntry {
                id: &section.id,
                title: &section.title,
                parent: None,
            });
            entries.extend(section.subsections.iter().map(|sub| OutlineEntry {
                id: &sub.id,
                title: &sub.title,
                parent: Some(section.id.as_str()),
            }));
        }
        entries
    }

    /// Register every section and subsection with `spy`, in reading order.
    ///
    /// Returns how many ids were newly registered.
    pub fn register_sections(&self, spy: &mut ScrollSpy<String>) -> usize {
        self.outline()
            .into_iter()
            .filter(|entry| {
                spy.observe(entry.id.to_string(), entry.parent.map(str::to_string))
            })
            .count()
    }
}

fn check_id<'a>(seen: &mut HashSet<&'a str>, id: &'a str, title: &str) -> Result<(), ContentError> {
    if id.is_empty() {
        log::debug!("docs: {title:?} has no id");
        return Err(ContentError::EmptyId(title.to_string()));
    }
    if !seen.insert(id) {
        log::debug!("docs: duplicate id {id:?}");
        return Err(ContentError::DuplicateId(id.to_string()));
    }
    Ok(())
}

fn check_tables(owner: &str, blocks: &[Block]) -> Result<(), ContentError> {
    for block in blocks {
        let Block::Table { headers, rows } = block else {
            continue;
        };
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != headers.len())
        {
            return Err(ContentError::RaggedTable {
                owner: owner.to_string(),
                row,
                expected: headers.len(),
                found: cells.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::content::{Section, Subsection};

    fn section(id: &str, subs: &[&str]) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            overview: Vec::new(),
            subsections: subs
                .iter()
                .map(|s| Subsection {
                    id: s.to_string(),
                    title: s.to_uppercase(),
                    content: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn outline_nests_subsections() {
        let doc = Document {
            sections: vec![section("pipeline", &["agentic"]), section("deployment", &[])],
        };
        let ids: Vec<_> = doc.outline().iter().map(|e| (e.id, e.parent)).collect();
        assert_eq!(
            ids,
            [
                ("pipeline", None),
                ("agentic", Some("pipeline")),
                ("deployment", None)
            ]
        );
    }

    #[test]
    fn duplicate_ids_across_levels_are_rejected() {
        let doc = Document {
            sections: vec![section("pipeline", &["pipeline"])],
        };
        assert_eq!(
            doc.validate(),
            Err(ContentError::DuplicateId("pipeline".to_string()))
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let doc = Document {
            sections: vec![section("", &[])],
        };
        assert!(matches!(doc.validate(), Err(ContentError::EmptyId(_))));
    }

    #[test]
    fn ragged_table_is_rejected() {
        let mut doc = Document {
            sections: vec![section("pipeline", &["segmentation"])],
        };
        doc.sections[0].subsections[0].content.push(Block::Table {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string()],
            ],
        });
        assert_eq!(
            doc.validate(),
            Err(ContentError::RaggedTable {
                owner: "segmentation".to_string(),
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }
}
