// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section bookkeeping.

use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Range;

use hashbrown::HashMap;

use crate::band::ObservationBand;

#[derive(Clone, Debug)]
struct Observed<K> {
    id: K,
    parent: Option<K>,
    intersecting: bool,
}

/// Tracks which registered section is the active one.
///
/// Sections are registered in document order with an optional parent (a
/// subsection points at its section). Visibility entries update a single
/// active id: a section that starts intersecting becomes active, and leaving
/// never clears it, so the last section to enter stays highlighted while the
/// reader is between sections.
#[derive(Clone, Debug)]
pub struct ScrollSpy<K> {
    observed: Vec<Observed<K>>,
    index: HashMap<K, usize>,
    active: Option<K>,
    band: ObservationBand,
    revision: u64,
}

impl<K: Clone + Eq + Hash> Default for ScrollSpy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> ScrollSpy<K> {
    /// Create an empty spy using the default observation band.
    #[must_use]
    pub fn new() -> Self {
        Self::with_band(ObservationBand::default())
    }

    /// Create an empty spy that derives intersections with `band`.
    #[must_use]
    pub fn with_band(band: ObservationBand) -> Self {
        Self {
            observed: Vec::new(),
            index: HashMap::new(),
            active: None,
            band,
            revision: 0,
        }
    }

    /// Observation band used by [`observe_layout`](Self::observe_layout).
    #[must_use]
    pub fn band(&self) -> ObservationBand {
        self.band
    }

    /// Register `id`, optionally as a child of `parent`.
    ///
    /// Returns `false` if `id` was already registered.
    pub fn observe(&mut self, id: K, parent: Option<K>) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.observed.len());
        self.observed.push(Observed {
            id,
            parent,
            intersecting: false,
        });
        true
    }

    /// Stop observing `id`. Clears the active id if it was `id`.
    pub fn unobserve(&mut self, id: &K) -> bool {
        let Some(pos) = self.index.remove(id) else {
            return false;
        };
        self.observed.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        if self.active.as_ref() == Some(id) {
            self.set_active(None);
        }
        true
    }

    /// Drop every registration and the active id.
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.index.clear();
        if self.active.is_some() {
            self.set_active(None);
        }
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Registered ids and their parents, in registration order.
    pub fn sections(&self) -> impl Iterator<Item = (&K, Option<&K>)> + '_ {
        self.observed.iter().map(|o| (&o.id, o.parent.as_ref()))
    }

    /// Apply one visibility entry. Entries for unregistered ids are ignored.
    ///
    /// Returns `true` if the active id changed.
    pub fn apply_entry(&mut self, id: &K, intersecting: bool) -> bool {
        let Some(&pos) = self.index.get(id) else {
            return false;
        };
        self.observed[pos].intersecting = intersecting;
        if intersecting && self.active.as_ref() != Some(id) {
            self.set_active(Some(id.clone()));
            return true;
        }
        false
    }

    /// Apply a batch of entries in order; the last intersecting entry wins.
    ///
    /// Returns `true` if the active id changed.
    pub fn apply_entries<'a>(&mut self, entries: impl IntoIterator<Item = (&'a K, bool)>) -> bool
    where
        K: 'a,
    {
        let before = self.revision;
        for (id, intersecting) in entries {
            self.apply_entry(id, intersecting);
        }
        self.revision != before
    }

    /// Derive entries from section extents in document coordinates.
    ///
    /// Each extent is tested against the observation band for the given scroll
    /// offset and viewport height. Only sections whose intersection state
    /// changed produce an entry, in the order given.
    ///
    /// Returns `true` if the active id changed.
    pub fn observe_layout<'a>(
        &mut self,
        scroll_top: f64,
        viewport_height: f64,
        extents: impl IntoIterator<Item = (&'a K, Range<f64>)>,
    ) -> bool
    where
        K: 'a,
    {
        let band = self.band.range(scroll_top, viewport_height);
        let before = self.revision;
        for (id, extent) in extents {
            let Some(&pos) = self.index.get(id) else {
                continue;
            };
            let now = ObservationBand::overlaps(&band, &extent);
            if now != self.observed[pos].intersecting {
                self.apply_entry(id, now);
            }
        }
        self.revision != before
    }

    /// Returns `true` if `id` is currently intersecting the band.
    #[must_use]
    pub fn is_intersecting(&self, id: &K) -> bool {
        self.index
            .get(id)
            .is_some_and(|&pos| self.observed[pos].intersecting)
    }

    /// The active id, if any section has entered yet.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Returns `true` if `id` is the active id.
    #[must_use]
    pub fn is_active(&self, id: &K) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Returns `true` if `id` or any of its descendants is active.
    ///
    /// Used to highlight a top-level sidebar entry while one of its
    /// subsections is being read.
    #[must_use]
    pub fn is_branch_active(&self, id: &K) -> bool {
        let mut cursor = self.active.as_ref();
        // Bounded by the number of registrations in case of a parent cycle.
        for _ in 0..=self.observed.len() {
            let Some(current) = cursor else {
                return false;
            };
            if current == id {
                return true;
            }
            cursor = self
                .index
                .get(current)
                .and_then(|&pos| self.observed[pos].parent.as_ref());
        }
        false
    }

    /// Monotonic counter bumped whenever the active id changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set_active(&mut self, id: Option<K>) {
        self.active = id;
        self.revision += 1;
        log::trace!("scrollspy: active section changed (revision {})", self.revision);
    }
}
