// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Horizontal strip of the viewport that counts as "being read".
///
/// Insets are fractions of the viewport height trimmed from the top and the
/// bottom. The default keeps the strip between 20% and 30% of the viewport
/// height, the equivalent of a `-20% 0px -70% 0px` root margin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObservationBand {
    /// Fraction of the viewport height excluded at the top.
    pub top_inset: f64,
    /// Fraction of the viewport height excluded at the bottom.
    pub bottom_inset: f64,
}

impl Default for ObservationBand {
    fn default() -> Self {
        Self {
            top_inset: 0.2,
            bottom_inset: 0.7,
        }
    }
}

impl ObservationBand {
    /// The band in document coordinates for a scroll offset and viewport height.
    ///
    /// Insets that overlap collapse the band to an empty range.
    #[must_use]
    pub fn range(&self, scroll_top: f64, viewport_height: f64) -> Range<f64> {
        let start = scroll_top + viewport_height * self.top_inset;
        let end = scroll_top + viewport_height - viewport_height * self.bottom_inset;
        start..end.max(start)
    }

    /// Returns `true` if `extent` shares a non-empty span with `band`.
    #[must_use]
    pub fn overlaps(band: &Range<f64>, extent: &Range<f64>) -> bool {
        band.start < band.end && extent.start < band.end && extent.end > band.start
    }
}
