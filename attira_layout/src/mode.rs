// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which layout branch a page renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LayoutMode {
    /// Wide viewport: sticky gallery stack, persistent sidebar.
    #[default]
    Desktop,
    /// Narrow viewport: swipeable deck, collapsible navigation.
    Mobile,
}

impl LayoutMode {
    /// Returns `true` for [`LayoutMode::Mobile`].
    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Viewport width separating mobile from desktop layouts.
///
/// Widths strictly below the breakpoint are mobile.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint(pub f64);

impl Default for Breakpoint {
    fn default() -> Self {
        Self(768.0)
    }
}

impl Breakpoint {
    /// Classify a viewport width. Returns `None` for non-finite widths.
    #[must_use]
    pub fn classify(self, width: f64) -> Option<LayoutMode> {
        if !width.is_finite() {
            return None;
        }
        Some(if width < self.0 {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        })
    }
}

/// Recomputes the [`LayoutMode`] on resize and reports only changes.
///
/// Starts as [`LayoutMode::Desktop`] until the first measurement arrives.
#[derive(Clone, Debug, Default)]
pub struct LayoutTracker {
    breakpoint: Breakpoint,
    mode: LayoutMode,
    measured: bool,
}

impl LayoutTracker {
    /// Track against a custom breakpoint.
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            mode: LayoutMode::Desktop,
            measured: false,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Returns `true` once a finite width has been seen.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Feed the new viewport width. Returns the new mode if it changed.
    pub fn on_resize(&mut self, width: f64) -> Option<LayoutMode> {
        let Some(mode) = self.breakpoint.classify(width) else {
            log::debug!("layout: ignoring non-finite width {width}");
            return None;
        };
        self.measured = true;
        if mode == self.mode {
            return None;
        }
        log::trace!("layout: {:?} -> {mode:?} at width {width}", self.mode);
        self.mode = mode;
        Some(mode)
    }
}
