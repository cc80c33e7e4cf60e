// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for [`RevealControl`](crate::RevealControl).

use core::fmt;

use attira_event_state::drag::AxisThresholds;

/// Distances that govern how a gesture is claimed and resolved.
///
/// Supplied at construction and immutable for the control's lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GestureThresholds {
    /// Travel from the anchor (on either axis) before a touch gesture picks an axis.
    pub resolve_distance_px: f64,
    /// Horizontal travel must exceed vertical travel times this ratio to start a drag.
    pub horizontal_dominance_ratio: f64,
    /// When set, a gesture is claimed only if it starts this close to the handle.
    ///
    /// `None` accepts a gesture anywhere in the viewport.
    pub handle_hit_radius_px: Option<f64>,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            resolve_distance_px: 10.0,
            horizontal_dominance_ratio: 1.5,
            handle_hit_radius_px: None,
        }
    }
}

impl GestureThresholds {
    /// The axis-resolution subset, as understood by [`DragState`](attira_event_state::drag::DragState).
    #[must_use]
    pub fn axis(&self) -> AxisThresholds {
        AxisThresholds {
            resolve_distance: self.resolve_distance_px,
            dominance_ratio: self.horizontal_dominance_ratio,
        }
    }
}

/// Options recognized by [`RevealControl`](crate::RevealControl).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RevealConfig {
    /// Reveal fraction used at mount and after every image-pair change.
    pub default_position: f64,
    /// Claiming and axis-resolution distances.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub thresholds: GestureThresholds,
    /// Ask the host to cancel native scrolling while a horizontal drag is active.
    pub suppress_native_scroll_while_dragging: bool,
    /// A mouse press this soon after the last touch contact is treated as touch compatibility noise.
    ///
    /// Measured from the touch end when the host reports it through
    /// [`RevealControl::on_gesture_end_at`](crate::RevealControl::on_gesture_end_at),
    /// otherwise from the touch start.
    pub emulated_mouse_guard_ms: u64,
    /// The guard also requires the press to land this close to the last touch point.
    pub emulated_mouse_guard_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            default_position: 0.5,
            thresholds: GestureThresholds::default(),
            suppress_native_scroll_while_dragging: true,
            emulated_mouse_guard_ms: 2500,
            emulated_mouse_guard_px: 25.0,
        }
    }
}

impl RevealConfig {
    /// Configuration that accepts a drag anywhere in the viewport.
    #[must_use]
    pub fn anywhere() -> Self {
        Self::default()
    }

    /// Configuration that only claims gestures starting within `radius` of the handle.
    #[must_use]
    pub fn handle_only(radius: f64) -> Self {
        Self::default().with_handle_hit_radius(Some(radius))
    }

    /// Set the reveal fraction used at mount and on image-pair changes.
    #[must_use]
    pub fn with_default_position(mut self, position: f64) -> Self {
        self.default_position = position;
        self
    }

    /// Set the touch travel needed before a gesture picks an axis.
    #[must_use]
    pub fn with_resolve_distance(mut self, px: f64) -> Self {
        self.thresholds.resolve_distance_px = px;
        self
    }

    /// Set how strongly horizontal travel must dominate to start a drag.
    #[must_use]
    pub fn with_dominance_ratio(mut self, ratio: f64) -> Self {
        self.thresholds.horizontal_dominance_ratio = ratio;
        self
    }

    /// Restrict claiming to a radius around the handle, or `None` for anywhere.
    #[must_use]
    pub fn with_handle_hit_radius(mut self, radius: Option<f64>) -> Self {
        self.thresholds.handle_hit_radius_px = radius;
        self
    }

    /// Enable or disable native scroll suppression during horizontal drags.
    #[must_use]
    pub fn with_native_scroll_suppression(mut self, suppress: bool) -> Self {
        self.suppress_native_scroll_while_dragging = suppress;
        self
    }

    /// Check every option, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.default_position;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::DefaultPositionOutOfRange(p));
        }
        let d = self.thresholds.resolve_distance_px;
        if !is_positive(d) {
            return Err(ConfigError::InvalidResolveDistance(d));
        }
        let r = self.thresholds.horizontal_dominance_ratio;
        if !is_positive(r) {
            return Err(ConfigError::InvalidDominanceRatio(r));
        }
        if let Some(radius) = self.thresholds.handle_hit_radius_px {
            if !is_positive(radius) {
                return Err(ConfigError::InvalidHandleHitRadius(radius));
            }
        }
        let g = self.emulated_mouse_guard_px;
        if !(g.is_finite() && g >= 0.0) {
            return Err(ConfigError::InvalidMouseGuardDistance(g));
        }
        Ok(())
    }

    /// Replace every invalid option with a usable value.
    ///
    /// Out-of-range default positions are clamped; other invalid values fall
    /// back to their defaults. An invalid hit radius disables the handle-only
    /// restriction.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut out = self;
        if out.default_position.is_nan() {
            out.default_position = defaults.default_position;
        } else {
            out.default_position = out.default_position.clamp(0.0, 1.0);
        }
        if !is_positive(out.thresholds.resolve_distance_px) {
            out.thresholds.resolve_distance_px = defaults.thresholds.resolve_distance_px;
        }
        if !is_positive(out.thresholds.horizontal_dominance_ratio) {
            out.thresholds.horizontal_dominance_ratio =
                defaults.thresholds.horizontal_dominance_ratio;
        }
        if out.thresholds.handle_hit_radius_px.is_some_and(|r| !is_positive(r)) {
            out.thresholds.handle_hit_radius_px = None;
        }
        if !(out.emulated_mouse_guard_px.is_finite() && out.emulated_mouse_guard_px >= 0.0) {
            out.emulated_mouse_guard_px = defaults.emulated_mouse_guard_px;
        }
        if out != self {
            log::debug!("reveal config sanitized: {self:?} -> {out:?}");
        }
        out
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// A configuration value that the control cannot use as given.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `default_position` is outside `[0, 1]` or NaN.
    DefaultPositionOutOfRange(f64),
    /// `resolve_distance_px` is not a positive finite number.
    InvalidResolveDistance(f64),
    /// `horizontal_dominance_ratio` is not a positive finite number.
    InvalidDominanceRatio(f64),
    /// `handle_hit_radius_px` is set but not a positive finite number.
    InvalidHandleHitRadius(f64),
    /// `emulated_mouse_guard_px` is negative or not finite.
    InvalidMouseGuardDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultPositionOutOfRange(v) => {
                write!(f, "default position {v} is outside [0, 1]")
            }
            Self::InvalidResolveDistance(v) => {
                write!(f, "resolve distance {v}px must be positive and finite")
            }
            Self::InvalidDominanceRatio(v) => {
                write!(f, "horizontal dominance ratio {v} must be positive and finite")
            }
            Self::InvalidHandleHitRadius(v) => {
                write!(f, "handle hit radius {v}px must be positive and finite")
            }
            Self::InvalidMouseGuardDistance(v) => {
                write!(f, "emulated mouse guard distance {v}px must be non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
