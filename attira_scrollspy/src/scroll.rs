// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Default height of the fixed header that anchored scrolls leave clear.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

/// Default duration of an eased sidebar scroll, in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 400.0;

/// Timing curve for [`ScrollAnimation`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, gentle stop.
    #[default]
    EaseOutCubic,
    /// Gentle start and stop.
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// One sampled step of a [`ScrollAnimation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Scroll offset to apply this frame.
    pub offset: f64,
    /// `true` once the animation has reached its target.
    pub finished: bool,
}

/// Eased scroll from one offset to another, driven by frame timestamps.
///
/// The first call to [`sample`](Self::sample) fixes the start time, matching
/// how animation-frame callbacks report time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    /// Animate from `from` to `to` with the default duration and easing.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::default(),
            started_at: None,
        }
    }

    /// Set the duration; non-positive durations finish on the first sample.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Final offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Offset for the frame at `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> ScrollFrame {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return ScrollFrame {
                offset: self.to,
                finished: true,
            };
        }
        ScrollFrame {
            offset: self.from + (self.to - self.from) * self.easing.apply(progress),
            finished: false,
        }
    }
}

/// Document scroll offset that puts an element just below the fixed header.
///
/// `element_top` is the element's top relative to the viewport and
/// `page_offset` the current document scroll. Negative targets clamp to zero.
#[must_use]
pub fn anchor_scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}

/// Scroll offset that centers `element` inside a scrolling `container`.
///
/// Both ranges are vertical extents in the same (viewport) coordinates, and
/// `scroll_top` is the container's current scroll offset. Returns `None` when
/// the element is already fully visible, so no scroll is needed.
#[must_use]
pub fn center_in_container(
    element: Range<f64>,
    container: Range<f64>,
    scroll_top: f64,
) -> Option<f64> {
    if element.start >= container.start && element.end <= container.end {
        return None;
    }
    let container_height = container.end - container.start;
    let element_height = element.end - element.start;
    Some(scroll_top + (element.start - container.start) - container_height / 2.0 + element_height / 2.0)
}

/// Where a freshly loaded page should scroll to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitialScroll<'a> {
    /// No fragment: jump to the top immediately.
    Top,
    /// Smoothly scroll to the element with this id.
    Anchor(&'a str),
}

impl<'a> InitialScroll<'a> {
    /// Interpret a location fragment such as `"#segmentation"`.
    #[must_use]
    pub fn from_hash(hash: &'a str) -> Self {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            Self::Top
        } else {
            Self::Anchor(id)
        }
    }
}
