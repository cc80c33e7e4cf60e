// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Wrap-around index over a fixed number of demos.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoCarousel {
    len: usize,
    active: usize,
}

impl DemoCarousel {
    /// A carousel over `len` demos, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Number of demos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no demos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active demo.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Advance, wrapping from the last demo to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    /// Go back, wrapping from the first demo to the last.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.active = self.active.checked_sub(1).unwrap_or(self.len - 1);
        }
        self.active
    }

    /// Jump to `index`. Returns `false` if it is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut demos = DemoCarousel::new(4);
        assert_eq!(demos.prev(), 3);
        assert_eq!(demos.next(), 0);
        assert_eq!(demos.next(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut demos = DemoCarousel::new(0);
        assert!(demos.is_empty());
        assert_eq!(demos.next(), 0);
        assert_eq!(demos.prev(), 0);
        assert!(!demos.select(0));
    }
}
