// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Component-local open/closed state where at most one key is open.
///
/// A footer accordion uses a key per section; a single toggle such as a
/// revealed e-mail address or a mobile menu uses `Disclosure<()>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disclosure<K> {
    open: Option<K>,
    revision: u64,
}

impl<K> Default for Disclosure<K> {
    fn default() -> Self {
        Self {
            open: None,
            revision: 0,
        }
    }
}

impl<K: PartialEq> Disclosure<K> {
    /// Everything closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `key` if it is closed, close it if it is open.
    ///
    /// Opening a key closes whichever key was open before.
    /// Returns `true` if `key` is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            self.close();
            false
        } else {
            self.open = Some(key);
            self.revision += 1;
            true
        }
    }

    /// Open `key`, closing any other. Returns `true` if anything changed.
    pub fn open(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            return false;
        }
        self.open = Some(key);
        self.revision += 1;
        true
    }

    /// Close whatever is open. Returns `true` if anything changed.
    pub fn close(&mut self) -> bool {
        if self.open.take().is_some() {
            self.revision += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if `key` is the open one.
    #[must_use]
    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    /// The open key, if any.
    #[must_use]
    pub fn open_key(&self) -> Option<&K> {
        self.open.as_ref()
    }

    /// Bumps on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_keeps_one_open() {
        let mut footer = Disclosure::new();
        assert!(footer.toggle("product"));
        assert!(footer.toggle("company"));
        assert!(!footer.is_open(&"product"));
        assert_eq!(footer.open_key(), Some(&"company"));

        assert!(!footer.toggle("company"));
        assert_eq!(footer.open_key(), None);
        assert_eq!(footer.revision(), 3);
    }

    #[test]
    fn redundant_calls_do_not_bump() {
        let mut email = Disclosure::<()>::new();
        assert!(!email.close());
        assert!(email.open(()));
        assert!(!email.open(()));
        assert_eq!(email.revision(), 1);
        assert!(email.is_open(&()));
    }
}
