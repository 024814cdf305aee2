//! Collection revision stamps.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Identity of one state of a collection.
///
/// Revisions come from a single process-wide counter, so two different
/// collections never share a revision and a memo keyed on a revision can
/// be compared in O(1) without looking at the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Revision(u64);

impl Revision {
    /// Draws a fresh, never-before-seen revision.
    pub fn next() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revisions_are_unique_and_increasing() {
        let a = Revision::next();
        let b = Revision::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_revision_display() {
        let rev = Revision::next();
        assert_eq!(rev.to_string(), format!("r{}", rev.get()));
    }
}
