//! Single-entry memo cells.
//!
//! A [`Memo`] remembers the last key it was asked about and the result it
//! computed for it. Asking again with an equal key returns a clone of the
//! same `Arc`; any other key recomputes and replaces the entry.
//!
//! Cells use `RefCell`/`Cell`, so a `Memo` is `!Sync`: views are meant to
//! live on the single thread that owns the store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Arc;

/// Hit/miss counters of a memo cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Calls answered from the cached entry.
    pub hits: u64,
    /// Calls that ran the computation.
    pub misses: u64,
}

/// Cache of the last (key, result) pair.
pub struct Memo<K, V: ?Sized> {
    slot: RefCell<Option<(K, Arc<V>)>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<K, V: ?Sized> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }
}

impl<K: PartialEq, V: ?Sized> Memo<K, V> {
    /// Creates an empty memo cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `key`, or runs `compute` and caches
    /// its result.
    ///
    /// `compute` runs with no borrow held, so it may itself consult other
    /// memo cells.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce() -> Arc<V>,
    {
        {
            let slot = self.slot.borrow();
            if let Some((cached_key, value)) = slot.as_ref()
                && *cached_key == key
            {
                self.hits.set(self.hits.get() + 1);
                return Arc::clone(value);
            }
        }

        let value = compute();
        self.misses.set(self.misses.get() + 1);
        *self.slot.borrow_mut() = Some((key, Arc::clone(&value)));
        value
    }

    /// Drops the cached entry; the next call recomputes.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    /// Returns `true` if an entry is cached.
    pub fn is_primed(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}

impl<K, V: ?Sized> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("hits", &self.hits.get())
            .field("misses", &self.misses.get())
            .finish()
    }
}
