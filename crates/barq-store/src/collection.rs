//! Insertion-ordered, id-indexed record collections.

use std::collections::HashMap;

use barq_core::{Record, Result};

use crate::revision::Revision;

/// The authoritative set of records of one kind.
///
/// Records keep the order in which their identifier first appeared.
/// Identifiers are unique; every mutation stamps a fresh [`Revision`].
///
/// # Examples
///
/// ```
/// use barq_core::VesselRecord;
/// use barq_store::Collection;
///
/// let mut vessels = Collection::new();
/// vessels.load([
///     VesselRecord::new("1", "Etoile"),
///     VesselRecord::new("2", "Lune"),
///     VesselRecord::new("1", "Etoile II"),
/// ])?;
///
/// assert_eq!(vessels.len(), 2);
/// assert_eq!(vessels.get("1").map(|v| v.name.as_str()), Some("Etoile II"));
/// # Ok::<(), barq_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
    revision: Revision,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            revision: Revision::next(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection.
    ///
    /// When `records` repeats an identifier, the last occurrence wins and
    /// takes the position of the first one.
    ///
    /// # Errors
    ///
    /// Returns the first invariant failure. The collection is left
    /// untouched in that case.
    pub fn load<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let mut next: Vec<T> = Vec::new();
        let mut index = HashMap::new();
        let mut duplicates = 0usize;

        for record in records {
            record.check_invariants()?;
            match index.get(record.id()) {
                Some(&position) => {
                    next[position] = record;
                    duplicates += 1;
                }
                None => {
                    index.insert(record.id().to_string(), next.len());
                    next.push(record);
                }
            }
        }

        self.records = next;
        self.index = index;
        self.revision = Revision::next();

        tracing::info!(
            records = self.records.len(),
            duplicates,
            revision = %self.revision,
            "Collection loaded"
        );
        Ok(())
    }

    /// Inserts a record, or replaces the record with the same identifier
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns an invariant error if the record is not acceptable.
    pub fn upsert(&mut self, record: T) -> Result<()> {
        record.check_invariants()?;
        self.put(record);
        self.revision = Revision::next();
        Ok(())
    }

    /// Upserts many records as a single mutation.
    ///
    /// Every record is checked before any is written, so a failure leaves
    /// the collection untouched. Returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns the first invariant failure.
    pub fn upsert_all<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let records: Vec<T> = records.into_iter().collect();
        for record in &records {
            record.check_invariants()?;
        }

        let count = records.len();
        for record in records {
            self.put(record);
        }
        if count > 0 {
            self.revision = Revision::next();
        }
        Ok(count)
    }

    /// Removes a record by identifier.
    ///
    /// Removing an unknown identifier is a no-op and returns `None`; the
    /// revision only changes when something was removed.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.index.remove(id)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        self.revision = Revision::next();
        Some(removed)
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Returns `true` if a record with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Records in insertion order, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current revision.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    fn put(&mut self, record: T) {
        match self.index.get(record.id()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(record.id().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
