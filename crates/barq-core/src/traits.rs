//! Traits shared by every stored entity.

use crate::Result;

/// An entity that can live in a normalized collection.
///
/// Collections index records by [`Record::id`] and call
/// [`Record::check_invariants`] before accepting them.
pub trait Record: Clone {
    /// Stable, unique identifier of this record.
    fn id(&self) -> &str;

    /// Verify the record's own invariants.
    ///
    /// The default implementation only requires a non-empty identifier.
    fn check_invariants(&self) -> Result<()> {
        if self.id().trim().is_empty() {
            return Err(crate::Error::invariant(
                self.id(),
                "identifier must not be empty",
            ));
        }
        Ok(())
    }
}
