//! # barq-store
//!
//! Normalized in-memory collections for the fleet registry.
//!
//! - [`Collection`]: an insertion-ordered, id-indexed set of records
//!   stamped with a [`Revision`] that changes on every mutation
//! - [`FleetStore`]: the vessel, responsible-party, and payment
//!   collections plus loaded metadata and [`LoadStatus`]
//!
//! The store is the only writer of records. Derived views read a
//! collection together with its revision and never mutate it.

#![forbid(unsafe_code)]

pub mod collection;
pub mod fleet;
pub mod revision;
pub mod status;

mod proptests;

pub use collection::Collection;
pub use fleet::FleetStore;
pub use revision::Revision;
pub use status::LoadStatus;
