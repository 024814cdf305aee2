//! # barq-query
//!
//! Derived views over the fleet registry.
//!
//! Views are pure projections of a [`Collection`](barq_store::Collection)
//! and a criteria value. Each view is cached in a [`Memo`] keyed on the
//! collection's [`Revision`](barq_store::Revision) and the criteria, so
//! asking again with unchanged inputs hands back the very same `Arc`
//! without touching a single record.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 barq-query                   │
//! ├──────────────────────────────────────────────┤
//! │  FilterCriteria / PaymentCriteria            │
//! │    (empty string = no constraint)            │
//! ├──────────────────────────────────────────────┤
//! │  VesselViews                                 │
//! │  ├── select_all       Memo<Revision>         │
//! │  ├── select_filtered  Memo<(Revision, crit)> │
//! │  ├── select_ports     Memo<Revision>         │
//! │  └── select_by_id     indexed, uncached      │
//! │  PaymentViews                                │
//! │  └── select_filtered / select_total          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use barq_core::VesselRecord;
//! use barq_query::{FilterCriteria, VesselViews};
//! use barq_store::Collection;
//! use std::sync::Arc;
//!
//! let mut vessels = Collection::new();
//! vessels.load([
//!     VesselRecord::new("1", "Etoile").with_port("Casablanca"),
//!     VesselRecord::new("2", "Lune").with_port("Agadir"),
//! ])?;
//!
//! let views = VesselViews::new();
//! let criteria = FilterCriteria::default().with_search("lun");
//!
//! let first = views.select_filtered(&vessels, &criteria);
//! assert_eq!(first.len(), 1);
//! assert_eq!(first[0].id, "2");
//!
//! let again = views.select_filtered(&vessels, &criteria.clone());
//! assert!(Arc::ptr_eq(&first, &again));
//! # Ok::<(), barq_core::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod criteria;
pub mod memo;
pub mod parties;
pub mod payments;
pub mod vessels;

mod proptests;

pub use criteria::{FilterCriteria, PaymentCriteria};
pub use memo::{Memo, MemoStats};
pub use parties::{select_party, select_party_for_vessel};
pub use payments::PaymentViews;
pub use vessels::{VesselViewStats, VesselViews};
