//! # barq-ingest
//!
//! Validation pipeline gating bulk imports into the fleet registry.
//!
//! An import source (spreadsheet export, JSON payload) produces untyped
//! [`ImportRow`]s. Each row is checked against every rule in
//! [`rules::validate`]; the full list of [`Violation`]s comes back in a
//! stable order so a UI can show every problem at once. Rows with no
//! violations are promoted to [`VesselRecord`](barq_core::VesselRecord)s.
//!
//! ```text
//! CSV / JSON ──► ImportRow ──► validate ──► [] ──► promote ──► VesselRecord
//!                                  │
//!                                  └─► [Violation, ...] ──► RejectedRow
//! ```
//!
//! Malformed data never produces an `Err`. Only a structurally impossible
//! input (a JSON value that is not an object, unreadable CSV) does.

#![forbid(unsafe_code)]

pub mod csv_source;
pub mod field;
pub mod import;
pub mod row;
pub mod rules;

mod proptests;

pub use csv_source::{CsvOptions, read_csv, read_csv_path};
pub use field::Field;
pub use import::{ImportOptions, ImportReport, RejectedRow, import_json, import_rows, promote};
pub use row::ImportRow;
pub use rules::{Violation, ViolationKind, validate};
