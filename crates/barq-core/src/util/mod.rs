//! Utility modules shared by the ingest and query layers.
//!
//! # Modules
//!
//! - [`text`]: Blank checks, header normalization, case-insensitive matching

pub mod text;
