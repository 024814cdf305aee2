//! Barq Core: shared types, errors, and registration rules.
//!
//! This crate provides the foundational types used across all Barq crates.
//! It has no internal Barq dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`registration`]: Registration-number format rule
//! - [`traits`]: The [`Record`] trait implemented by every stored entity
//! - [`types`]: Vessel, responsible-party, and payment records
//! - [`util`]: Text helpers shared by validation and filtering

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod error;
pub mod registration;
pub mod traits;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use registration::is_valid_registration;
pub use traits::Record;
pub use types::{Payment, PaymentStatus, ResponsibleParty, VesselRecord, VesselStatus};
