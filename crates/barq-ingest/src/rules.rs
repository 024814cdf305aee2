//! Row validation rules.
//!
//! Every rule runs against every row; none short-circuits another. Each
//! rule pushes into a shared accumulator, and the accumulator is returned
//! in rule order, so the same row always yields the same message
//! sequence.

use barq_core::registration::{REGISTRATION_FORMAT, is_valid_registration};
use barq_core::VesselStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::Field;
use crate::row::ImportRow;

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The field is absent or empty under every accepted key.
    Required,
    /// The field is present but its value is not acceptable.
    Format,
}

/// A single human-readable reason an imported row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field the violation is about.
    pub field: Field,
    /// Kind of violation.
    pub kind: ViolationKind,
}

impl Violation {
    /// A "field is required" violation.
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: ViolationKind::Required,
        }
    }

    /// A "field has a bad value" violation.
    pub fn format(field: Field) -> Self {
        Self {
            field,
            kind: ViolationKind::Format,
        }
    }

    /// The message shown to the operator.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.field, self.kind) {
            (field, ViolationKind::Required) => write!(f, "{} is required", field.label()),
            (Field::Registration, ViolationKind::Format) => write!(
                f,
                "{} must match the format {REGISTRATION_FORMAT}",
                Field::Registration.label()
            ),
            (Field::Status, ViolationKind::Format) => write!(
                f,
                "{} must be either {} or {}",
                Field::Status.label(),
                VesselStatus::Active,
                VesselStatus::Inactive
            ),
            (field, ViolationKind::Format) => write!(f, "{} has an invalid value", field.label()),
        }
    }
}

type Rule = fn(&ImportRow, &mut Vec<Violation>);

/// Rules in reporting order.
const RULES: &[Rule] = &[
    require_name,
    require_affiliation,
    require_registration,
    registration_format,
    status_value,
];

/// Validate one import row.
///
/// Returns every violation, in rule order. An empty vector means the row
/// may be promoted to a vessel record.
///
/// # Examples
///
/// ```
/// use barq_ingest::{ImportRow, validate};
///
/// let row = ImportRow::new()
///     .with("affiliation", "X")
///     .with("immatriculation", "10/2-7")
///     .with("name", "Test");
/// assert!(validate(&row).is_empty());
///
/// let messages: Vec<String> = validate(&ImportRow::new())
///     .iter()
///     .map(|v| v.to_string())
///     .collect();
/// assert_eq!(
///     messages,
///     [
///         "Name is required",
///         "Affiliation is required",
///         "Registration number is required",
///     ]
/// );
/// ```
pub fn validate(row: &ImportRow) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in RULES {
        rule(row, &mut violations);
    }
    violations
}

fn require(field: Field, row: &ImportRow, out: &mut Vec<Violation>) {
    if !row.has(field) {
        out.push(Violation::required(field));
    }
}

fn require_name(row: &ImportRow, out: &mut Vec<Violation>) {
    require(Field::Name, row, out);
}

fn require_affiliation(row: &ImportRow, out: &mut Vec<Violation>) {
    require(Field::Affiliation, row, out);
}

fn require_registration(row: &ImportRow, out: &mut Vec<Violation>) {
    require(Field::Registration, row, out);
}

fn registration_format(row: &ImportRow, out: &mut Vec<Violation>) {
    if let Some(code) = row.text(Field::Registration)
        && !is_valid_registration(&code)
    {
        out.push(Violation::format(Field::Registration));
    }
}

fn status_value(row: &ImportRow, out: &mut Vec<Violation>) {
    if let Some(status) = row.text(Field::Status)
        && status.parse::<VesselStatus>().is_err()
    {
        out.push(Violation::format(Field::Status));
    }
}
