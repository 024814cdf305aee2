//! Promotion of validated rows and batch import reports.

use barq_core::{Error, Result, VesselRecord, VesselStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::field::Field;
use crate::row::ImportRow;
use crate::rules::{Violation, validate};

/// Settings applied when promoting rows to records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Status given to rows that do not carry one.
    #[serde(default)]
    pub default_status: VesselStatus,
}

/// A row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// 1-based position of the row in the import batch.
    pub row_number: usize,
    /// Every violation found, in rule order. Never empty.
    pub violations: Vec<Violation>,
}

impl RejectedRow {
    /// Violation messages, ready to render verbatim.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }
}

/// Outcome of importing a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Rows that passed validation, promoted to records, in input order.
    pub accepted: Vec<VesselRecord>,
    /// Rows that failed validation, in input order.
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    /// Number of rows examined.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Returns `true` if every row was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validate a row and, if it passes, build the vessel record.
///
/// The identifier comes from the row's `id` column when present,
/// otherwise a fresh UUID is generated. Status falls back to
/// `options.default_status`.
///
/// # Errors
///
/// Returns the complete violation list when the row is not acceptable.
pub fn promote(
    row: &ImportRow,
    options: &ImportOptions,
) -> std::result::Result<VesselRecord, Vec<Violation>> {
    let violations = validate(row);
    if !violations.is_empty() {
        return Err(violations);
    }

    let id = row
        .text(Field::Id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let status = row
        .text(Field::Status)
        .and_then(|s| s.parse::<VesselStatus>().ok())
        .unwrap_or(options.default_status);

    Ok(VesselRecord {
        id,
        name: row.text(Field::Name).unwrap_or_default(),
        registration: row.text(Field::Registration),
        port: row.text(Field::Port).unwrap_or_default(),
        affiliation: row.text(Field::Affiliation).unwrap_or_default(),
        status,
        gerant_id: row.text(Field::Gerant),
    })
}

/// Validate and promote a batch of rows.
///
/// A bad row never stops the batch: it is recorded in
/// [`ImportReport::rejected`] and processing continues with the next one.
pub fn import_rows<I>(rows: I, options: &ImportOptions) -> ImportReport
where
    I: IntoIterator<Item = ImportRow>,
{
    let mut report = ImportReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;
        match promote(&row, options) {
            Ok(record) => report.accepted.push(record),
            Err(violations) => {
                tracing::warn!(
                    row = row_number,
                    violations = violations.len(),
                    "Rejected import row"
                );
                report.rejected.push(RejectedRow {
                    row_number,
                    violations,
                });
            }
        }
    }

    tracing::info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "Import batch validated"
    );
    report
}

/// Import a JSON array of row objects.
///
/// # Errors
///
/// Returns [`Error::Contract`] if `payload` is not an array, or if any
/// element is not an object. Data problems inside well-shaped rows are
/// reported in the returned [`ImportReport`] instead.
pub fn import_json(payload: Value, options: &ImportOptions) -> Result<ImportReport> {
    let Value::Array(items) = payload else {
        return Err(Error::contract("import payload must be an array of rows"));
    };

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            ImportRow::from_json(item)
                .map_err(|e| Error::contract(format!("row {}: {e}", index + 1)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(import_rows(rows, options))
}
