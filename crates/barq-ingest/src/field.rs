//! Logical import fields and their accepted column spellings.
//!
//! Spreadsheets arrive with hand-edited headers: sometimes the internal
//! field name, sometimes the French column title from the export
//! template. Each logical field carries an explicit priority list of
//! accepted keys; lookups walk the list in order and stop at the first
//! non-empty value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical field of an imported vessel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Record identifier.
    Id,
    /// Display name of the vessel.
    Name,
    /// Affiliation (owner/cooperative) code.
    Affiliation,
    /// Registration number.
    Registration,
    /// Home port.
    Port,
    /// Operational status.
    Status,
    /// Responsible party reference.
    Gerant,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::Affiliation,
        Field::Registration,
        Field::Port,
        Field::Status,
        Field::Gerant,
    ];

    /// Accepted row keys for this field, highest priority first.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Field::Id => &["id", "ID"],
            Field::Name => &["name", "nomBarque", "Nom de la barque", "Nom"],
            Field::Affiliation => &["affiliation", "Affiliation"],
            Field::Registration => &["immatriculation", "Immatriculation", "registration"],
            Field::Port => &["port", "portAttache", "Port d'attache", "Port"],
            Field::Status => &["status", "statut", "Statut"],
            Field::Gerant => &["gerantId", "gerant", "Gérant"],
        }
    }

    /// Human-readable label used in violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "Identifier",
            Field::Name => "Name",
            Field::Affiliation => "Affiliation",
            Field::Registration => "Registration number",
            Field::Port => "Port",
            Field::Status => "Status",
            Field::Gerant => "Responsible party",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.synonyms()[0])
    }
}
