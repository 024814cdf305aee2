//! Responsible parties (gérants).

use serde::{Deserialize, Serialize};

use crate::Record;

/// The person accountable for one or more vessels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleParty {
    /// Unique identifier, referenced by [`VesselRecord::gerant_id`](crate::VesselRecord::gerant_id).
    pub id: String,

    /// Full name.
    pub full_name: String,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// National identity card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
}

impl ResponsibleParty {
    /// Creates a party with no contact details.
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            phone: None,
            cin: None,
        }
    }
}

impl Record for ResponsibleParty {
    fn id(&self) -> &str {
        &self.id
    }
}
