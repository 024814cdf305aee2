//! The canonical vessel record.

use serde::{Deserialize, Serialize};

use crate::registration::{REGISTRATION_FORMAT, is_valid_registration};
use crate::types::VesselStatus;
use crate::{Error, Record, Result};

/// A registered vessel ("barque").
///
/// This is the single canonical shape. Older payloads spelled some fields
/// differently (`nomBarque`, `portAttache`, `immatriculation`); those
/// spellings are accepted when deserializing but never produced.
///
/// # Examples
///
/// ```
/// use barq_core::{VesselRecord, VesselStatus};
///
/// let vessel = VesselRecord::new("1", "Etoile")
///     .with_port("Casablanca")
///     .with_registration("10/2-345");
/// assert_eq!(vessel.status, VesselStatus::Active);
/// assert_eq!(vessel.registration.as_deref(), Some("10/2-345"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselRecord {
    /// Unique identifier within the collection.
    pub id: String,

    /// Display name.
    #[serde(alias = "nomBarque")]
    pub name: String,

    /// Registration number, e.g. `10/2-345`.
    #[serde(default, alias = "immatriculation", skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,

    /// Home port.
    #[serde(default, alias = "portAttache")]
    pub port: String,

    /// Affiliation (owner/cooperative) code.
    #[serde(default)]
    pub affiliation: String,

    /// Operational status.
    #[serde(default)]
    pub status: VesselStatus,

    /// Identifier of the responsible party (gérant), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gerant_id: Option<String>,
}

impl VesselRecord {
    /// Creates an active vessel with only an identifier and a name.
    pub fn new<I, N>(id: I, name: N) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            registration: None,
            port: String::new(),
            affiliation: String::new(),
            status: VesselStatus::default(),
            gerant_id: None,
        }
    }

    /// Sets the registration number.
    pub fn with_registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = Some(registration.into());
        self
    }

    /// Sets the home port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Sets the affiliation code.
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: VesselStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches the vessel to a responsible party.
    pub fn with_gerant(mut self, gerant_id: impl Into<String>) -> Self {
        self.gerant_id = Some(gerant_id.into());
        self
    }

    /// Registration number, or the empty string when absent.
    pub fn registration_str(&self) -> &str {
        self.registration.as_deref().unwrap_or("")
    }
}

impl Record for VesselRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn check_invariants(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invariant(&self.id, "identifier must not be empty"));
        }
        if let Some(code) = &self.registration
            && !is_valid_registration(code)
        {
            return Err(Error::invariant(
                &self.id,
                format!("registration '{code}' does not match {REGISTRATION_FORMAT}"),
            ));
        }
        Ok(())
    }
}
