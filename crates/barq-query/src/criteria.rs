//! Filter criteria for derived views.
//!
//! Every field is a plain `String` and the empty string is the single
//! "do not constrain on this field" sentinel. Omitted and `null` fields
//! both deserialize to `""`, so the predicates never have to distinguish
//! between absent and empty.

use barq_core::util::text::contains_folded;
use barq_core::{Error, Payment, Result, VesselRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Active filter of the vessel list.
///
/// # Examples
///
/// ```
/// use barq_query::FilterCriteria;
///
/// let criteria = FilterCriteria::from_json(serde_json::json!({"port": "Agadir"}))?;
/// assert_eq!(criteria.port, "Agadir");
/// assert_eq!(criteria.search, "");
/// assert!(!criteria.is_unconstrained());
/// # Ok::<(), barq_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free text matched against name and registration, ignoring case.
    #[serde(deserialize_with = "null_as_empty")]
    pub search: String,

    /// Exact home port.
    #[serde(deserialize_with = "null_as_empty")]
    pub port: String,

    /// Exact status name (`active` / `inactive`).
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,

    /// Exact responsible-party identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub gerant_id: String,
}

impl FilterCriteria {
    /// Parses criteria sent by the rendering layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] if `value` is not an object or a field
    /// has the wrong type.
    pub fn from_json(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::contract("filter criteria must be an object"));
        }
        serde_json::from_value(value)
            .map_err(|e| Error::contract(format!("malformed filter criteria: {e}")))
    }

    /// Sets the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the port filter.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the responsible-party filter.
    pub fn with_gerant(mut self, gerant_id: impl Into<String>) -> Self {
        self.gerant_id = gerant_id.into();
        self
    }

    /// The search term, exactly as given. Only the empty string leaves the
    /// search unconstrained; whitespace is part of the substring.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Returns `true` if no field constrains the view.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term().is_empty()
            && self.port.is_empty()
            && self.status.is_empty()
            && self.gerant_id.is_empty()
    }

    /// Prepares the criteria for evaluation against many records.
    pub fn predicate(&self) -> VesselPredicate<'_> {
        VesselPredicate {
            needle: self.search_term().to_lowercase(),
            criteria: self,
        }
    }
}

/// [`FilterCriteria`] with the search term lowered once.
#[derive(Debug)]
pub struct VesselPredicate<'a> {
    needle: String,
    criteria: &'a FilterCriteria,
}

impl VesselPredicate<'_> {
    /// Returns `true` if `vessel` satisfies every active constraint.
    pub fn matches(&self, vessel: &VesselRecord) -> bool {
        let c = self.criteria;
        let search_ok = self.needle.is_empty()
            || contains_folded(&vessel.name, &self.needle)
            || contains_folded(vessel.registration_str(), &self.needle);
        let port_ok = c.port.is_empty() || vessel.port == c.port;
        let status_ok = c.status.is_empty() || vessel.status.as_str() == c.status;
        let gerant_ok =
            c.gerant_id.is_empty() || vessel.gerant_id.as_deref() == Some(c.gerant_id.as_str());

        search_ok && port_ok && status_ok && gerant_ok
    }
}

/// Active filter of the payment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentCriteria {
    /// Exact vessel identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub vessel_id: String,

    /// Exact status name (`pending` / `completed` / `failed`).
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
}

impl PaymentCriteria {
    /// Parses criteria sent by the rendering layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] if `value` is not an object or a field
    /// has the wrong type.
    pub fn from_json(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::contract("payment criteria must be an object"));
        }
        serde_json::from_value(value)
            .map_err(|e| Error::contract(format!("malformed payment criteria: {e}")))
    }

    /// Restricts to one vessel.
    pub fn for_vessel(mut self, vessel_id: impl Into<String>) -> Self {
        self.vessel_id = vessel_id.into();
        self
    }

    /// Restricts to one status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Returns `true` if `payment` satisfies every active constraint.
    pub fn matches(&self, payment: &Payment) -> bool {
        (self.vessel_id.is_empty() || payment.vessel_id == self.vessel_id)
            && (self.status.is_empty() || payment.status.as_str() == self.status)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
