//! Loading/error flags exposed to the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-fetch status of the store.
///
/// Defaults to "not loading, no error" so readers never observe an
/// undefined status before the first fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStatus {
    /// A fetch is in flight.
    pub loading: bool,

    /// Message of the last failed fetch, cleared by the next success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadStatus {
    /// Returns `true` if neither loading nor failed.
    pub fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    /// Marks a fetch as started. A previous error is kept until the
    /// fetch resolves.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Marks a fetch as succeeded.
    pub fn finish(&mut self) {
        self.loading = false;
        self.error = None;
    }

    /// Marks a fetch as failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, self.loading) {
            (_, true) => write!(f, "loading"),
            (Some(reason), false) => write!(f, "failed: {reason}"),
            (None, false) => write!(f, "idle"),
        }
    }
}
