//! Error types for Barq core library.

/// Errors that can occur across the Barq fleet registry.
///
/// Data-quality problems in imported rows are *not* errors: they are
/// reported as violation lists by `barq-ingest`. This type covers
/// contract breaches (wrong input shape, broken record invariants) and
/// the I/O edges around the core.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller handed over a structurally impossible input
    #[error("Contract violation: {message}")]
    Contract {
        /// What was wrong with the input
        message: String,
    },

    /// A record failed its own invariants on its way into a collection
    #[error("Invariant violated for record '{id}': {message}")]
    Invariant {
        /// Identifier of the offending record
        id: String,
        /// Which invariant was broken
        message: String,
    },

    /// CSV decoding error from an import source
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Barq operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is a programming/contract error.
    ///
    /// Contract errors are never data-dependent: they mean the caller
    /// broke the API contract and the operation must not be retried
    /// with the same input.
    pub fn is_contract(&self) -> bool {
        match self {
            Error::Contract { .. } => true,
            Error::Invariant { .. } => true,
            Error::Csv(_) => false,
            Error::Io(_) => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new contract error.
    pub fn contract<S: Into<String>>(message: S) -> Self {
        Error::Contract {
            message: message.into(),
        }
    }

    /// Creates a new invariant error for the record with the given id.
    pub fn invariant<I, M>(id: I, message: M) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Error::Invariant {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
