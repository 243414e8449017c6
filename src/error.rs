//! Error types surfaced by the record operations.
//!
//! Validation problems are detected before any statement runs, so they carry
//! only the rule that was violated. Everything coming back from SQLite is
//! split into foreign-key failures and the rest.

use std::num::ParseIntError;

use rusqlite::{ffi, Error as SqlError};
use thiserror::Error;

/// Malformed or missing input rejected before the store is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("All camp fields are required")]
    MissingCampFields,

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    #[error("All donor fields are required")]
    MissingDonorFields,

    /// A numeric field could not be parsed. `field` names the input.
    #[error("{field} must be an integer: {source}")]
    NotAnInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Age must be between 18-65")]
    AgeOutOfRange,

    #[error("Invalid blood group. Valid formats: A+, B-, etc.")]
    InvalidBloodGroup,

    #[error("Invalid Camp ID format")]
    InvalidCampId,
}

/// Every failure a record operation can report.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A foreign key did not resolve, e.g. a donation for a camp that does not
    /// exist.
    #[error("referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    #[error("database error: {0}")]
    Store(#[source] SqlError),

    /// The database location could not be prepared on disk.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// True when the failure happened before any statement was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}

impl From<SqlError> for RegistryError {
    fn from(err: SqlError) -> Self {
        if let SqlError::SqliteFailure(code, message) = &err {
            if code.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                let detail = message
                    .clone()
                    .unwrap_or_else(|| "FOREIGN KEY constraint failed".to_string());
                return RegistryError::ReferentialIntegrity(detail);
            }
        }
        RegistryError::Store(err)
    }
}

/// Convenience alias for results with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
