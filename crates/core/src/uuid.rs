//! Patient identifiers.
//!
//! Patients are identified by a random (version 4) UUID allocated by the store when the record
//! is inserted. On the wire and in the database the identifier is the lowercase hyphenated form,
//! e.g. `550e8400-e29b-41d4-a716-446655440000`.
//!
//! Externally supplied identifiers (path segments) go through [`PatientId::parse`], which accepts
//! any representation `uuid` understands and rejects everything else as
//! [`PatientError::InvalidInput`].

use crate::error::{PatientError, PatientResult};
use std::{fmt, str::FromStr};

pub use ::uuid::Uuid;

/// Identifier of a persisted patient record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Allocates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier supplied from outside the core (API path segments).
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::InvalidInput`] if `input` is not a UUID.
    pub fn parse(input: &str) -> PatientResult<Self> {
        Uuid::parse_str(input.trim()).map(Self).map_err(|_| {
            PatientError::InvalidInput(format!("invalid patient ID: '{}'", input))
        })
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PatientId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PatientId {
    type Err = PatientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
