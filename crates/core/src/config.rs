//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Environment variables are read by the binary only; nothing in
//! request handling consults the process environment.

use crate::constants::{DEFAULT_DATABASE_PATH, IN_MEMORY_DATABASE};
use std::path::PathBuf;

/// Where the patient store keeps its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A private in-memory database that disappears with the process.
    InMemory,
    /// A SQLite database file. Parent directories are created on open.
    File(PathBuf),
}

impl std::fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InMemory => f.write_str(IN_MEMORY_DATABASE),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database: DatabaseLocation,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(database: DatabaseLocation) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &DatabaseLocation {
        &self.database
    }
}

/// Parse the database location from an optional string value.
///
/// `None` or an empty/whitespace value selects [`DEFAULT_DATABASE_PATH`]; the literal
/// `:memory:` selects an in-memory database; anything else is treated as a file path.
pub fn database_location_from_env_value(value: Option<String>) -> DatabaseLocation {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        Some(IN_MEMORY_DATABASE) => DatabaseLocation::InMemory,
        Some(path) => DatabaseLocation::File(PathBuf::from(path)),
        None => DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_value_uses_default_file() {
        let expected = DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(database_location_from_env_value(None), expected);
        assert_eq!(database_location_from_env_value(Some("  ".into())), expected);
    }

    #[test]
    fn memory_marker_selects_in_memory() {
        assert_eq!(
            database_location_from_env_value(Some(" :memory: ".into())),
            DatabaseLocation::InMemory
        );
    }

    #[test]
    fn other_values_are_file_paths() {
        let location = database_location_from_env_value(Some("/var/lib/patients.db".into()));
        assert_eq!(
            location,
            DatabaseLocation::File(PathBuf::from("/var/lib/patients.db"))
        );
        assert_eq!(location.to_string(), "/var/lib/patients.db");
    }
}
