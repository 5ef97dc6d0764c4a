//! Connection bootstrap for the patient store.
//!
//! Returned connections have `foreign_keys=ON`, a busy timeout, and all migrations applied.

use super::migrations::apply_migrations;
use crate::config::DatabaseLocation;
use crate::constants::DB_BUSY_TIMEOUT_SECS;
use crate::error::{PatientError, PatientResult};
use rusqlite::Connection;
use std::time::{Duration, Instant};

/// Opens the database at `location` and applies all pending migrations.
///
/// For a file location, missing parent directories are created first.
///
/// # Errors
///
/// Returns `PatientError` if:
/// - the parent directory cannot be created ([`PatientError::StorageDirCreation`]),
/// - SQLite cannot open or configure the connection,
/// - a migration fails or the schema is newer than this binary supports.
pub fn open_database(location: &DatabaseLocation) -> PatientResult<Connection> {
    let started_at = Instant::now();
    tracing::info!(database = %location, "opening patient store");

    let conn = match location {
        DatabaseLocation::InMemory => Connection::open_in_memory(),
        DatabaseLocation::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(PatientError::StorageDirCreation)?;
            }
            Connection::open(path)
        }
    };

    let result = conn
        .map_err(PatientError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn));

    match &result {
        Ok(_) => tracing::info!(
            database = %location,
            duration_ms = started_at.elapsed().as_millis() as u64,
            "patient store ready"
        ),
        Err(err) => tracing::error!(
            database = %location,
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "failed to open patient store"
        ),
    }

    result
}

/// Opens a fresh in-memory database with migrations applied.
pub fn open_in_memory() -> PatientResult<Connection> {
    open_database(&DatabaseLocation::InMemory)
}

fn bootstrap_connection(conn: &mut Connection) -> PatientResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(DB_BUSY_TIMEOUT_SECS))?;
    apply_migrations(conn)?;
    Ok(())
}
