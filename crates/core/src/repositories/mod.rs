//! Repository layer: data access contracts and their SQLite implementation.
//!
//! Repositories speak in entity types and `PatientError`; SQL stays behind this boundary.

pub mod patients;

pub use patients::{PatientRepository, SqlitePatientRepository};
