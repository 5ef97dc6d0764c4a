//! SQLite storage bootstrap and schema migration entry points.
//!
//! Invariants:
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No patient data is read or written before migrations succeed.

pub mod migrations;
mod open;

pub use open::{open_database, open_in_memory};
