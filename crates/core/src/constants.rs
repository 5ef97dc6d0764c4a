//! Constants used throughout the patient core crate.

/// Default SQLite database file when no explicit location is configured.
pub const DEFAULT_DATABASE_PATH: &str = "patient_data/patients.db";

/// Configuration value selecting a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Maximum number of characters allowed in a patient name.
pub const MAX_NAME_LEN: usize = 100;

/// Wire and storage format for calendar dates (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How long a connection waits on a locked database file before failing.
pub const DB_BUSY_TIMEOUT_SECS: u64 = 5;
