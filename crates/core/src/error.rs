use crate::uuid::PatientId;
use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("a patient with this email already exists: {0}")]
    EmailAlreadyExists(String),
    #[error("patient not found with ID: {0}")]
    NotFound(PatientId),
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    #[error("patient store lock poisoned")]
    StorePoisoned,
    #[error("invalid persisted patient data: {0}")]
    InvalidData(String),
}

impl From<ValidationErrors> for PatientError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
