//! Translation of core errors into HTTP responses.
//!
//! [`ApiError`] is the single place where a [`PatientError`] kind becomes a status code and a
//! JSON body. Handlers return `Result<_, ApiError>` and use `?` on core calls.

use api_shared::MessageRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use patient_core::{PatientError, ValidationErrors};

pub const EMAIL_EXISTS_MESSAGE: &str = "Email address already exists.";
pub const NOT_FOUND_MESSAGE: &str = "Patient not found.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Error returned by REST handlers.
#[derive(Debug)]
pub struct ApiError(PatientError);

impl ApiError {
    pub fn kind(&self) -> &PatientError {
        &self.0
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PatientError::Validation(_)
            | PatientError::EmailAlreadyExists(_)
            | PatientError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PatientError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(PatientError::Validation(errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PatientError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            PatientError::Validation(errors) => (status, Json(errors.into_fields())).into_response(),
            PatientError::EmailAlreadyExists(email) => {
                tracing::warn!("Email Already Exists: {}", email);
                (status, Json(MessageRes::new(EMAIL_EXISTS_MESSAGE))).into_response()
            }
            PatientError::NotFound(id) => {
                tracing::warn!("Patient not found: {}", id);
                (status, Json(MessageRes::new(NOT_FOUND_MESSAGE))).into_response()
            }
            PatientError::InvalidInput(message) => {
                (status, Json(MessageRes::new(message))).into_response()
            }
            other => {
                tracing::error!("Unhandled patient service error: {:?}", other);
                (status, Json(MessageRes::new(INTERNAL_ERROR_MESSAGE))).into_response()
            }
        }
    }
}
