//! Patient wire DTOs.
//!
//! Field names are camelCase on the wire. Dates travel as `yyyy-MM-dd` strings and are only
//! parsed by the validation layer in `patient-core`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound body for `POST /patients` and `PUT /patients/{id}`.
///
/// Every field is optional at the serde level so that an absent field is reported as a
/// validation violation for that field, instead of rejecting the whole body.
/// `registeredDate` is only consulted when creating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientRequest {
    /// Patient's full name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "1 Main St")]
    pub address: Option<String>,
    #[schema(example = "1990-01-01")]
    pub date_of_birth: Option<String>,
    #[schema(example = "2024-01-01")]
    pub registered_date: Option<String>,
}

/// Outbound patient representation. The registered date is deliberately not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
}

/// Generic `{"message": "..."}` body used for non-field error responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
