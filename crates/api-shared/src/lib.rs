//! # API Shared
//!
//! Wire-format definitions shared by the patient service crates.
//!
//! Contains:
//! - Patient request/response DTOs (`patient` module)
//! - The health check service and its response body
//! - The generic `{"message": ...}` body used for error responses
//!
//! These types derive `utoipa::ToSchema` so the REST layer can publish them in its
//! OpenAPI document. Used by `patient-core` (mapping) and `api-rest` (handlers).

pub mod health;
pub mod patient;

pub use health::{HealthRes, HealthService};
pub use patient::{MessageRes, PatientRequest, PatientResponse};
