//! Conversions between wire DTOs and the patient entity.
//!
//! Pure functions only; nothing here touches the store.

use crate::constants::DATE_FORMAT;
use crate::model::{NewPatient, Patient};
use crate::validation::ValidatedRequest;
use api_shared::PatientResponse;

/// Maps a stored patient to its outbound representation (registered date omitted).
pub fn to_response(patient: &Patient) -> PatientResponse {
    PatientResponse {
        id: patient.id.to_string(),
        name: patient.name.as_str().to_string(),
        email: patient.email.as_str().to_string(),
        address: patient.address.as_str().to_string(),
        date_of_birth: patient.date_of_birth.format(DATE_FORMAT).to_string(),
    }
}

/// Builds an insertable patient from a create-validated request.
///
/// Returns `None` if the request was not validated in create mode and so carries no
/// registered date.
pub fn to_new_patient(request: ValidatedRequest) -> Option<NewPatient> {
    let registered_date = request.registered_date?;
    Some(NewPatient {
        details: request.details,
        registered_date,
    })
}
