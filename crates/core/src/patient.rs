//! Patient service.
//!
//! The only component with business rules: email uniqueness checks, not-found handling and the
//! create/update/delete lifecycle. Inputs arrive already validated (see [`crate::validation`]);
//! outputs are wire responses built by [`crate::mapper`].

use crate::error::{PatientError, PatientResult};
use crate::mapper;
use crate::repositories::PatientRepository;
use crate::uuid::PatientId;
use crate::validation::ValidatedRequest;
use api_shared::PatientResponse;
use std::sync::Arc;

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

impl PatientService {
    /// Creates a new instance of PatientService over the given store.
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    /// Fetches a single patient.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::NotFound`] if no record has this identifier.
    pub fn get_by_id(&self, id: PatientId) -> PatientResult<PatientResponse> {
        let patient = self
            .repository
            .find_by_id(&id)?
            .ok_or(PatientError::NotFound(id))?;
        Ok(mapper::to_response(&patient))
    }

    /// Lists every patient in insertion order. No pagination.
    pub fn list_all(&self) -> PatientResult<Vec<PatientResponse>> {
        let patients = self.repository.find_all()?;
        Ok(patients.iter().map(mapper::to_response).collect())
    }

    /// Creates a patient from a create-validated request.
    ///
    /// The email check here gives the common case a clean answer; the store's unique index
    /// still rejects a concurrent writer that slipped in between check and insert, which is
    /// reported the same way.
    ///
    /// # Errors
    ///
    /// Returns `PatientError` if:
    /// - the request carries no registered date ([`PatientError::InvalidInput`]),
    /// - any existing patient has the same email ([`PatientError::EmailAlreadyExists`]),
    /// - the store fails.
    pub fn create(&self, request: ValidatedRequest) -> PatientResult<PatientResponse> {
        let new_patient = mapper::to_new_patient(request).ok_or_else(|| {
            PatientError::InvalidInput("registered date is required to create a patient".into())
        })?;

        let email = &new_patient.details.email;
        if self.repository.exists_by_email(email)? {
            return Err(PatientError::EmailAlreadyExists(email.to_string()));
        }

        let patient = self.repository.insert(new_patient)?;
        tracing::info!(patient_id = %patient.id, "patient created");
        Ok(mapper::to_response(&patient))
    }

    /// Replaces the mutable fields of an existing patient. The registered date is untouched.
    ///
    /// # Errors
    ///
    /// Returns `PatientError` if:
    /// - no record has this identifier ([`PatientError::NotFound`]),
    /// - a *different* patient already uses the email ([`PatientError::EmailAlreadyExists`]),
    /// - the store fails.
    pub fn update(&self, id: PatientId, request: ValidatedRequest) -> PatientResult<PatientResponse> {
        let mut patient = self
            .repository
            .find_by_id(&id)?
            .ok_or(PatientError::NotFound(id))?;

        let email = &request.details.email;
        if self.repository.exists_by_email_excluding_id(email, &id)? {
            return Err(PatientError::EmailAlreadyExists(email.to_string()));
        }

        patient.apply(request.details);
        self.repository.update(&patient)?;
        tracing::info!(patient_id = %patient.id, "patient updated");
        Ok(mapper::to_response(&patient))
    }

    /// Deletes a patient. Deleting an absent identifier succeeds without effect.
    pub fn delete(&self, id: PatientId) -> PatientResult<()> {
        if self.repository.delete_by_id(&id)? {
            tracing::info!(patient_id = %id, "patient deleted");
        } else {
            tracing::debug!(patient_id = %id, "delete requested for absent patient");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use crate::repositories::SqlitePatientRepository;
    use crate::validation::{validate, ValidationMode};
    use api_shared::PatientRequest;

    fn service() -> PatientService {
        let conn = open_in_memory().expect("in-memory store should open");
        PatientService::new(Arc::new(SqlitePatientRepository::new(conn)))
    }

    fn request(name: &str, email: &str) -> PatientRequest {
        PatientRequest {
            name: Some(name.into()),
            email: Some(email.into()),
            address: Some("1 Main St".into()),
            date_of_birth: Some("1990-01-01".into()),
            registered_date: Some("2024-01-01".into()),
        }
    }

    fn create_input(name: &str, email: &str) -> ValidatedRequest {
        validate(&request(name, email), ValidationMode::Create).unwrap()
    }

    fn update_input(name: &str, email: &str) -> ValidatedRequest {
        validate(&request(name, email), ValidationMode::Update).unwrap()
    }

    #[test]
    fn create_echoes_input_with_fresh_id() {
        let service = service();
        let created = service
            .create(create_input("Jane Doe", "jane@example.com"))
            .unwrap();

        assert_eq!(created.name, "Jane Doe");
        assert_eq!(created.email, "jane@example.com");
        assert_eq!(created.address, "1 Main St");
        assert_eq!(created.date_of_birth, "1990-01-01");
        assert!(PatientId::parse(&created.id).is_ok());

        let other = service
            .create(create_input("John Doe", "john@example.com"))
            .unwrap();
        assert_ne!(created.id, other.id);
    }

    #[test]
    fn second_create_with_same_email_conflicts() {
        let service = service();
        service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();

        let err = service
            .create(create_input("Janet", "jane@example.com"))
            .unwrap_err();
        assert!(matches!(err, PatientError::EmailAlreadyExists(_)));
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn create_without_registered_date_is_rejected() {
        let err = service()
            .create(update_input("Jane", "jane@example.com"))
            .unwrap_err();
        assert!(matches!(err, PatientError::InvalidInput(_)));
    }

    #[test]
    fn get_by_id_returns_current_fields_or_not_found() {
        let service = service();
        let created = service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();
        let id = PatientId::parse(&created.id).unwrap();

        assert_eq!(service.get_by_id(id).unwrap(), created);

        let err = service.get_by_id(PatientId::new()).unwrap_err();
        assert!(matches!(err, PatientError::NotFound(_)));
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let service = service();
        service.create(create_input("B", "b@example.com")).unwrap();
        service.create(create_input("A", "a@example.com")).unwrap();

        let names: Vec<String> = service
            .list_all()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn update_to_own_email_succeeds() {
        let service = service();
        let created = service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();
        let id = PatientId::parse(&created.id).unwrap();

        let updated = service
            .update(id, update_input("Jane Smith", "jane@example.com"))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(service.get_by_id(id).unwrap(), updated);
    }

    #[test]
    fn update_to_other_patients_email_conflicts() {
        let service = service();
        service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();
        let john = service
            .create(create_input("John", "john@example.com"))
            .unwrap();
        let john_id = PatientId::parse(&john.id).unwrap();

        let err = service
            .update(john_id, update_input("John", "jane@example.com"))
            .unwrap_err();
        assert!(matches!(err, PatientError::EmailAlreadyExists(_)));
        assert_eq!(service.get_by_id(john_id).unwrap().email, "john@example.com");
    }

    #[test]
    fn update_unknown_patient_is_not_found() {
        let err = service()
            .update(PatientId::new(), update_input("Jane", "jane@example.com"))
            .unwrap_err();
        assert!(matches!(err, PatientError::NotFound(_)));
    }

    #[test]
    fn delete_is_idempotent() {
        let service = service();
        let created = service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();
        let id = PatientId::parse(&created.id).unwrap();

        service.delete(id).unwrap();
        service.delete(id).unwrap();
        service.delete(PatientId::new()).unwrap();

        assert!(matches!(
            service.get_by_id(id).unwrap_err(),
            PatientError::NotFound(_)
        ));
    }

    #[test]
    fn deleted_email_can_be_reused() {
        let service = service();
        let created = service
            .create(create_input("Jane", "jane@example.com"))
            .unwrap();
        service
            .delete(PatientId::parse(&created.id).unwrap())
            .unwrap();

        assert!(service
            .create(create_input("Jane", "jane@example.com"))
            .is_ok());
    }
}
