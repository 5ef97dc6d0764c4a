use api_shared::PatientRequest;
use patient_core::db::open_database;
use patient_core::{
    validate, DatabaseLocation, PatientError, PatientId, PatientService, SqlitePatientRepository,
    ValidationMode,
};
use std::sync::Arc;
use tempfile::TempDir;

fn service_at(location: &DatabaseLocation) -> PatientService {
    let conn = open_database(location).expect("store should open");
    PatientService::new(Arc::new(SqlitePatientRepository::new(conn)))
}

fn jane() -> PatientRequest {
    PatientRequest {
        name: Some("Jane Doe".into()),
        email: Some("jane@example.com".into()),
        address: Some("1 Main St".into()),
        date_of_birth: Some("1990-01-01".into()),
        registered_date: Some("2024-01-01".into()),
    }
}

#[test]
fn full_lifecycle_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let location = DatabaseLocation::File(temp_dir.path().join("data").join("patients.db"));

    let created = {
        let service = service_at(&location);
        let input = validate(&jane(), ValidationMode::Create).unwrap();
        service.create(input).unwrap()
    };
    let id = PatientId::parse(&created.id).unwrap();

    let service = service_at(&location);
    assert_eq!(service.get_by_id(id).unwrap(), created);

    let mut changes = jane();
    changes.address = Some("2 High St".into());
    changes.registered_date = None;
    let updated = service
        .update(id, validate(&changes, ValidationMode::Update).unwrap())
        .unwrap();
    assert_eq!(updated.address, "2 High St");
    assert_eq!(updated.date_of_birth, "1990-01-01");

    service.delete(id).unwrap();
    assert!(matches!(
        service.get_by_id(id).unwrap_err(),
        PatientError::NotFound(_)
    ));
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn invalid_create_persists_nothing() {
    let service = service_at(&DatabaseLocation::InMemory);

    let mut missing_name = jane();
    missing_name.name = None;
    let errors = validate(&missing_name, ValidationMode::Create).unwrap_err();

    assert_eq!(errors.get("name"), Some("Name is required."));
    assert!(service.list_all().unwrap().is_empty());
}
