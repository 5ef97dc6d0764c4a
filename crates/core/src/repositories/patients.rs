//! Patient repository contract and SQLite implementation.
//!
//! Invariants:
//! - Identifiers are allocated here, on insert.
//! - Email uniqueness is enforced by a unique index on `patients.email`; a violation on any
//!   write surfaces as [`PatientError::EmailAlreadyExists`], whatever the caller checked before.
//! - Read paths reject invalid persisted state ([`PatientError::InvalidData`]) instead of
//!   masking it.

use crate::error::{PatientError, PatientResult};
use crate::model::{NewPatient, Patient};
use crate::uuid::PatientId;
use chrono::NaiveDate;
use patient_types::{EmailAddress, NonEmptyText};
use rusqlite::{params, Connection, Row};
use std::sync::{Mutex, MutexGuard};

const PATIENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    address,
    date_of_birth,
    registered_date
FROM patients";

/// Storage operations needed by the patient service.
pub trait PatientRepository: Send + Sync {
    /// Stores `patient` under a freshly generated identifier and returns the stored record.
    fn insert(&self, patient: NewPatient) -> PatientResult<Patient>;
    fn find_by_id(&self, id: &PatientId) -> PatientResult<Option<Patient>>;
    /// All records in insertion order.
    fn find_all(&self) -> PatientResult<Vec<Patient>>;
    fn exists_by_email(&self, email: &EmailAddress) -> PatientResult<bool>;
    fn exists_by_email_excluding_id(
        &self,
        email: &EmailAddress,
        id: &PatientId,
    ) -> PatientResult<bool>;
    /// Overwrites the mutable fields of the record with `patient.id`.
    ///
    /// Fails with [`PatientError::NotFound`] if no such record exists.
    fn update(&self, patient: &Patient) -> PatientResult<()>;
    /// Returns `true` if a record was removed.
    fn delete_by_id(&self, id: &PatientId) -> PatientResult<bool>;
}

/// SQLite-backed patient repository.
///
/// A single connection is shared behind a mutex; SQLite serialises writers anyway.
pub struct SqlitePatientRepository {
    conn: Mutex<Connection>,
}

impl SqlitePatientRepository {
    /// Wraps a connection that already has migrations applied (see [`crate::db`]).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> PatientResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| PatientError::StorePoisoned)
    }
}

impl PatientRepository for SqlitePatientRepository {
    fn insert(&self, patient: NewPatient) -> PatientResult<Patient> {
        let patient = Patient::from_new(PatientId::new(), patient);
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO patients (
                id,
                name,
                email,
                address,
                date_of_birth,
                registered_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                patient.id.to_string(),
                patient.name.as_str(),
                patient.email.as_str(),
                patient.address.as_str(),
                patient.date_of_birth,
                patient.registered_date,
            ],
        )
        .map_err(|err| write_error(err, &patient.email))?;

        Ok(patient)
    }

    fn find_by_id(&self, id: &PatientId) -> PatientResult<Option<Patient>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{PATIENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(read_row(row)?.into_patient()?));
        }

        Ok(None)
    }

    fn find_all(&self) -> PatientResult<Vec<Patient>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{PATIENT_SELECT_SQL} ORDER BY rowid;"))?;

        let mut patients = Vec::new();
        for row in stmt.query_map([], read_row)? {
            patients.push(row?.into_patient()?);
        }

        Ok(patients)
    }

    fn exists_by_email(&self, email: &EmailAddress) -> PatientResult<bool> {
        let conn = self.conn()?;
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM patients WHERE email = ?1);",
            params![email.as_str()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn exists_by_email_excluding_id(
        &self,
        email: &EmailAddress,
        id: &PatientId,
    ) -> PatientResult<bool> {
        let conn = self.conn()?;
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM patients WHERE email = ?1 AND id <> ?2);",
            params![email.as_str(), id.to_string()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn update(&self, patient: &Patient) -> PatientResult<()> {
        let conn = self.conn()?;

        let changed = conn
            .execute(
                "UPDATE patients
                 SET
                    name = ?1,
                    email = ?2,
                    address = ?3,
                    date_of_birth = ?4
                 WHERE id = ?5;",
                params![
                    patient.name.as_str(),
                    patient.email.as_str(),
                    patient.address.as_str(),
                    patient.date_of_birth,
                    patient.id.to_string(),
                ],
            )
            .map_err(|err| write_error(err, &patient.email))?;

        if changed == 0 {
            return Err(PatientError::NotFound(patient.id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: &PatientId) -> PatientResult<bool> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM patients WHERE id = ?1;", params![id.to_string()])?;
        Ok(changed > 0)
    }
}

/// Raw column values, before the domain types re-validate them.
struct PatientRow {
    id: String,
    name: String,
    email: String,
    address: String,
    date_of_birth: NaiveDate,
    registered_date: NaiveDate,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        address: row.get(3)?,
        date_of_birth: row.get(4)?,
        registered_date: row.get(5)?,
    })
}

impl PatientRow {
    fn into_patient(self) -> PatientResult<Patient> {
        let row = self;
        let id = PatientId::parse(&row.id)
            .map_err(|_| PatientError::InvalidData(format!("invalid patient id '{}'", row.id)))?;
        let invalid = |field: &str| PatientError::InvalidData(format!("{field} for patient {id}"));

        Ok(Patient {
            id,
            name: NonEmptyText::new(row.name).map_err(|_| invalid("blank name"))?,
            email: EmailAddress::parse(row.email).map_err(|_| invalid("invalid email"))?,
            address: NonEmptyText::new(row.address).map_err(|_| invalid("blank address"))?,
            date_of_birth: row.date_of_birth,
            registered_date: row.registered_date,
        })
    }
}

fn write_error(err: rusqlite::Error, email: &EmailAddress) -> PatientError {
    if is_unique_violation(&err) {
        return PatientError::EmailAlreadyExists(email.to_string());
    }
    PatientError::Database(err)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
