//! Patient entity model.
//!
//! Fields hold validated types, so an entity that exists in memory always satisfies the
//! per-field rules. Email uniqueness is a collection-wide invariant and is owned by the store.

use crate::uuid::PatientId;
use chrono::NaiveDate;
use patient_types::{EmailAddress, NonEmptyText};

/// The mutable part of a patient record. Updates replace all of it at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: NonEmptyText,
    pub email: EmailAddress,
    pub address: NonEmptyText,
    pub date_of_birth: NaiveDate,
}

/// A patient that has not been stored yet and therefore has no identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPatient {
    pub details: PatientDetails,
    pub registered_date: NaiveDate,
}

/// A persisted patient record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: NonEmptyText,
    pub email: EmailAddress,
    pub address: NonEmptyText,
    pub date_of_birth: NaiveDate,
    /// Set once at creation; never touched by [`Patient::apply`].
    pub registered_date: NaiveDate,
}

impl Patient {
    /// Builds the stored form of `new` under the identifier allocated by the store.
    pub fn from_new(id: PatientId, new: NewPatient) -> Self {
        let PatientDetails {
            name,
            email,
            address,
            date_of_birth,
        } = new.details;

        Self {
            id,
            name,
            email,
            address,
            date_of_birth,
            registered_date: new.registered_date,
        }
    }

    /// Overwrites every mutable field with `details`.
    pub fn apply(&mut self, details: PatientDetails) {
        self.name = details.name;
        self.email = details.email;
        self.address = details.address;
        self.date_of_birth = details.date_of_birth;
    }
}
