//! # Patient Core
//!
//! Core business logic for the patient service.
//!
//! This crate contains the request-validation-and-persistence pipeline:
//! - Field validation of inbound patient requests (`validation`)
//! - The patient entity and its identifier (`model`, `uuid`)
//! - SQLite-backed storage with versioned migrations (`db`, `repositories`)
//! - DTO/entity mapping (`mapper`)
//! - Business rules such as email uniqueness (`patient`)
//!
//! **No API concerns**: HTTP servers, routing, and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod mapper;
pub mod model;
pub mod patient;
pub mod repositories;
pub mod uuid;
pub mod validation;

pub use config::{database_location_from_env_value, CoreConfig, DatabaseLocation};
pub use constants::DEFAULT_DATABASE_PATH;
pub use error::{PatientError, PatientResult};
pub use model::{NewPatient, Patient, PatientDetails};
pub use patient::PatientService;
pub use repositories::{PatientRepository, SqlitePatientRepository};
pub use uuid::PatientId;
pub use validation::{validate, ValidatedRequest, ValidationErrors, ValidationMode};

pub use patient_types::{EmailAddress, NonEmptyText, TextError};
