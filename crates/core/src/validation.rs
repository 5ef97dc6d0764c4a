//! Input validation for patient requests.
//!
//! [`validate`] checks a [`PatientRequest`] against the rule set for a [`ValidationMode`] and
//! either returns the parsed, typed values or every violation found. Violations are collected,
//! not fail-fast, and each field reports at most one message.
//!
//! Field keys in [`ValidationErrors`] use the wire (camelCase) names so the map can be returned
//! to the client as-is.

use crate::constants::{DATE_FORMAT, MAX_NAME_LEN};
use crate::model::PatientDetails;
use api_shared::PatientRequest;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use patient_types::{EmailAddress, NonEmptyText, TextError};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex")
});

/// Which rule set applies. `Create` additionally requires `registeredDate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Field name to human-readable violation message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.0
    }

    fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// A request that passed validation, with dates parsed.
///
/// `registered_date` is `Some` exactly when validated in [`ValidationMode::Create`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub details: PatientDetails,
    pub registered_date: Option<NaiveDate>,
}

/// Validates `request` under `mode`.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every violated field.
pub fn validate(
    request: &PatientRequest,
    mode: ValidationMode,
) -> Result<ValidatedRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = match NonEmptyText::bounded(text(&request.name), MAX_NAME_LEN) {
        Ok(name) => Some(name),
        Err(TextError::TooLong { .. }) => {
            errors.add("name", "Name cannot exceed 100 characters");
            None
        }
        Err(_) => {
            errors.add("name", "Name is required.");
            None
        }
    };

    let email = match EmailAddress::parse(text(&request.email)) {
        Ok(email) => Some(email),
        Err(TextError::InvalidEmail) => {
            errors.add("email", "Email should be valid");
            None
        }
        Err(_) => {
            errors.add("email", "Email is required");
            None
        }
    };

    let address = match NonEmptyText::new(text(&request.address)) {
        Ok(address) => Some(address),
        Err(_) => {
            errors.add("address", "Address is required");
            None
        }
    };

    let date_of_birth = required_date(
        &request.date_of_birth,
        "dateOfBirth",
        "Date of birth is required",
        "Date of birth must be a valid date (yyyy-MM-dd)",
        &mut errors,
    );

    let registered_date = match mode {
        ValidationMode::Create => required_date(
            &request.registered_date,
            "registeredDate",
            "Registered date is required",
            "Registered date must be a valid date (yyyy-MM-dd)",
            &mut errors,
        ),
        ValidationMode::Update => None,
    };

    match (name, email, address, date_of_birth) {
        (Some(name), Some(email), Some(address), Some(date_of_birth)) if errors.is_empty() => {
            Ok(ValidatedRequest {
                details: PatientDetails {
                    name,
                    email,
                    address,
                    date_of_birth,
                },
                registered_date,
            })
        }
        _ => Err(errors),
    }
}

/// Parses a zero-padded `yyyy-MM-dd` date. Anything chrono would also tolerate (signs, short
/// fields, padding) is rejected.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn required_date(
    value: &Option<String>,
    field: &str,
    missing: &str,
    malformed: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    let raw = value.as_deref().unwrap_or_default();
    if raw.trim().is_empty() {
        errors.add(field, missing);
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.add(field, malformed);
    }
    parsed
}
