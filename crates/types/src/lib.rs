//! # Patient Types
//!
//! Small validated value types shared across the patient service crates.
//!
//! Once constructed, a value of one of these types is known to satisfy its
//! rule, so downstream code (the store, the mapper) never re-checks it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic RFC 5322 address check: dot-atom local part, `@`, dot-separated host labels.
///
/// Single-label hosts (`user@localhost`) are accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text was longer than the permitted number of characters
    #[error("Text cannot exceed {max} characters")]
    TooLong { max: usize },
    /// The input was not a syntactically valid email address
    #[error("Invalid email address")]
    InvalidEmail,
}

/// A string type that guarantees non-blank content.
///
/// Unlike a trimming wrapper, the original text is kept verbatim: it only has to contain at
/// least one non-whitespace character. Patient records echo back exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the input is empty or whitespace only.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let text = input.into();
        if text.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(text))
    }

    /// Creates a `NonEmptyText` that is additionally bounded to `max` characters.
    ///
    /// Length is measured in Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input and `TextError::TooLong` when the
    /// character count exceeds `max`.
    pub fn bounded(input: impl Into<String>, max: usize) -> Result<Self, TextError> {
        let text = Self::new(input)?;
        if text.0.chars().count() > max {
            return Err(TextError::TooLong { max });
        }
        Ok(text)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An email address that passed syntax validation.
///
/// Comparison is exact and case-sensitive; no normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input and `TextError::InvalidEmail` when the
    /// address does not match the accepted syntax.
    pub fn parse(input: impl Into<String>) -> Result<Self, TextError> {
        let text = input.into();
        if text.trim().is_empty() {
            return Err(TextError::Empty);
        }
        if !EMAIL_RE.is_match(&text) {
            return Err(TextError::InvalidEmail);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_rejects_blank_input() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new("   \t"), Err(TextError::Empty));
    }

    #[test]
    fn non_empty_text_keeps_surrounding_whitespace() {
        let text = NonEmptyText::new("  Jane Doe ").unwrap();
        assert_eq!(text.as_str(), "  Jane Doe ");
    }

    #[test]
    fn bounded_counts_characters_not_bytes() {
        let hundred_accents = "é".repeat(100);
        assert!(NonEmptyText::bounded(hundred_accents, 100).is_ok());

        let too_long = "a".repeat(101);
        assert_eq!(
            NonEmptyText::bounded(too_long, 100),
            Err(TextError::TooLong { max: 100 })
        );
    }

    #[test]
    fn email_accepts_common_addresses() {
        for ok in [
            "jane@example.com",
            "first.last+tag@sub.example.co.uk",
            "user@localhost",
            "o'brien@example.ie",
        ] {
            assert!(EmailAddress::parse(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "not-an-email",
            "@example.com",
            "jane@",
            "jane..doe@example.com",
            ".jane@example.com",
            "jane@-example.com",
            "jane doe@example.com",
            "jane@example..com",
        ] {
            assert_eq!(
                EmailAddress::parse(bad),
                Err(TextError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn email_blank_is_empty_not_invalid() {
        assert_eq!(EmailAddress::parse("  "), Err(TextError::Empty));
    }

    #[test]
    fn email_is_case_sensitive() {
        let lower = EmailAddress::parse("jane@example.com").unwrap();
        let upper = EmailAddress::parse("Jane@example.com").unwrap();
        assert_ne!(lower, upper);
    }
}
