//! Contact form fields and their client-side validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[allow(clippy::expect_used)] // literal pattern, cannot fail
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex should not panic")
});

#[allow(clippy::expect_used)] // literal pattern, cannot fail
static PHONE_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+\-]+$").expect("static regex should not panic"));

const MIN_PHONE_DIGITS: usize = 10;

/// Validation failures, shown inline next to the form.
///
/// The display strings are the messages the visitor sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired { fields: Vec<&'static str> },

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Raw values from the lead form, including the hidden `website` honeypot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: String,
    /// Hidden from humans; anything typed here came from a bot.
    pub website: String,
}

/// Which optional fields this deployment of the form collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub require_phone: bool,
}

/// Contact fields that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: String,
    pub honeypot_filled: bool,
}

impl ContactDetails {
    /// Validates the form in the order the visitor sees errors: required
    /// fields, then email shape, then phone.
    ///
    /// The honeypot is not a validation concern; its state is carried on
    /// the result for the submitter to act on.
    pub fn validate(
        &self,
        rules: ValidationRules,
    ) -> Result<ValidatedContact, ValidationError> {
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        let company = self.company.trim();
        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let mut missing = Vec::new();
        if full_name.is_empty() {
            missing.push("full_name");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if company.is_empty() {
            missing.push("company");
        }
        if rules.require_phone && phone.is_none() {
            missing.push("phone");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired { fields: missing });
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        if let Some(phone) = phone {
            if !is_valid_phone(phone) {
                return Err(ValidationError::InvalidPhone);
            }
        }

        Ok(ValidatedContact {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            company: company.to_string(),
            honeypot_filled: !self.website.trim().is_empty(),
        })
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Digits, spaces, parentheses, hyphens and plus signs only, with at least
/// ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_CHARS_REGEX.is_match(phone)
        && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
