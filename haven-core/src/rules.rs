//! Booking validation rules, shared by the submission handler and the
//! booking form state so both reject exactly the same records.
//!
//! Only the shape of each field is checked. There is no card checksum and
//! no check that the expiration date lies in the future.

use std::sync::LazyLock;
use regex::Regex;
use crate::booking::{BookingField, BookingRecord, ValidationErrorSet};

// Digit classes are ASCII on purpose: `\d` in `regex` also matches other
// Unicode decimal digits.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("valid phone pattern"));
static CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("valid card pattern"));
static EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("valid expiry pattern"));
static CVV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("valid cvv pattern"));

/// How a single field is checked.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Non-empty after trimming surrounding whitespace.
    Required,
    /// Whole value must match the pattern; whitespace is not trimmed.
    Pattern(&'static LazyLock<Regex>),
}

impl Rule {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::Pattern(pattern) => pattern.is_match(value),
        }
    }
}

/// Rule and failure message for a field.
pub fn rule_for(field: BookingField) -> (Rule, &'static str) {
    match field {
        BookingField::FirstName => (Rule::Required, "First name is required"),
        BookingField::LastName => (Rule::Required, "Last name is required"),
        BookingField::Email => (Rule::Pattern(&EMAIL), "Valid email is required"),
        BookingField::PhoneNumber => (Rule::Pattern(&PHONE), "Valid phone number is required"),
        BookingField::CardNumber => (Rule::Pattern(&CARD), "Valid card number is required"),
        BookingField::ExpirationDate => (Rule::Pattern(&EXPIRY), "Valid expiration date is required"),
        BookingField::Cvv => (Rule::Pattern(&CVV), "Valid CVV is required"),
        BookingField::StreetAddress => (Rule::Required, "Street address is required"),
        BookingField::City => (Rule::Required, "City is required"),
        BookingField::State => (Rule::Required, "State is required"),
        BookingField::ZipCode => (Rule::Required, "Zip code is required"),
        BookingField::Country => (Rule::Required, "Country is required"),
    }
}

/// Checks one value, returning the message when it fails.
pub fn validate_field(field: BookingField, value: &str) -> Option<&'static str> {
    let (rule, message) = rule_for(field);
    if rule.accepts(value) {
        None
    } else {
        Some(message)
    }
}

/// Applies every rule. The result has one entry per failing field and nothing else.
pub fn validate(record: &BookingRecord) -> ValidationErrorSet {
    BookingField::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, record.get(field)).map(|message| (field, message.to_string()))
        })
        .collect()
}
