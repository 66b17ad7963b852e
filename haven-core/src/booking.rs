use std::collections::BTreeMap;
use std::fmt;
use haven_shared::Masked;
use serde::{Deserialize, Deserializer, Serialize};

/// Fields of the booking form, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    StreetAddress,
    City,
    State,
    ZipCode,
    Country,
}

impl BookingField {
    pub const ALL: [BookingField; 12] = [
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::PhoneNumber,
        BookingField::CardNumber,
        BookingField::ExpirationDate,
        BookingField::Cvv,
        BookingField::StreetAddress,
        BookingField::City,
        BookingField::State,
        BookingField::ZipCode,
        BookingField::Country,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::CardNumber => "cardNumber",
            BookingField::ExpirationDate => "expirationDate",
            BookingField::Cvv => "cvv",
            BookingField::StreetAddress => "streetAddress",
            BookingField::City => "city",
            BookingField::State => "state",
            BookingField::ZipCode => "zipCode",
            BookingField::Country => "country",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact, payment and billing details submitted to reserve a property.
///
/// Absent and `null` fields deserialize to empty strings so they surface as
/// validation errors rather than parse failures. A field holding a non-string
/// value is a malformed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub card_number: Masked<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expiration_date: Masked<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cvv: Masked<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street_address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl BookingRecord {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => self.card_number.as_str(),
            BookingField::ExpirationDate => self.expiration_date.as_str(),
            BookingField::Cvv => self.cvv.as_str(),
            BookingField::StreetAddress => &self.street_address,
            BookingField::City => &self.city,
            BookingField::State => &self.state,
            BookingField::ZipCode => &self.zip_code,
            BookingField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::FirstName => self.first_name = value,
            BookingField::LastName => self.last_name = value,
            BookingField::Email => self.email = value,
            BookingField::PhoneNumber => self.phone_number = value,
            BookingField::CardNumber => self.card_number = Masked(value),
            BookingField::ExpirationDate => self.expiration_date = Masked(value),
            BookingField::Cvv => self.cvv = Masked(value),
            BookingField::StreetAddress => self.street_address = value,
            BookingField::City => self.city = value,
            BookingField::State => self.state = value,
            BookingField::ZipCode => self.zip_code = value,
            BookingField::Country => self.country = value,
        }
    }

    /// Builder-style `set`, handy for assembling records in tests and fixtures.
    pub fn with(mut self, field: BookingField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// Field-level validation messages. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorSet(BTreeMap<BookingField, String>);

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: BookingField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = BookingField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.keys().map(|field| field.as_str()).collect();
        write!(f, "invalid fields [{}]", names.join(", "))
    }
}

impl FromIterator<(BookingField, String)> for ValidationErrorSet {
    fn from_iter<I: IntoIterator<Item = (BookingField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub const CONFIRMATION_MESSAGE: &str = "Booking confirmed successfully!";

/// Returned for an accepted booking. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub message: String,
    pub booking_id: String,
}

impl BookingConfirmation {
    pub fn new(booking_id: String) -> Self {
        Self {
            message: CONFIRMATION_MESSAGE.to_string(),
            booking_id,
        }
    }
}
