//! Validated scalar fields: contact name, phone number, birthday.
//!
//! Every field serializes as `{"value": "<text>"}` so the persisted form
//! stays human-readable. [`Birthday`] re-renders its date as `DD.MM.YYYY`
//! on encode and parses it back on decode; a numeric form never reaches
//! disk.

use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format shared by birthday input, storage, and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Wire shape shared by all field types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRepr {
    pub value: String,
}

/// A contact's name. Set once at record creation, never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldRepr", into = "FieldRepr")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Name(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FieldRepr> for Name {
    fn from(repr: FieldRepr) -> Self {
        Name(repr.value)
    }
}

impl From<Name> for FieldRepr {
    fn from(name: Name) -> Self {
        FieldRepr { value: name.0 }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number: exactly 10 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        if Self::is_valid(value) {
            Ok(Phone(value.to_string()))
        } else {
            Err(RoloError::InvalidPhone)
        }
    }

    /// The validation predicate, usable without constructing.
    pub fn is_valid(value: &str) -> bool {
        value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<FieldRepr> for Phone {
    type Error = RoloError;

    fn try_from(repr: FieldRepr) -> Result<Self> {
        Phone::new(&repr.value)
    }
}

impl From<Phone> for FieldRepr {
    fn from(phone: Phone) -> Self {
        FieldRepr { value: phone.0 }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday: a calendar date entered and stored as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Birthday)
            .map_err(|_| RoloError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<FieldRepr> for Birthday {
    type Error = RoloError;

    fn try_from(repr: FieldRepr) -> Result<Self> {
        Birthday::parse(&repr.value)
    }
}

impl From<Birthday> for FieldRepr {
    fn from(birthday: Birthday) -> Self {
        FieldRepr {
            value: birthday.to_string(),
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phone_accepts_ten_digits() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.value(), "1234567890");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err()); // non-ASCII digits
    }

    #[test]
    fn test_phone_error_message() {
        let err = Phone::new("nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number format.");
    }

    #[test]
    fn test_phone_wire_shape() {
        let phone = Phone::new("0123456789").unwrap();
        let value = serde_json::to_value(&phone).unwrap();
        assert_eq!(value, json!({"value": "0123456789"}));
    }

    #[test]
    fn test_phone_decode_revalidates() {
        let ok: std::result::Result<Phone, _> =
            serde_json::from_value(json!({"value": "1234567890"}));
        assert!(ok.is_ok());
        let bad: std::result::Result<Phone, _> = serde_json::from_value(json!({"value": "123"}));
        assert!(bad.is_err());
    }

    #[test]
    fn test_birthday_parses_strict_format() {
        let birthday = Birthday::parse("15.01.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
    }

    #[test]
    fn test_birthday_rejects_bad_input() {
        assert!(Birthday::parse("1990-01-15").is_err());
        assert!(Birthday::parse("15/01/1990").is_err());
        assert!(Birthday::parse("32.01.1990").is_err());
        assert!(Birthday::parse("29.02.2001").is_err()); // not a leap year
        assert!(Birthday::parse("birthday").is_err());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::parse("not a date").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_birthday_round_trips_as_text() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        let value = serde_json::to_value(birthday).unwrap();
        assert_eq!(value, json!({"value": "29.02.2000"}));
        let back: Birthday = serde_json::from_value(value).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_name_wire_shape() {
        let name = Name::new("Alice");
        let value = serde_json::to_value(&name).unwrap();
        assert_eq!(value, json!({"value": "Alice"}));
    }
}
