//! One contact: a name, its phone numbers, and an optional birthday.

use crate::error::Result;
use crate::field::{Birthday, Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`Record::add_phone`] on a valid number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAdd {
    Added,
    /// The number was already on the record; nothing was appended.
    Duplicate,
}

/// A single contact. The name is fixed at creation so it can double as the
/// [`AddressBook`](crate::book::AddressBook) key without ever diverging
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number. An equal value already on the
    /// record is reported as [`PhoneAdd::Duplicate`] and not appended.
    pub fn add_phone(&mut self, value: &str) -> Result<PhoneAdd> {
        let phone = Phone::new(value)?;
        if self.phones.contains(&phone) {
            return Ok(PhoneAdd::Duplicate);
        }
        self.phones.push(phone);
        Ok(PhoneAdd::Added)
    }

    /// Remove every phone with this exact value. Absent values are a
    /// silent no-op.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.value() != value);
    }

    /// Rewrite the first phone equal to `old` with `new`. The new value is
    /// validated before any state is touched; an absent `old` is a silent
    /// no-op.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::new(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|p| p.value() == old) {
            *slot = replacement;
        }
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == value)
    }

    /// Parse and set the birthday, replacing any existing one.
    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Alice");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_phone() {
        let record = record_with_phones(&["1234567890"]);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].value(), "1234567890");
    }

    #[test]
    fn test_add_phone_duplicate_is_not_appended() {
        let mut record = record_with_phones(&["1234567890"]);
        let outcome = record.add_phone("1234567890").unwrap();
        assert_eq!(outcome, PhoneAdd::Duplicate);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_invalid_propagates() {
        let mut record = Record::new("Alice");
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with_phones(&["1234567890", "0987654321"]);
        record.remove_phone("1234567890");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].value(), "0987654321");
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = record_with_phones(&["1234567890"]);
        record.remove_phone("1111111111");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_rewrites_first_match() {
        let mut record = record_with_phones(&["1234567890", "0987654321"]);
        record.edit_phone("1234567890", "5555555555").unwrap();
        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, vec!["5555555555", "0987654321"]);
    }

    #[test]
    fn test_edit_phone_validates_before_touching_state() {
        let mut record = record_with_phones(&["1234567890"]);
        assert!(record.edit_phone("1234567890", "bad").is_err());
        assert_eq!(record.phones()[0].value(), "1234567890");
    }

    #[test]
    fn test_edit_phone_absent_old_is_noop() {
        let mut record = record_with_phones(&["1234567890"]);
        record.edit_phone("1111111111", "5555555555").unwrap();
        let values: Vec<&str> = record.phones().iter().map(Phone::value).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1234567890"]);
        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Alice");
        record.add_birthday("15.01.1990").unwrap();
        record.add_birthday("16.02.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "16.02.1991");
    }

    #[test]
    fn test_add_birthday_invalid_leaves_state() {
        let mut record = Record::new("Alice");
        record.add_birthday("15.01.1990").unwrap();
        assert!(record.add_birthday("1990-01-15").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "15.01.1990");
    }

    #[test]
    fn test_display_without_birthday() {
        let record = record_with_phones(&["1234567890", "0987654321"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = record_with_phones(&["1234567890"]);
        record.add_birthday("15.01.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1234567890, birthday: 15.01.1990"
        );
    }

    #[test]
    fn test_wire_shape() {
        let mut record = record_with_phones(&["1234567890"]);
        record.add_birthday("15.01.1990").unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": {"value": "Alice"},
                "phones": [{"value": "1234567890"}],
                "birthday": {"value": "15.01.1990"}
            })
        );
    }

    #[test]
    fn test_wire_shape_no_birthday_is_null() {
        let record = record_with_phones(&["1234567890"]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["birthday"], serde_json::Value::Null);
    }

    #[test]
    fn test_decode_tolerates_missing_birthday_key() {
        let record: Record = serde_json::from_value(json!({
            "name": {"value": "Bob"},
            "phones": []
        }))
        .unwrap();
        assert_eq!(record.name(), "Bob");
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = record_with_phones(&["1234567890", "0987654321"]);
        record.add_birthday("29.02.2000").unwrap();
        let text = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
