use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use crate::field::Phone;
use crate::record::{PhoneAdd, Record};

/// One `name: phones` line, as `find` and `all` render a contact.
fn summary(record: &Record) -> String {
    let phones = record
        .phones()
        .iter()
        .map(Phone::value)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", record.name(), phones)
}

/// `add [name] [phone]`: create the contact or add another number.
pub fn add(args: &[String], book: &mut AddressBook) -> Result<String> {
    if args.len() != 2 {
        return Err(RoloError::usage("Invalid command. Format: add [name] [phone]"));
    }
    let (name, phone) = (&args[0], &args[1]);

    match book.get_mut(name) {
        Some(record) => match record.add_phone(phone)? {
            PhoneAdd::Added => Ok("Phone number added to existing contact.".to_string()),
            PhoneAdd::Duplicate => Ok("Phone number already exists for this contact.".to_string()),
        },
        None => {
            let mut record = Record::new(name.as_str());
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("New contact added.".to_string())
        }
    }
}

/// `change [name] [new_phone]`: replace the contact's first number.
pub fn change(args: &[String], book: &mut AddressBook) -> Result<String> {
    if args.len() != 2 {
        return Err(RoloError::usage(
            "Invalid command. Format: change [name] [new_phone]",
        ));
    }
    let (name, new_phone) = (&args[0], &args[1]);

    let Some(record) = book.get_mut(name) else {
        return Ok(format!("Contact '{}' not found.", name));
    };
    match record.phones().first().map(|p| p.value().to_string()) {
        Some(old) => record.edit_phone(&old, new_phone)?,
        None => {
            record.add_phone(new_phone)?;
        }
    }
    Ok("Contact updated.".to_string())
}

/// `find [name or phone]`: all-digit queries search by phone.
pub fn find(args: &[String], book: &AddressBook) -> Result<String> {
    if args.len() != 1 {
        return Err(RoloError::usage(
            "Invalid command. Format: find [name or phone]",
        ));
    }
    let query = &args[0];

    let matches = if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
        let found = book.find_by_phone(query);
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    } else {
        book.find(query)
    };

    match matches {
        None => Ok(format!("Contact '{}' not found.", query)),
        Some(records) => Ok(records
            .iter()
            .map(|r| summary(r))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// `all`: every contact, one line each, in name order.
pub fn show_all(book: &AddressBook) -> Result<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    Ok(book
        .records()
        .map(summary)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete [name]`.
pub fn delete(args: &[String], book: &mut AddressBook) -> Result<String> {
    if args.len() != 1 {
        return Err(RoloError::usage("Invalid command. Format: delete [name]"));
    }
    let name = &args[0];

    if book.delete(name) {
        Ok("Contact deleted.".to_string())
    } else {
        Ok(format!("Contact '{}' not found.", name))
    }
}
