use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// `add-birthday [name] [DD.MM.YYYY]`: set (or overwrite) a birthday.
pub fn add(args: &[String], book: &mut AddressBook) -> Result<String> {
    if args.len() != 2 {
        return Err(RoloError::usage(
            "Invalid command. Format: add-birthday [name] [DD.MM.YYYY]",
        ));
    }
    let (name, birthday) = (&args[0], &args[1]);

    let Some(record) = book.get_mut(name) else {
        return Ok(format!("Contact {} not found.", name));
    };
    record.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday [name]`.
pub fn show(args: &[String], book: &AddressBook) -> Result<String> {
    if args.len() != 1 {
        return Err(RoloError::usage(
            "Invalid command. Format: show-birthday [name]",
        ));
    }
    let name = &args[0];

    match book.get(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
            None => Ok(format!("{} has no birthday set.", name)),
        },
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `birthdays [days]`: contacts with birthdays in the next `days` days,
/// defaulting to the configured window.
pub fn upcoming(args: &[String], book: &AddressBook, default_window: u32) -> Result<String> {
    let days = match args {
        [] => default_window,
        [count] => count
            .parse()
            .map_err(|_| RoloError::usage("Invalid command. Format: birthdays [days]"))?,
        _ => {
            return Err(RoloError::usage("Invalid command. Format: birthdays [days]"));
        }
    };

    let upcoming = book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|u| format!("{}'s birthday is on {}.", u.name, u.congratulation_date()))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::{Duration, Local};

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn book_with(name: &str) -> AddressBook {
        let mut book = AddressBook::new();
        let mut record = Record::new(name);
        record.add_phone("1234567890").unwrap();
        book.add_record(record);
        book
    }

    #[test]
    fn test_add_and_show() {
        let mut book = book_with("Alice");
        let reply = add(&args(&["Alice", "15.01.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday added for Alice.");
        let reply = show(&args(&["Alice"]), &book).unwrap();
        assert_eq!(reply, "Alice's birthday is on 15.01.1990.");
    }

    #[test]
    fn test_add_unknown_contact() {
        let mut book = AddressBook::new();
        let reply = add(&args(&["Ghost", "15.01.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Contact Ghost not found.");
    }

    #[test]
    fn test_add_bad_date() {
        let mut book = book_with("Alice");
        let err = add(&args(&["Alice", "1990-01-15"]), &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        assert!(book.get("Alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_show_no_birthday_set() {
        let book = book_with("Alice");
        let reply = show(&args(&["Alice"]), &book).unwrap();
        assert_eq!(reply, "Alice has no birthday set.");
    }

    #[test]
    fn test_show_unknown_contact() {
        let book = AddressBook::new();
        let reply = show(&args(&["Ghost"]), &book).unwrap();
        assert_eq!(reply, "Contact Ghost not found.");
    }

    #[test]
    fn test_upcoming_empty_book() {
        let book = AddressBook::new();
        let reply = upcoming(&[], &book, 7).unwrap();
        assert_eq!(reply, "No upcoming birthdays.");
    }

    #[test]
    fn test_upcoming_lists_tomorrow() {
        let mut book = book_with("Alice");
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        add(
            &args(&["Alice", &tomorrow.format("%d.%m.%Y").to_string()]),
            &mut book,
        )
        .unwrap();

        let reply = upcoming(&[], &book, 7).unwrap();
        let expected = format!(
            "Alice's birthday is on {}.",
            tomorrow.format("%A, %d %B")
        );
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_upcoming_explicit_days() {
        let book = book_with("Alice");
        let reply = upcoming(&args(&["30"]), &book, 7).unwrap();
        assert_eq!(reply, "No upcoming birthdays.");
    }

    #[test]
    fn test_upcoming_bad_count() {
        let book = AddressBook::new();
        let err = upcoming(&args(&["soon"]), &book, 7).unwrap_err();
        assert_eq!(err.to_string(), "Invalid command. Format: birthdays [days]");
    }
}
