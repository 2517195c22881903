//! The address book: contact records keyed by name, plus the
//! upcoming-birthday window query.

use crate::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday adjusted to its next occurrence (this year or next).
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// Render as e.g. `Monday, 15 January` (year omitted).
    pub fn congratulation_date(&self) -> String {
        self.date.format("%A, %d %B").to_string()
    }
}

/// Records keyed by contact name. The key always equals `record.name()`;
/// [`AddressBook::add_record`] is the only way in, so the two cannot
/// diverge. Iteration is name-ordered.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BookRepr", into = "BookRepr")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// Wire shape: `{"records": [...]}`.
#[derive(Serialize, Deserialize)]
struct BookRepr {
    records: Vec<Record>,
}

impl From<BookRepr> for AddressBook {
    fn from(repr: BookRepr) -> Self {
        let mut book = AddressBook::new();
        for record in repr.records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookRepr {
    fn from(book: AddressBook) -> Self {
        BookRepr {
            records: book.records.into_values().collect(),
        }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional upsert: an existing record with the same name is
    /// replaced, not merged.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with this name. Returns whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Every record whose name equals the query or that owns a phone equal
    /// to it. `None` is the not-found sentinel; an empty vector never
    /// escapes.
    pub fn find(&self, query: &str) -> Option<Vec<&Record>> {
        let matches: Vec<&Record> = self
            .records
            .values()
            .filter(|r| r.name() == query || r.find_phone(query).is_some())
            .collect();
        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Phone-only variant of [`find`](AddressBook::find).
    pub fn find_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|r| r.find_phone(phone).is_some())
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `days` days of today,
    /// inclusive on both ends.
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// The window query against an explicit `today`, sorted by the adjusted
    /// date and then by name, so a late-December birthday sorts before an
    /// early-January one at a year boundary. A window reaching past the end
    /// of the calendar saturates there.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let horizon = today
            .checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_occurrence(birthday.date(), today);
                if date >= today && date <= horizon {
                    Some(UpcomingBirthday {
                        name: record.name().to_string(),
                        date,
                    })
                } else {
                    None
                }
            })
            .collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}

/// The birthday moved to this year, or to next year once it has passed.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = in_year(birthday, today.year());
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

fn in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    // Feb 29 lands on Mar 1 in non-leap years.
    birthday
        .with_year(year)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}
