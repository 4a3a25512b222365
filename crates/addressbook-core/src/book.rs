//! The address book: an ordered collection of records
//!
//! Lookups are linear and resolve to the first record with a matching name.
//! Duplicate names are accepted on insert; callers that need "update if
//! present" semantics rely on first-match-wins.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the book
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// First record whose name equals `name` exactly
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Mutable variant of [`AddressBook::find`], same matching policy
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Names of every record with an upcoming birthday, in book order
    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: u32) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.has_upcoming_birthday(today, horizon_days))
            .map(|r| r.name().to_string())
            .collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
