//! A single contact

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fields::{Birthday, Name, Phone};

/// Default look-ahead window for upcoming birthdays, in days
pub const DEFAULT_BIRTHDAY_HORIZON_DAYS: u32 = 7;

/// One contact: a name, its phones in insertion order, and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone
    ///
    /// Phones accumulate; adding the same digits twice stores them twice.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// All phones joined with `", "`, or `None` when the record has none
    pub fn phones_display(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Whether the stored birthday falls on or before `today + horizon_days`
    ///
    /// The comparison uses the full stored date, year included, and has no
    /// lower bound: a birthday dated in any past year always qualifies.
    pub fn has_upcoming_birthday(&self, today: NaiveDate, horizon_days: u32) -> bool {
        let Some(birthday) = self.birthday else {
            return false;
        };
        let limit = today
            .checked_add_days(Days::new(u64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);
        birthday.date() <= limit
    }
}
