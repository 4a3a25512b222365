//! Validated field types
//!
//! Each type deserializes through its parser, so a `Name`, `Phone` or
//! `Birthday` loaded from disk always satisfies its format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Textual birthday format, `DD.MM.YYYY`
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_LEN: usize = 10;

/// Contact name, stored verbatim and used as the lookup key
///
/// Names from commands are never empty because the input splitter drops
/// empty tokens. Names loaded from a file go through [`Name::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Accept any non-empty string, unchanged
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number
    ///
    /// Succeeds iff `raw` is exactly ten ASCII digits. The digits are kept
    /// as given.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != PHONE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPhoneFormat);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birthday parsed from `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday
    ///
    /// The shape is checked first (two-digit day and month, four-digit year,
    /// dot separators), then the date itself must exist on the calendar.
    pub fn parse(raw: &str) -> Result<Self> {
        if !has_date_shape(raw) {
            return Err(Error::InvalidDateFormat);
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDateFormat)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Format back to `DD.MM.YYYY`
    pub fn to_formatted(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_formatted()
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

    #[test]
    fn test_phone_accepts_ten_digits() {
        let phone = Phone::parse("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(phone.to_string(), "0501234567");
    }

    #[test]
    fn test_phone_rejects_bad_input() {
        for raw in [
            "",
            "050123456",
            "05012345678",
            "050123456a",
            "+380501234",
            " 501234567",
            "050-123-45",
            "٠١٢٣٤٥٦٧٨٩",
        ] {
            assert!(
                matches!(Phone::parse(raw), Err(Error::InvalidPhoneFormat)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_birthday_round_trips_formatting() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "07.10.1987"] {
            let birthday = Birthday::parse(raw).unwrap();
            assert_eq!(birthday.to_formatted(), raw);
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_input() {
        for raw in [
            "",
            "1.1.2000",
            "2000-01-01",
            "32.01.2000",
            "29.02.2023",
            "00.01.2000",
            "01.13.2000",
            "01/01/2000",
            "01.01.2000 ",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(Birthday::parse(raw), Err(Error::InvalidDateFormat)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_name_must_not_be_empty() {
        assert!(matches!(Name::parse(""), Err(Error::EmptyName)));
        assert_eq!(Name::parse(" Ivan ").unwrap().as_str(), " Ivan ");

        let name: Name = serde_json::from_str("\"Ivan\"").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Ivan\"");
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
    }

    #[test]
    fn test_fields_deserialize_through_validators() {
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert!(serde_json::from_str::<Phone>("\"12345\"").is_err());

        let birthday: Birthday = serde_json::from_str("\"01.01.2000\"").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.01.2000\"");
        assert!(serde_json::from_str::<Birthday>("\"30.02.2000\"").is_err());
    }
}
