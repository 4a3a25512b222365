//! Shared helpers for address book contract tests

#![allow(dead_code)]

use addressbook_core::commands::CommandContext;
use addressbook_core::{AddressBook, Outcome, dispatch};
use chrono::NaiveDate;

/// Fixed "today" used by birthday scenarios
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 28).expect("valid date")
}

pub fn context() -> CommandContext {
    CommandContext::new(today())
}

/// Dispatch one line and return the reply text
///
/// Panics if the line does not produce a reply.
pub fn reply(book: &mut AddressBook, line: &str) -> String {
    match dispatch(line, book, &context()) {
        Outcome::Reply(text) => text,
        other => panic!("expected a reply to {line:?}, got {other:?}"),
    }
}

/// Dispatch several lines in order and collect the replies
pub fn replies(book: &mut AddressBook, lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| reply(book, line)).collect()
}
