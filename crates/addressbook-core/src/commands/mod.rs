//! Command dispatcher
//!
//! Maps one line of user input to a handler and returns what to print.
//!
//! ## Input splitting
//!
//! A line is split on whitespace at most twice: the command word, the first
//! argument, and the untouched remainder of the line as the second argument.
//! `add Ivan 050 123 4567` therefore passes `"050 123 4567"` as the phone,
//! which the phone validator rejects.
//!
//! ## Command table
//!
//! The set of commands is closed: [`Command`] lists every recognised word and
//! [`Command::parse`] is the only place strings are matched.

mod handlers;

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::record::DEFAULT_BIRTHDAY_HORIZON_DAYS;

pub use handlers::messages;

/// Every command the dispatcher recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Close,
    Exit,
}

impl Command {
    /// Every variant, for exhaustive tests
    pub const ALL: [Command; 10] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Close,
        Command::Exit,
    ];

    /// Match a command word exactly (case-sensitive)
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "close" => Some(Self::Close),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The word that selects this command
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Close => "close",
            Self::Exit => "exit",
        }
    }
}

/// Result of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading
    Reply(String),
    /// Nothing to print (blank line)
    Silent,
    /// Persist the book, say goodbye and stop
    Exit,
}

/// Per-call inputs that do not live in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Date the `birthdays` query is evaluated against
    pub today: NaiveDate,
    /// Look-ahead window for `birthdays`
    pub horizon_days: u32,
}

impl CommandContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            horizon_days: DEFAULT_BIRTHDAY_HORIZON_DAYS,
        }
    }

    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

/// Split a line into at most three tokens
///
/// Leading whitespace is skipped and runs of whitespace separate the first
/// two tokens. The third token is the rest of the line as typed.
pub fn parse_input(line: &str) -> Vec<&str> {
    let mut parts = Vec::with_capacity(3);
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        if parts.len() == 2 {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(&rest[..idx]);
                rest = rest[idx..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }

    parts
}

/// Handle one line of input against the book
///
/// Errors from validators or lookups are rendered to their message here and
/// returned as an ordinary reply.
pub fn dispatch(line: &str, book: &mut AddressBook, ctx: &CommandContext) -> Outcome {
    let tokens = parse_input(line);
    let Some((word, args)) = tokens.split_first() else {
        return Outcome::Silent;
    };

    let Some(command) = Command::parse(word) else {
        tracing::debug!("Unrecognised command: {}", word);
        return Outcome::Reply(messages::INVALID_COMMAND.to_string());
    };

    tracing::debug!("Dispatching {} with {} argument(s)", command.as_str(), args.len());

    let result = match command {
        Command::Close | Command::Exit => return Outcome::Exit,
        Command::Hello => Ok(messages::GREETING.to_string()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => Ok(handlers::show_all(book)),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => Ok(handlers::birthdays(book, ctx)),
    };

    match result {
        Ok(text) => Outcome::Reply(text),
        Err(e) => {
            if !e.is_user_facing() {
                tracing::warn!("{} failed: {}", command.as_str(), e);
            }
            Outcome::Reply(e.to_string())
        }
    }
}
