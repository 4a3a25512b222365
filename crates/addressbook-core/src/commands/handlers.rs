//! Command handlers
//!
//! Each handler takes the arguments after the command word and the book,
//! and returns the reply text or a user-facing error.

use crate::book::AddressBook;
use crate::error::{Error, Result};
use crate::record::Record;

use super::CommandContext;

/// Reply texts shown to the user
pub mod messages {
    pub const WELCOME: &str = "Ласкаво просимо до бота-асистента!";
    pub const PROMPT: &str = "Введіть команду: ";
    pub const FAREWELL: &str = "До побачення!";
    pub const GREETING: &str = "Як я можу вам допомогти?";
    pub const INVALID_COMMAND: &str = "Невірна команда.";

    pub const CONTACT_ADDED: &str = "Контакт додано.";
    pub const PHONE_UPDATED: &str = "Телефонний номер оновлено.";
    pub const NO_PHONE_FOR_CONTACT: &str = "Номер телефону не вказаний для цього контакту.";
    pub const NO_PHONE_PLACEHOLDER: &str = "Номер телефону не вказаний";
    pub const BOOK_EMPTY: &str = "Адресна книга порожня.";
    pub const BIRTHDAY_ADDED: &str = "День народження додано.";
    pub const BIRTHDAYS_HEADER: &str = "Користувачі, яких потрібно привітати на наступному тижні:";
    pub const NO_BIRTHDAYS: &str = "На наступному тижні немає днів народження.";

    pub(crate) const USAGE_ADD: &str =
        "введіть ім'я та номер телефону для додавання контакту.";
    pub(crate) const USAGE_CHANGE: &str =
        "введіть ім'я та новий номер телефону для зміни контакту.";
    pub(crate) const USAGE_PHONE: &str = "введіть ім'я контакту.";
    pub(crate) const USAGE_ADD_BIRTHDAY: &str =
        "введіть ім'я та дату народження у форматі ДД.ММ.РРРР.";
    pub(crate) const USAGE_SHOW_BIRTHDAY: &str = "введіть ім'я контакту.";
}

fn name_and_value<'a>(args: &[&'a str], usage: &'static str) -> Result<(&'a str, &'a str)> {
    match args {
        &[name, value, ..] => Ok((name, value)),
        _ => Err(Error::MissingArguments(usage)),
    }
}

fn name_only<'a>(args: &[&'a str], usage: &'static str) -> Result<&'a str> {
    args.first().copied().ok_or(Error::MissingArguments(usage))
}

/// `add <name> <phone>`: append to an existing contact or create a new one
pub(crate) fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<String> {
    let (name, phone) = name_and_value(args, messages::USAGE_ADD)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(messages::PHONE_UPDATED.to_string());
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);
    tracing::debug!("Added contact {}", name);
    Ok(messages::CONTACT_ADDED.to_string())
}

/// `change <name> <phone>`: append a phone to an existing contact
pub(crate) fn change_contact(args: &[&str], book: &mut AddressBook) -> Result<String> {
    let (name, phone) = name_and_value(args, messages::USAGE_CHANGE)?;
    let record = book.find_mut(name).ok_or(Error::ContactNotFound)?;
    record.add_phone(phone)?;
    Ok(messages::PHONE_UPDATED.to_string())
}

/// `phone <name>`
pub(crate) fn show_phone(args: &[&str], book: &AddressBook) -> Result<String> {
    let name = name_only(args, messages::USAGE_PHONE)?;
    let record = book.find(name).ok_or(Error::ContactNotFound)?;
    Ok(record
        .phones_display()
        .unwrap_or_else(|| messages::NO_PHONE_FOR_CONTACT.to_string()))
}

/// `all`
pub(crate) fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return messages::BOOK_EMPTY.to_string();
    }

    book.iter()
        .map(|record| {
            let phones = record
                .phones_display()
                .unwrap_or_else(|| messages::NO_PHONE_PLACEHOLDER.to_string());
            format!("{}: {}", record.name(), phones)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub(crate) fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<String> {
    let (name, date) = name_and_value(args, messages::USAGE_ADD_BIRTHDAY)?;
    let record = book.find_mut(name).ok_or(Error::ContactNotFound)?;
    record.add_birthday(date)?;
    Ok(messages::BIRTHDAY_ADDED.to_string())
}

/// `show-birthday <name>`
pub(crate) fn show_birthday(args: &[&str], book: &AddressBook) -> Result<String> {
    let name = name_only(args, messages::USAGE_SHOW_BIRTHDAY)?;
    let record = book.find(name).ok_or(Error::ContactNotFound)?;
    Ok(match record.birthday() {
        Some(birthday) => format!("День народження {}: {}", name, birthday),
        None => format!("День народження для {} не вказано.", name),
    })
}

/// `birthdays`
pub(crate) fn birthdays(book: &AddressBook, ctx: &CommandContext) -> String {
    let names = book.upcoming_birthdays(ctx.today, ctx.horizon_days);
    if names.is_empty() {
        return messages::NO_BIRTHDAYS.to_string();
    }
    format!("{}\n{}", messages::BIRTHDAYS_HEADER, names.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_ivan() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&["Ivan", "0501234567"], &mut book).unwrap();
        book
    }

    #[test]
    fn test_add_requires_two_arguments() {
        let mut book = AddressBook::new();
        let err = add_contact(&["Ivan"], &mut book).unwrap_err();
        assert!(matches!(err, Error::MissingArguments(_)));
        assert_eq!(
            err.to_string(),
            "Неправильний формат команди. Будь ласка, введіть ім'я та номер телефону для додавання контакту."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_with_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&["Ivan", "123"], &mut book).unwrap_err();
        assert!(matches!(err, Error::InvalidPhoneFormat));
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = book_with_ivan();
        let before = book.clone();
        let err = change_contact(&["Olena", "0501234567"], &mut book).unwrap_err();
        assert!(matches!(err, Error::ContactNotFound));
        assert_eq!(book, before);
    }

    #[test]
    fn test_change_appends_phone() {
        let mut book = book_with_ivan();
        let reply = change_contact(&["Ivan", "0507654321"], &mut book).unwrap();
        assert_eq!(reply, messages::PHONE_UPDATED);
        assert_eq!(
            show_phone(&["Ivan"], &book).unwrap(),
            "0501234567, 0507654321"
        );
    }

    #[test]
    fn test_show_phone_without_phones() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Olena"));
        assert_eq!(
            show_phone(&["Olena"], &book).unwrap(),
            messages::NO_PHONE_FOR_CONTACT
        );
        assert!(matches!(
            show_phone(&[], &book),
            Err(Error::MissingArguments(_))
        ));
    }

    #[test]
    fn test_show_all_lists_in_order_with_placeholder() {
        assert_eq!(show_all(&AddressBook::new()), messages::BOOK_EMPTY);

        let mut book = book_with_ivan();
        book.add_record(Record::new("Olena"));
        assert_eq!(
            show_all(&book),
            "Ivan: 0501234567\nOlena: Номер телефону не вказаний"
        );
    }

    #[test]
    fn test_birthday_round_trip_through_handlers() {
        let mut book = book_with_ivan();
        assert_eq!(
            show_birthday(&["Ivan"], &book).unwrap(),
            "День народження для Ivan не вказано."
        );
        assert_eq!(
            add_birthday(&["Ivan", "01.01.2000"], &mut book).unwrap(),
            messages::BIRTHDAY_ADDED
        );
        assert_eq!(
            show_birthday(&["Ivan"], &book).unwrap(),
            "День народження Ivan: 01.01.2000"
        );
        assert!(matches!(
            add_birthday(&["Ivan", "2000-01-01"], &mut book),
            Err(Error::InvalidDateFormat)
        ));
        assert!(matches!(
            add_birthday(&["Olena", "01.01.2000"], &mut book),
            Err(Error::ContactNotFound)
        ));
    }
}
