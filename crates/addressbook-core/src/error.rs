//! Error types for the address book
//!
//! The first four variants are user-facing: their `Display` text is exactly
//! what the dispatcher prints. The rest are infrastructure failures.

use thiserror::Error;

/// Result type alias for address book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the address book
#[derive(Error, Debug)]
pub enum Error {
    /// Phone is not exactly ten ASCII digits
    #[error("Неправильний формат номера телефону. Введіть 10 цифр.")]
    InvalidPhoneFormat,

    /// Birthday is not a real `DD.MM.YYYY` date
    #[error("Неправильний формат дати. Введіть у форматі ДД.ММ.РРРР")]
    InvalidDateFormat,

    /// Command was given fewer arguments than it needs
    #[error("Неправильний формат команди. Будь ласка, {0}")]
    MissingArguments(&'static str),

    /// No record with the requested name
    #[error("Контакт не знайдено.")]
    ContactNotFound,

    /// Saved contact name is empty
    #[error("Ім'я контакту не може бути порожнім.")]
    EmptyName,

    /// Saving the book at the end of a session failed
    #[error("Failed to save address book: {0}")]
    SaveFailed(#[source] Box<Error>),

    /// Book store errors (read, write, parse)
    #[error("Book store error: {0}")]
    BookStore(String),

    /// Saved file uses a schema this build cannot read
    #[error("Unsupported address book version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a book store error
    pub fn book_store(msg: impl Into<String>) -> Self {
        Self::BookStore(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is one the user caused and can fix by retyping
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidPhoneFormat
                | Self::InvalidDateFormat
                | Self::MissingArguments(_)
                | Self::ContactNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_render_as_ui_text() {
        assert_eq!(Error::ContactNotFound.to_string(), "Контакт не знайдено.");
        assert_eq!(
            Error::MissingArguments("введіть ім'я контакту.").to_string(),
            "Неправильний формат команди. Будь ласка, введіть ім'я контакту."
        );
        assert!(Error::InvalidPhoneFormat.is_user_facing());
        assert!(!Error::book_store("disk full").is_user_facing());

        let save = Error::SaveFailed(Box::new(Error::book_store("disk full")));
        assert_eq!(
            save.to_string(),
            "Failed to save address book: Book store error: disk full"
        );
        assert!(!save.is_user_facing());
    }
}
