//! Interactive session
//!
//! A `Session` owns the live `AddressBook` for one run of the program. It
//! loads the book from its store when opened, feeds each input line to
//! [`dispatch`], writes the replies, and saves the book when the user types
//! `close`/`exit` or the input ends.
//!
//! ## Lifecycle
//!
//! 1. [`Session::open`] loads the last snapshot
//! 2. [`Session::run`] reads lines until an exit command or end of input
//! 3. The book is saved, even when reading input failed; a save failure is
//!    returned, never swallowed
//!
//! Reading a line is the only place the loop waits. The book is touched only
//! between reads.

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::SplitStream;

use crate::book::AddressBook;
use crate::commands::{CommandContext, Outcome, dispatch, messages};
use crate::error::{Error, Result};
use crate::record::DEFAULT_BIRTHDAY_HORIZON_DAYS;
use crate::traits::BookStore;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `close` or `exit` was typed
    ExitCommand,
    /// Input reached end of file
    EndOfInput,
}

/// One run of the interactive loop
pub struct Session {
    store: Box<dyn BookStore>,
    book: AddressBook,
    horizon_days: u32,
}

impl Session {
    /// Load the book from `store` and start a session around it
    pub async fn open(store: Box<dyn BookStore>) -> Result<Self> {
        let book = store.load().await?;
        tracing::info!(
            "Loaded {} contact(s) from {}",
            book.len(),
            store.describe()
        );
        Ok(Self {
            store,
            book,
            horizon_days: DEFAULT_BIRTHDAY_HORIZON_DAYS,
        })
    }

    /// Set the look-ahead window for the `birthdays` command
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run the loop until an exit command or end of input, then save
    ///
    /// `today` is asked for the current date before every command so a
    /// session left open past midnight still answers `birthdays` correctly.
    ///
    /// A line that is not valid UTF-8 is answered like an unknown command.
    /// If reading or writing fails, the book is still saved before the I/O
    /// error is returned. A failed save is returned as [`Error::SaveFailed`].
    pub async fn run<R, W, C>(&mut self, input: R, output: &mut W, today: C) -> Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        C: Fn() -> NaiveDate,
    {
        let outcome = self.drive(input, output, &today).await;
        match &outcome {
            Ok(end) => tracing::debug!("Session ended: {:?}", end),
            Err(e) => tracing::warn!("Session interrupted: {}. Saving before exit.", e),
        }

        self.save()
            .await
            .map_err(|e| Error::SaveFailed(Box::new(e)))?;

        let end = outcome?;
        write_line(output, messages::FAREWELL).await?;
        Ok(end)
    }

    async fn drive<R, W, C>(&mut self, input: R, output: &mut W, today: &C) -> Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        C: Fn() -> NaiveDate,
    {
        write_line(output, messages::WELCOME).await?;

        let mut lines = SplitStream::new(input.split(b'\n'));
        loop {
            output.write_all(messages::PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(raw) = lines.next().await else {
                // Keep the farewell off the prompt line
                output.write_all(b"\n").await?;
                return Ok(SessionEnd::EndOfInput);
            };

            let line = match decode_line(raw?) {
                Some(line) => line,
                None => {
                    tracing::warn!("Ignoring input line that is not valid UTF-8");
                    write_line(output, messages::INVALID_COMMAND).await?;
                    continue;
                }
            };

            let ctx = CommandContext::new(today()).with_horizon_days(self.horizon_days);
            match dispatch(&line, &mut self.book, &ctx) {
                Outcome::Reply(text) => write_line(output, &text).await?,
                Outcome::Silent => {}
                Outcome::Exit => return Ok(SessionEnd::ExitCommand),
            }
        }
    }

    /// Persist the current book
    pub async fn save(&self) -> Result<()> {
        self.store.save(&self.book).await?;
        tracing::info!(
            "Saved {} contact(s) to {}",
            self.book.len(),
            self.store.describe()
        );
        Ok(())
    }
}

/// Strip a trailing `\r` and decode, `None` if the bytes are not UTF-8
fn decode_line(mut raw: Vec<u8>) -> Option<String> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8(raw).ok()
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
