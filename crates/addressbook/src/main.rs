// # addressbook - interactive contact manager
//
// This binary is a thin integration layer. All contact logic lives in
// addressbook-core; this file only:
// 1. Builds the configuration
// 2. Initializes logging (to stderr, so stdout carries only the conversation)
// 3. Opens the book store and loads the book
// 4. Runs the session on stdin/stdout and saves on exit
//
// The program takes no flags. The book is kept in `addressbook.json` in the
// working directory.

use addressbook_core::{AppConfig, Error, Session, open_store};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum AppExitCode {
    /// `close`/`exit` or end of input, book saved
    CleanShutdown = 0,
    /// Configuration, logging, or loading the book failed
    StartupError = 1,
    /// Reading input, writing output, or saving the book failed
    RuntimeError = 2,
}

impl From<AppExitCode> for ExitCode {
    fn from(code: AppExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Failures are split by phase so they map to distinct exit codes
enum RunError {
    Startup(anyhow::Error),
    /// Terminal I/O failed; the book was saved before stopping
    Io(anyhow::Error),
    Save(anyhow::Error),
}

impl RunError {
    fn from_session(err: Error) -> Self {
        match err {
            Error::SaveFailed(_) => RunError::Save(err.into()),
            other => RunError::Io(anyhow::Error::new(other).context("address book session")),
        }
    }
}

fn main() -> ExitCode {
    let config = AppConfig::default();

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return AppExitCode::StartupError.into();
    }

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return AppExitCode::StartupError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return AppExitCode::StartupError.into();
        }
    };

    match rt.block_on(run(config)) {
        Ok(()) => AppExitCode::CleanShutdown.into(),
        Err(RunError::Startup(e)) => {
            error!("Startup failed: {:#}", e);
            eprintln!("Не вдалося відкрити адресну книгу: {:#}", e);
            AppExitCode::StartupError.into()
        }
        Err(RunError::Io(e)) => {
            error!("Session failed: {:#}", e);
            eprintln!("Помилка введення/виведення, адресну книгу збережено: {:#}", e);
            AppExitCode::RuntimeError.into()
        }
        Err(RunError::Save(e)) => {
            error!("Saving failed: {:#}", e);
            eprintln!("Не вдалося зберегти адресну книгу: {:#}", e);
            AppExitCode::RuntimeError.into()
        }
    }
}

/// Open the book and run one interactive session
async fn run(config: AppConfig) -> std::result::Result<(), RunError> {
    let mut session = open_session(&config).await.map_err(RunError::Startup)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let end = session
        .run(stdin, &mut stdout, || chrono::Local::now().date_naive())
        .await
        .map_err(RunError::from_session)?;

    info!("Session finished: {:?}", end);
    Ok(())
}

async fn open_session(config: &AppConfig) -> Result<Session> {
    let store = open_store(&config.store)
        .await
        .context("opening book store")?;
    let session = Session::open(store)
        .await
        .context("loading address book")?;
    Ok(session.with_horizon_days(config.birthday_horizon_days))
}
