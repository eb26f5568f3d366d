//! Logging setup for the `keyobject` executable.

use log::{LevelFilter, Log};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use systemd_journal_logger::{JournalLog, connected_to_journal};

/// Logging setup error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Logger initialization error.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Installs a logger that emits records up to `max_level`.
///
/// Records go to the systemd journal if the process is connected to it and to stderr otherwise.
///
/// # Errors
///
/// Returns an error if a logger has been installed already.
pub fn setup_logging(max_level: impl Into<LevelFilter>) -> Result<(), Error> {
    let max_level = max_level.into();

    if connected_to_journal()
        && let Ok(log) = JournalLog::new().map(|log| {
            Box::new(log.with_extra_fields(vec![("VERSION", env!("CARGO_PKG_VERSION"))]))
                as Box<dyn Log>
        })
    {
        log::set_boxed_logger(log)?;
        log::set_max_level(max_level);
        return Ok(());
    }

    // stdout is reserved for exported keys
    TermLogger::init(
        max_level,
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
