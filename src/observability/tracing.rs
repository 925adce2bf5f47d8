//! Subscriber setup for `tracing` events and `log` records.
//!
//! A single `fmt` subscriber collects both. While the terminal dashboard owns
//! the screen, output goes to the configured log file or is dropped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::core::errors::{DashError, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "USERDASH_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);
static LOG_FILE: OnceLock<File> = OnceLock::new();

pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRoute {
    Stderr,
    File,
    Discard,
}

/// Where a log line goes given the terminal mode.
pub fn route(has_file: bool, tui_active: bool) -> LogRoute {
    match (tui_active, has_file) {
        (false, _) => LogRoute::Stderr,
        (true, true) => LogRoute::File,
        (true, false) => LogRoute::Discard,
    }
}

/// Writer that follows the terminal mode.
pub struct LogWriter;

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = Box<dyn Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        let file = LOG_FILE.get();
        match (route(file.is_some(), is_tui_active()), file) {
            (LogRoute::File, Some(file)) => Box::new(file),
            (LogRoute::Stderr, _) => Box::new(io::stderr()),
            _ => Box::new(io::sink()),
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DashError::file_system("Failed to open log file", path, e))
}

/// Send logs emitted while the dashboard is active to `path`.
///
/// Only the first call takes effect.
pub fn set_log_file(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    if LOG_FILE.set(file).is_err() {
        tracing::debug!(path = %path.display(), "log file already set");
    }
    Ok(())
}

/// Install the global subscriber. `USERDASH_LOG` wins over the verbosity flag.
///
/// Installing twice is a no-op.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriter)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
