use std::io::Write;
use std::path::PathBuf;

use crate::domain::ports::failure_log::FailureLog;

const DEFAULT_LOG_PATH: &str = "~/.local/share/hygrolog/error.log";

/// Append-only failure log: one `<timestamp> - <message>` line per entry.
///
/// Kept separate from the tracing output so it can be tailed on its own.
/// Writing is best-effort: the log is only ever written while already
/// handling a failure, so its own errors degrade to a tracing warning.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    #[must_use]
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        writeln!(file, "{timestamp} - {message}")
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl FailureLog for ErrorLog {
    fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            tracing::warn!("Failed to write error log: {e}");
        }
    }
}
