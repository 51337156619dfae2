use std::path::PathBuf;
use thiserror::Error;

/// Failures reported to the user before any output is produced.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed invocation; usage is printed after the message.
    #[error("Error: {0}")]
    Usage(String),
    /// `-h` / `--help`; usage is printed and the run fails.
    #[error("help requested")]
    HelpRequested,
    #[error("Error: Directory does not exist: {}", .0.display())]
    Path(PathBuf),
}

impl CliError {
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Usage(_) | CliError::HelpRequested)
    }
}
