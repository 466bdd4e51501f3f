//! Error types for ix-io.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A vehicle record that cannot be used.  `line` is 1-based.
    #[error("line {line}: {reason}: {text:?}")]
    Malformed { line: u64, text: String, reason: String },

    /// The count header disagrees with the number of records.
    #[error("header declares {declared} vehicle(s) but {found} record(s) follow")]
    HeaderMismatch { declared: u64, found: usize },

    /// A schedule file that is not four lines of vehicle ids.
    #[error("schedule line {line}: {reason}")]
    BadSchedule { line: usize, reason: String },
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
