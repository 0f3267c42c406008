//! Error type shared by the library.
//!
//! Two families matter to callers: configuration errors block a whole batch
//! before any file is touched, everything else is reported per file.

use std::path::PathBuf;

/// Library-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or incomplete configuration (missing folders, empty style list, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A keyword (color, marker, legend position, font) that is not in its palette.
    #[error("unknown {kind} '{value}'")]
    UnknownKeyword { kind: &'static str, value: String },

    /// The configured worksheet does not exist in the workbook.
    #[error("worksheet '{sheet}' not found in {}", file.display())]
    SheetNotFound { file: PathBuf, sheet: String },

    /// The workbook could not be opened or parsed.
    #[error("failed to read {}: {reason}", file.display())]
    Workbook { file: PathBuf, reason: String },

    /// A paired column holds something that is not a number.
    #[error("column '{column}' row {row}: expected a number, found '{value}'")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// Malformed curve input (length mismatch, NaN, infinities).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// None of the candidate font files for a family could be found or loaded.
    #[error("no usable font found for '{family}'")]
    FontUnavailable { family: String },

    /// Plotters reported a drawing or encoding failure.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// `true` for errors that must abort a batch before it starts.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::UnknownKeyword { .. } | Error::FontUnavailable { .. }
        )
    }
}
