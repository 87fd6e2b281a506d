//! Error types for the reconciliation tool.

use crate::transaction::Side;
use thiserror::Error;

/// Result type alias for loader, reporter and CLI operations
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors that can occur while loading ledgers or writing a report.
///
/// The merge itself never fails; every variant here belongs to the
/// collaborators around it.
#[derive(Error, Debug)]
pub enum ReconError {
    /// Failed to open or read an input file, or to write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Low-level CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record that could not be decoded into a transaction
    #[error("Invalid {side} record at line {line}: {message}")]
    InvalidRecord {
        side: Side,
        line: usize,
        message: String,
    },

    /// Input violates the account/date ordering precondition (strict mode only)
    #[error("Unordered {side} input at record {record}: {message}")]
    UnorderedInput {
        side: Side,
        record: usize,
        message: String,
    },

    /// Missing input file arguments
    #[error("Missing input file argument. Usage: ledger-recon <left> <right> [--format text|csv] [--strict]")]
    MissingArgument,

    /// Unrecognized or malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
