//! Command-line configuration.

use crate::error::{ReconError, Result};
use crate::report::ReportFormat;
use std::path::PathBuf;
use std::str::FromStr;

/// Settings for one run, parsed from the command line.
///
/// ```text
/// ledger-recon <left> <right> [--format text|csv] [--strict]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub left_path: PathBuf,
    pub right_path: PathBuf,
    pub format: ReportFormat,
    /// Fail instead of warning when an input is not sorted.
    pub strict: bool,
}

impl Config {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut format = ReportFormat::default();
        let mut strict = false;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strict" => strict = true,
                "--format" => {
                    let value = args.next().ok_or_else(|| {
                        ReconError::InvalidArgument("--format requires a value".to_string())
                    })?;
                    format = ReportFormat::from_str(&value)?;
                }
                flag if flag.starts_with("--format=") => {
                    format = ReportFormat::from_str(flag.trim_start_matches("--format="))?;
                }
                flag if flag.starts_with("--") => {
                    return Err(ReconError::InvalidArgument(format!(
                        "unknown option '{}'",
                        flag
                    )));
                }
                other => positional.push(other.to_string()),
            }
        }

        if positional.len() < 2 {
            return Err(ReconError::MissingArgument);
        }
        if positional.len() > 2 {
            return Err(ReconError::InvalidArgument(format!(
                "unexpected argument '{}'",
                positional[2]
            )));
        }

        let right_path = PathBuf::from(positional.pop().unwrap_or_default());
        let left_path = PathBuf::from(positional.pop().unwrap_or_default());

        Ok(Config {
            left_path,
            right_path,
            format,
            strict,
        })
    }
}
