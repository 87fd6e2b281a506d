//! Transaction models for ledger parsing and matching.

use crate::amount::Amount;
use crate::error::{ReconError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Textual date layout used by both ledgers, e.g. `06-Jan-2023`.
pub const DATE_FORMAT: &str = "%d-%b-%Y";

/// Which ledger a transaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Parses a ledger date in [`DATE_FORMAT`].
///
/// Pure and stateless; safe to call from any thread.
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Raw ledger record as read from a `;`-delimited line.
///
/// All fields are kept as strings so decode failures can be reported
/// with the offending value.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    /// Transaction identifier, only used for reporting
    pub id: String,

    /// Account identifier, the matching partition key
    pub account_id: String,

    /// Posting date in `dd-Mon-yyyy`
    pub date: String,

    /// Signed decimal amount
    pub amount: String,
}

impl TransactionRecord {
    /// Decodes the raw record into a [`Transaction`].
    ///
    /// `line` is the 1-based line number used in the error.
    pub fn parse(&self, side: Side, line: usize) -> Result<Transaction> {
        let invalid = |message: String| ReconError::InvalidRecord {
            side,
            line,
            message,
        };

        let id = self.id.trim();
        if id.is_empty() {
            return Err(invalid("missing transaction id".to_string()));
        }

        let account_id = self.account_id.trim();
        if account_id.is_empty() {
            return Err(invalid("missing account id".to_string()));
        }

        let date = parse_date(&self.date)
            .map_err(|e| invalid(format!("invalid date '{}': {}", self.date.trim(), e)))?;

        let amount = Amount::from_str(&self.amount)
            .map_err(|e| invalid(format!("invalid amount '{}': {}", self.amount.trim(), e)))?;

        Ok(Transaction::new(id, account_id, date, amount))
    }
}

/// One immutable ledger entry.
///
/// `day_of_year` and `weekday` are derived from `date` once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: String,
    account_id: String,
    date: NaiveDate,
    amount: Amount,
    day_of_year: u32,
    weekday: Weekday,
}

impl Transaction {
    /// Creates a transaction and derives its calendar attributes.
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        date: NaiveDate,
        amount: Amount,
    ) -> Self {
        Transaction {
            id: id.into(),
            account_id: account_id.into(),
            date,
            amount,
            day_of_year: date.ordinal(),
            weekday: date.weekday(),
        }
    }

    /// Identifier unique within the originating ledger.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Ordinal day within the date's year, starting at 1.
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}
