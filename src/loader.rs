//! Reads ledgers from `;`-delimited text.
//!
//! Each non-blank line is `transactionId;accountId;date;amount`. Fields after
//! the fourth are ignored. Any record that fails to decode aborts the load
//! with an error naming its line. Quotes carry no meaning; `;` always splits.

use crate::error::{ReconError, Result};
use crate::transaction::{Side, Transaction, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of leading fields that make up a record.
pub const RECORD_FIELDS: usize = 4;

/// Loads every transaction from `reader`, in input order.
pub fn load_transactions<R: Read>(reader: R, side: Side) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let tx = decode_record(&record, side, line)?;
        debug!("Loaded {} transaction {} at line {}", side, tx.id(), line);
        transactions.push(tx);
    }

    info!("Loaded {} {} transactions", transactions.len(), side);
    Ok(transactions)
}

/// Opens `path` and loads it as one side of the reconciliation.
pub fn load_file<P: AsRef<Path>>(path: P, side: Side) -> Result<Vec<Transaction>> {
    let file = File::open(path.as_ref())?;
    debug!("Reading {} ledger from {}", side, path.as_ref().display());
    load_transactions(BufReader::new(file), side)
}

fn decode_record(record: &StringRecord, side: Side, line: usize) -> Result<Transaction> {
    if record.len() < RECORD_FIELDS {
        return Err(ReconError::InvalidRecord {
            side,
            line,
            message: format!(
                "expected at least {} fields, found {}",
                RECORD_FIELDS,
                record.len()
            ),
        });
    }

    let leading: StringRecord = record.iter().take(RECORD_FIELDS).collect();
    let raw: TransactionRecord =
        leading
            .deserialize(None)
            .map_err(|e| ReconError::InvalidRecord {
                side,
                line,
                message: e.to_string(),
            })?;

    raw.parse(side, line)
}
