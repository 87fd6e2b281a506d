//! # Ledger Reconciliation
//!
//! Reconciles two ledgers of transactions, classifying every record as an
//! exact match, a weak (tolerance-based) match, or a break on its own side.
//!
//! ## Design Principles
//!
//! - **Single pass**: one two-cursor merge over inputs pre-sorted by account, then date
//! - **Fixed-point amounts**: `rust_decimal` instead of binary floating point
//! - **Account partitioning**: transactions from different accounts never match
//! - **Deterministic output**: results keep the order decisions were made in
//!
//! ## Example
//!
//! ```no_run
//! use ledger_recon::{load_transactions, write_report, Reconciler, ReportFormat, Side};
//! use std::io::Cursor;
//!
//! let left = load_transactions(Cursor::new("T1;A1;02-Jan-2023;100.00\n"), Side::Left).unwrap();
//! let right = load_transactions(Cursor::new("T2;A1;03-Jan-2023;100.01\n"), Side::Right).unwrap();
//!
//! let result = Reconciler::new().reconcile(&left, &right);
//! write_report(&result, ReportFormat::Text, std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod comparator;
pub mod config;
pub mod error;
pub mod loader;
pub mod reconciler;
pub mod report;
pub mod result;
pub mod transaction;

pub use amount::Amount;
pub use config::Config;
pub use error::{ReconError, Result};
pub use loader::{load_file, load_transactions};
pub use reconciler::{check_order, Reconciler};
pub use report::{write_report, ReportFormat};
pub use result::{ReconciliationResult, Summary, TransactionPair};
pub use transaction::{parse_date, Side, Transaction, TransactionRecord};
