//! Ledger Reconciliation CLI
//!
//! Reads two ordered ledgers and prints exact matches, weak matches and
//! breaks for each side.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- left.txt right.txt > report.txt
//! cargo run -- left.txt right.txt --format csv --strict > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use ledger_recon::{load_file, write_report, Config, Reconciler, Result, Side};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1))?;

    let left = load_file(&config.left_path, Side::Left)?;
    let right = load_file(&config.right_path, Side::Right)?;

    let result = Reconciler::new()
        .strict(config.strict)
        .reconcile_checked(&left, &right)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_report(&result, config.format, handle)?;

    Ok(())
}
