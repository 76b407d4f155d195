//! Bank Ledger CLI
//!
//! Interactive front end over the ledger engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file /path/to/bank-data.json
//! ```
//!
//! The program loads the persisted ledger (creating an empty one on first
//! run), then drives an interactive menu: create, view, list, deposit,
//! withdraw, transfer, history, delete, exit. Exit performs a best-effort
//! final save.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Terminal I/O error

use bank_ledger_engine::cli;
use bank_ledger_engine::core::LedgerEngine;
use bank_ledger_engine::io::JsonFileGateway;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Warnings (corrupted data file, failed saves) go to stderr;
    // configurable via RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let args = cli::parse_args();

    let gateway = JsonFileGateway::new(&args.data_file);
    let mut engine = LedgerEngine::load(gateway);

    if let Err(e) = cli::menu::run(&mut engine) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
