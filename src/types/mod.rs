//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account, Transaction and the transaction type tag
//! - `error`: Error types for the ledger engine

pub mod account;
pub mod error;

pub use account::{Account, Transaction, TransactionType};
pub use error::LedgerError;
