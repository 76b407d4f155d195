//! Bank Ledger Engine Library
//! # Overview
//!
//! This library provides a single-user account ledger: open accounts,
//! deposit, withdraw, transfer between accounts, delete, and inspect
//! transaction history, with every state change persisted to a single JSON
//! document.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, LedgerError)
//! - [`cli`] - CLI argument parsing and the interactive menu loop
//! - [`core`] - Business logic components:
//!   - [`core::validate`] - Pure input and business-rule checks
//!   - [`core::store`] - In-memory account collection and id minting
//!   - [`core::engine`] - The money-moving operations and queries
//!   - [`core::traits`] - The persistence-gateway seam
//! - [`io`] - JSON document persistence with the save-in-flight guard
//!
//! # Operations
//!
//! The engine exposes five mutating operations:
//!
//! - **Open**: create an account with a validated name and seed deposit
//! - **Deposit**: credit funds to an account
//! - **Withdraw**: debit funds (requires sufficient balance)
//! - **Transfer**: atomically debit one account and credit another
//! - **Delete**: remove an account, gated on a zero balance
//!
//! # Invariants
//!
//! Every account's balance equals, at all times, the sum of the signed
//! deltas of its append-only transaction history, and the `balance_after`
//! of its most recent transaction. Operations validate everything before
//! mutating anything, so a rejection never leaves partial state behind.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountStore, LedgerEngine, PersistenceGateway, SaveStatus};
pub use io::JsonFileGateway;
pub use types::{Account, LedgerError, Transaction, TransactionType};
