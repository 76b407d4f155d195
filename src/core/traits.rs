//! Core traits for the persistence boundary
//!
//! This module defines the seam between the ledger engine and durable
//! storage, so interchangeable implementations (the JSON file gateway, an
//! in-memory recorder in tests) can back the same engine.

use crate::types::{Account, LedgerError};

/// Outcome of a fire-and-forget save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The snapshot was handed off for writing
    Scheduled,

    /// The request was dropped; nothing was handed off for writing
    ///
    /// Either a save was already in flight (a new request is dropped, not
    /// queued) or the snapshot could not be prepared (reported by the
    /// gateway). Last-writer-wins is acceptable: the in-memory state stays
    /// the source of truth and the next successful operation requests
    /// another save.
    Dropped,
}

/// Durable storage for the account collection
///
/// The engine calls [`PersistenceGateway::request_save`] after every
/// successful mutation and does not inspect the gateway's internals. No
/// operation blocks on a save completing; save failures are reported by the
/// gateway (logged) and never roll back an in-memory mutation.
pub trait PersistenceGateway {
    /// Load the persisted account collection
    ///
    /// Never fails: a missing document yields an empty ledger (written out
    /// immediately), and a malformed document degrades to an empty ledger
    /// with a warning. Individually malformed account entries inside an
    /// otherwise well-formed document are skipped, with a warning, and the
    /// rest load.
    fn load(&self) -> Vec<Account>;

    /// Request an asynchronous save of the given snapshot
    ///
    /// Must not block on the write completing and must not allow two writes
    /// to the same durable state to overlap: while a save is in flight, a
    /// new request is dropped rather than queued.
    fn request_save(&self, accounts: &[Account]) -> SaveStatus;

    /// Write the snapshot synchronously
    ///
    /// Used for the best-effort final save on exit.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization or I/O error; callers report it
    /// and terminate anyway.
    fn save_blocking(&self, accounts: &[Account]) -> Result<(), LedgerError>;
}
