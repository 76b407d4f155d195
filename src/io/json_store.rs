//! JSON document persistence
//!
//! The durable form of the ledger is a single JSON document,
//! `{ "accounts": [ ... ] }`, overwritten whole on every save. The gateway
//! degrades rather than fails on load: a missing file becomes an empty
//! ledger (written out immediately), a malformed document becomes an empty
//! ledger with a warning, and an individually malformed account entry
//! inside a well-formed document is skipped with a warning while the rest
//! load.
//!
//! Saves are fire-and-forget: the snapshot is serialized on the caller's
//! thread, then written by a background thread guarded by a single
//! save-in-flight slot. While a write is in flight, a newly requested save
//! is dropped rather than queued; the in-memory ledger is the source of
//! truth and the next mutation will request another save.

use crate::core::traits::{PersistenceGateway, SaveStatus};
use crate::types::{Account, LedgerError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::warn;

/// Borrowed view of the persisted document shape, for serialization
#[derive(Serialize)]
struct LedgerDocument<'a> {
    accounts: &'a [Account],
}

/// File-backed persistence for the account collection
pub struct JsonFileGateway {
    /// Location of the JSON document
    path: PathBuf,

    /// The single save-in-flight slot; true while a writer thread runs
    save_in_flight: Arc<AtomicBool>,
}

impl JsonFileGateway {
    /// Create a gateway persisting to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileGateway {
            path: path.into(),
            save_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The path this gateway reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn serialize(accounts: &[Account]) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(&LedgerDocument { accounts })?)
    }

    /// Decode the accounts array entry by entry, skipping malformed ones
    fn decode_entries(&self, entries: &[Value]) -> Vec<Account> {
        let mut accounts = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<Account>(entry.clone()) {
                Ok(account) => accounts.push(account),
                Err(error) => {
                    warn!(
                        path = %self.path.display(),
                        %error,
                        "skipping malformed account entry in data file"
                    );
                }
            }
        }
        accounts
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self) -> Vec<Account> {
        if !self.path.exists() {
            // First run: write the empty document out immediately.
            if let Err(error) = self.save_blocking(&[]) {
                warn!(path = %self.path.display(), %error, "could not create data file");
            }
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "Warning: Data file corrupted. Starting with empty data."
                );
                return Vec::new();
            }
        };

        let document: Value = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(_) => {
                warn!("Warning: Data file corrupted. Starting with empty data.");
                return Vec::new();
            }
        };

        // No salvage from a document that is not shaped {accounts: [...]}.
        match document.get("accounts").and_then(Value::as_array) {
            Some(entries) => self.decode_entries(entries),
            None => {
                warn!("Warning: Data file corrupted. Starting with empty data.");
                Vec::new()
            }
        }
    }

    fn request_save(&self, accounts: &[Account]) -> SaveStatus {
        // Claim the single save slot; if a write is in flight, drop this
        // request instead of queuing it.
        if self
            .save_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SaveStatus::Dropped;
        }

        // Nothing was handed off if the snapshot does not serialize, so
        // the truthful answer is Dropped.
        let payload = match Self::serialize(accounts) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "Failed to save data.");
                self.save_in_flight.store(false, Ordering::Release);
                return SaveStatus::Dropped;
            }
        };

        let path = self.path.clone();
        let slot = Arc::clone(&self.save_in_flight);
        thread::spawn(move || {
            if let Err(error) = fs::write(&path, payload) {
                warn!(path = %path.display(), %error, "Failed to save data.");
            }
            slot.store(false, Ordering::Release);
        });

        SaveStatus::Scheduled
    }

    fn save_blocking(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        let payload = Self::serialize(accounts)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
