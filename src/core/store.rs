//! Account storage
//!
//! This module provides the `AccountStore` struct, the in-memory collection
//! of accounts keyed by identifier. It owns lookup, existence checks,
//! structural mutation, and identifier minting; all business rules live in
//! the engine and validator layers above it.

use crate::types::Account;
use rand::Rng;
use std::collections::HashMap;

/// The in-memory collection of accounts, keyed by id
///
/// The store is explicitly owned state: it is constructed per engine
/// instance (empty, or from a loaded snapshot), never ambient, so tests can
/// build isolated instances.
#[derive(Debug, Default)]
pub struct AccountStore {
    /// Map of account ids to accounts
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    /// Build a store from a loaded snapshot of accounts, keyed by their ids
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        AccountStore {
            accounts: accounts
                .into_iter()
                .map(|account| (account.id.clone(), account))
                .collect(),
        }
    }

    /// Mint a fresh account identifier
    ///
    /// Draws `ACC-` plus a 4-digit number (1000..=9999) until one not
    /// already present in the store is found. The value space is large
    /// relative to expected account counts, so retries are rare, but the
    /// loop is unbounded rather than capped.
    pub fn generate_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id = format!("ACC-{}", rng.gen_range(1000..10000));
            if !self.accounts.contains_key(&id) {
                return id;
            }
        }
    }

    /// Look up an account by exact match on the trimmed id
    pub fn find_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id.trim())
    }

    /// Mutable variant of [`AccountStore::find_by_id`]
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id.trim())
    }

    /// Insert a newly opened account
    pub fn add(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    /// Remove an account entirely, returning it if it existed
    ///
    /// The only operation that deletes an account; callers invoke it only
    /// after the deletion check cleared (or was explicitly confirmed).
    /// Removal takes the transaction history with the account, never one
    /// without the other.
    pub fn remove(&mut self, id: &str) -> Option<Account> {
        self.accounts.remove(id.trim())
    }

    /// The underlying id-to-account map, for validation lookups
    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    /// All accounts sorted by id, for deterministic listings and snapshots
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// An owned, id-sorted snapshot of every account, for persistence
    pub fn snapshot(&self) -> Vec<Account> {
        self.all_accounts().into_iter().cloned().collect()
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
