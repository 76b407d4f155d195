//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `validate` - Pure input and business-rule checks
//! - `store` - In-memory account collection and id minting
//! - `engine` - The five money-moving operations and read-only queries
//! - `traits` - The persistence-gateway seam to the io layer

pub mod engine;
pub mod store;
pub mod traits;
pub mod validate;

pub use engine::LedgerEngine;
pub use store::AccountStore;
pub use traits::{PersistenceGateway, SaveStatus};
pub use validate::{AmountRule, DeletionCheck};
