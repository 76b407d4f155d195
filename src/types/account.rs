//! Account and transaction types for the bank ledger engine
//!
//! This module defines the fixed-shape records that make up the ledger data
//! model. An [`Account`] owns its append-only transaction history; every
//! balance mutation goes through [`Account::apply`] so the balance and the
//! log can never drift apart.

use crate::types::LedgerError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The direction-tagged kind of a ledger transaction
///
/// The directional sign of a transaction is implied by its type: deposits
/// and incoming transfers credit the account, withdrawals and outgoing
/// transfers debit it. The amount field on [`Transaction`] is always a
/// positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Credit funds to an account (includes the seed deposit at opening)
    Deposit,

    /// Debit funds from an account (requires sufficient balance)
    Withdrawal,

    /// Debit leg of a two-account transfer
    TransferOut,

    /// Credit leg of a two-account transfer
    TransferIn,
}

impl TransactionType {
    /// Apply this type's direction to a positive magnitude
    ///
    /// Returns `+amount` for credits (Deposit, TransferIn) and `-amount`
    /// for debits (Withdrawal, TransferOut). The account balance is, at all
    /// times, the sum of these signed deltas over its history.
    pub fn signed_delta(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Deposit | TransactionType::TransferIn => amount,
            TransactionType::Withdrawal | TransactionType::TransferOut => -amount,
        }
    }

    /// The wire/display label (DEPOSIT, WITHDRAWAL, TRANSFER_OUT, TRANSFER_IN)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::TransferOut => "TRANSFER_OUT",
            TransactionType::TransferIn => "TRANSFER_IN",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single, immutable entry in an account's transaction history
///
/// Created once, atomically with its balance effect, and never altered
/// afterward. `balance_after` is a denormalized snapshot of the owning
/// account's balance immediately after this transaction applied; it is
/// re-derivable from the history prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The kind of transaction (determines the sign of the balance effect)
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Positive magnitude, at most 2 fractional digits
    pub amount: Decimal,

    /// Creation-time instant (ISO-8601 on the wire)
    pub timestamp: DateTime<Utc>,

    /// The owning account's balance immediately after this transaction
    pub balance_after: Decimal,

    /// Free-text annotation (e.g. the counterparty id for transfers)
    pub description: String,
}

impl Transaction {
    /// The signed balance effect of this transaction
    pub fn signed_amount(&self) -> Decimal {
        self.tx_type.signed_delta(self.amount)
    }
}

/// A single ledger account with its full transaction history
///
/// Created only by the open operation, mutated only through
/// [`Account::apply`] (transactions are appended, never edited or removed),
/// and removed only by an explicit deletion gated on a zero balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique, immutable identifier (`ACC-` + 4 digits), assigned at creation
    pub id: String,

    /// Non-empty holder name, letters and whitespace only,
    /// case-insensitively unique at creation time
    pub holder_name: String,

    /// Current balance; invariant: equals the sum of signed transaction
    /// deltas and the `balance_after` of the most recent transaction
    pub balance: Decimal,

    /// Immutable creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ordered, append-only history; insertion order is chronological order
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Open a new account with a seed deposit
    ///
    /// The account starts with `balance = initial_deposit` and exactly one
    /// DEPOSIT transaction whose `balance_after` equals the initial amount.
    ///
    /// # Arguments
    ///
    /// * `id` - Freshly minted identifier, absent from the store
    /// * `holder_name` - Already-validated holder name
    /// * `initial_deposit` - Already-validated non-negative amount
    /// * `created_at` - Creation instant, shared with the seed transaction
    pub fn open(
        id: String,
        holder_name: String,
        initial_deposit: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        // The seed deposit starts from a zero balance, so it cannot
        // overflow; the account is built directly rather than through the
        // fallible apply path.
        Account {
            id,
            holder_name,
            balance: initial_deposit,
            created_at,
            transactions: vec![Transaction {
                tx_type: TransactionType::Deposit,
                amount: initial_deposit,
                timestamp: created_at,
                balance_after: initial_deposit,
                description: "Initial deposit".to_string(),
            }],
        }
    }

    /// Apply a balance mutation and append the matching transaction record
    ///
    /// This is the only way account state changes after creation: the
    /// balance update and the history append happen together, so the
    /// balance invariant holds after every call. The caller has already
    /// validated the amount (positive magnitude, ceiling checks).
    ///
    /// Uses checked arithmetic: an addition that would overflow the
    /// decimal type rejects the mutation before the balance or the history
    /// is touched.
    ///
    /// # Returns
    ///
    /// The balance after the mutation.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::ArithmeticOverflow`] - the new balance would not
    ///   fit the decimal type; the account is left unmutated
    pub fn apply(
        &mut self,
        tx_type: TransactionType,
        amount: Decimal,
        timestamp: DateTime<Utc>,
        description: &str,
    ) -> Result<Decimal, LedgerError> {
        let new_balance = self
            .balance
            .checked_add(tx_type.signed_delta(amount))
            .ok_or_else(|| LedgerError::arithmetic_overflow(tx_type.as_str(), &self.id))?;

        self.balance = new_balance;
        self.transactions.push(Transaction {
            tx_type,
            amount,
            timestamp,
            balance_after: self.balance,
            description: description.to_string(),
        });
        Ok(self.balance)
    }

    /// Sum of signed transaction deltas over the full history
    ///
    /// Used by tests and integrity checks; always `Some(balance)` for an
    /// account mutated only through [`Account::apply`]. `None` means the
    /// replay itself overflowed, which only a corrupted history can cause.
    pub fn replayed_balance(&self) -> Option<Decimal> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |sum, tx| sum.checked_add(tx.signed_amount()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::deposit(TransactionType::Deposit, dec!(10.50), dec!(10.50))]
    #[case::transfer_in(TransactionType::TransferIn, dec!(3), dec!(3))]
    #[case::withdrawal(TransactionType::Withdrawal, dec!(10.50), dec!(-10.50))]
    #[case::transfer_out(TransactionType::TransferOut, dec!(3), dec!(-3))]
    fn test_signed_delta(
        #[case] tx_type: TransactionType,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(tx_type.signed_delta(amount), expected);
    }

    #[test]
    fn test_open_seeds_single_deposit() {
        let account = Account::open(
            "ACC-1234".to_string(),
            "Tatsuya".to_string(),
            dec!(100.25),
            Utc::now(),
        );

        assert_eq!(account.balance, dec!(100.25));
        assert_eq!(account.transactions.len(), 1);

        let seed = &account.transactions[0];
        assert_eq!(seed.tx_type, TransactionType::Deposit);
        assert_eq!(seed.amount, dec!(100.25));
        assert_eq!(seed.balance_after, dec!(100.25));
        assert_eq!(seed.description, "Initial deposit");
        assert_eq!(seed.timestamp, account.created_at);
    }

    #[test]
    fn test_apply_keeps_balance_and_history_in_step() {
        let mut account = Account::open(
            "ACC-1234".to_string(),
            "Alice".to_string(),
            dec!(50),
            Utc::now(),
        );

        let after_deposit = account
            .apply(TransactionType::Deposit, dec!(25.75), Utc::now(), "Deposit")
            .unwrap();
        assert_eq!(after_deposit, dec!(75.75));

        let after_withdrawal = account
            .apply(
                TransactionType::Withdrawal,
                dec!(0.75),
                Utc::now(),
                "Withdrawal",
            )
            .unwrap();
        assert_eq!(after_withdrawal, dec!(75.00));

        assert_eq!(account.balance, dec!(75.00));
        assert_eq!(account.replayed_balance(), Some(account.balance));
        assert_eq!(
            account.transactions.last().unwrap().balance_after,
            account.balance
        );
    }

    #[test]
    fn test_apply_rejects_overflow_without_mutation() {
        let mut account = Account::open(
            "ACC-1234".to_string(),
            "Alice".to_string(),
            Decimal::MAX,
            Utc::now(),
        );

        let error = account
            .apply(TransactionType::Deposit, dec!(1), Utc::now(), "Deposit")
            .unwrap_err();
        assert_eq!(
            error,
            LedgerError::arithmetic_overflow("DEPOSIT", "ACC-1234")
        );

        // Rejected before any mutation: balance and history untouched.
        assert_eq!(account.balance, Decimal::MAX);
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(account.replayed_balance(), Some(account.balance));
    }

    #[test]
    fn test_serialized_shape_matches_document_format() {
        let account = Account::open(
            "ACC-9999".to_string(),
            "Bob".to_string(),
            dec!(10),
            Utc::now(),
        );

        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("holderName").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value["balance"].is_number());

        let tx = &value["transactions"][0];
        assert_eq!(tx["type"], "DEPOSIT");
        assert!(tx.get("balanceAfter").is_some());
        assert!(tx["timestamp"].is_string());
    }
}
