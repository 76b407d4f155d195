//! The ledger engine
//!
//! This module provides the `LedgerEngine`, the state-transition core that
//! composes the validator and the account store into the five money-moving
//! operations (open, deposit, withdraw, transfer, delete) plus read-only
//! queries.
//!
//! Every operation is a single logical transaction over the in-memory
//! store: all applicable validations run first (fail-fast, no partial
//! mutation on any rejection), then all balance and transaction-log
//! mutations apply together, then the persistence gateway is asked to save.
//! Save trouble is logged, never propagated, and never rolls back the
//! in-memory mutation.

use crate::core::store::AccountStore;
use crate::core::traits::{PersistenceGateway, SaveStatus};
use crate::core::validate::{self, AmountRule, DeletionCheck};
use crate::types::{Account, LedgerError, Transaction, TransactionType};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

/// The account ledger engine
///
/// Owns the account store exclusively (no ambient state; tests construct
/// isolated instances) and a persistence gateway that it notifies after
/// every successful mutation.
pub struct LedgerEngine<G: PersistenceGateway> {
    store: AccountStore,
    gateway: G,
}

impl<G: PersistenceGateway> LedgerEngine<G> {
    /// Create an engine with an empty ledger
    pub fn new(gateway: G) -> Self {
        LedgerEngine {
            store: AccountStore::new(),
            gateway,
        }
    }

    /// Create an engine from whatever the gateway has persisted
    ///
    /// A missing or malformed document degrades to an empty ledger inside
    /// the gateway; this constructor never fails.
    pub fn load(gateway: G) -> Self {
        let accounts = gateway.load();
        LedgerEngine {
            store: AccountStore::from_accounts(accounts),
            gateway,
        }
    }

    /// Open a new account with an initial deposit
    ///
    /// Validates the holder name, its uniqueness, and the raw amount (no
    /// balance ceiling, negatives disallowed), then mints a fresh id and
    /// constructs the account with a single seed DEPOSIT transaction whose
    /// `balance_after` equals the initial amount.
    ///
    /// # Arguments
    ///
    /// * `holder_name` - Proposed holder name, stored as typed
    /// * `raw_amount` - Initial deposit as entered by the operator
    ///
    /// # Returns
    ///
    /// The freshly minted account id.
    ///
    /// # Errors
    ///
    /// Any holder-name, duplicate-name, or amount rejection; the store is
    /// untouched on every error path.
    pub fn open_account(
        &mut self,
        holder_name: &str,
        raw_amount: &str,
    ) -> Result<String, LedgerError> {
        validate::validate_holder_name(holder_name)?;
        validate::validate_duplicate_name(holder_name, self.store.accounts())?;
        let initial_deposit = validate::validate_amount(raw_amount, AmountRule::default())?;

        let id = self.store.generate_id();
        self.store.add(Account::open(
            id.clone(),
            holder_name.to_string(),
            initial_deposit,
            Utc::now(),
        ));

        self.persist();
        Ok(id)
    }

    /// Deposit funds into an account
    ///
    /// # Returns
    ///
    /// The balance after the deposit.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AccountNotFound`] - no account matches `id`
    /// * any amount rejection (negatives disallowed, no ceiling)
    /// * [`LedgerError::ArithmeticOverflow`] - the credited balance would
    ///   overflow; the account is left unmutated
    pub fn deposit(&mut self, id: &str, raw_amount: &str) -> Result<Decimal, LedgerError> {
        let balance_after = {
            let account = self
                .store
                .find_by_id_mut(id)
                .ok_or(LedgerError::AccountNotFound)?;
            let amount = validate::validate_amount(raw_amount, AmountRule::default())?;
            account.apply(TransactionType::Deposit, amount, Utc::now(), "Deposit")?
        };

        self.persist();
        Ok(balance_after)
    }

    /// Withdraw funds from an account
    ///
    /// The amount is validated with the account's current balance as
    /// ceiling, so an overdraft is rejected before any mutation.
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AccountNotFound`] - no account matches `id`
    /// * any amount rejection, including [`LedgerError::InsufficientBalance`]
    pub fn withdraw(&mut self, id: &str, raw_amount: &str) -> Result<Decimal, LedgerError> {
        let balance_after = {
            let account = self
                .store
                .find_by_id_mut(id)
                .ok_or(LedgerError::AccountNotFound)?;
            let amount =
                validate::validate_amount(raw_amount, AmountRule::with_ceiling(account.balance))?;
            account.apply(
                TransactionType::Withdrawal,
                amount,
                Utc::now(),
                "Withdrawal",
            )?
        };

        self.persist();
        Ok(balance_after)
    }

    /// Transfer funds between two accounts, atomically
    ///
    /// Validation order matters and is part of the contract: the source is
    /// resolved first (with a source-specific rejection), then the
    /// destination's existence is checked BEFORE any balance mutation on
    /// the source, then the amount is validated against the source balance.
    /// Only then do both legs apply: TRANSFER_OUT on the source and
    /// TRANSFER_IN on the destination, each referencing the counterparty id
    /// and sharing one timestamp. If the destination validation fails, the
    /// source is left completely unmutated.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::SourceAccountNotFound`] - source id does not resolve
    /// * [`LedgerError::DestinationAccountNotFound`] - destination id does
    ///   not resolve (raised before any debit)
    /// * any amount rejection against the source balance
    /// * [`LedgerError::ArithmeticOverflow`] - the credit would overflow
    ///   the destination balance (raised before any debit)
    pub fn transfer(
        &mut self,
        from_id: &str,
        to_id: &str,
        raw_amount: &str,
    ) -> Result<(), LedgerError> {
        let from_key = from_id.trim().to_string();
        let to_key = to_id.trim().to_string();

        let source = self
            .store
            .find_by_id(&from_key)
            .ok_or(LedgerError::SourceAccountNotFound)?;
        let destination = validate::validate_transfer_destination(&to_key, self.store.accounts())?;
        let amount =
            validate::validate_amount(raw_amount, AmountRule::with_ceiling(source.balance))?;

        // The credit leg is the only one that can overflow (the debit stays
        // within the validated source balance); check it before either
        // account is touched, so a rejection never leaves a lone debit.
        destination.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::arithmetic_overflow(TransactionType::TransferIn.as_str(), &destination.id)
        })?;

        // All validations passed; both legs share one timestamp.
        let timestamp = Utc::now();

        let source = self
            .store
            .find_by_id_mut(&from_key)
            .ok_or(LedgerError::SourceAccountNotFound)?;
        source.apply(
            TransactionType::TransferOut,
            amount,
            timestamp,
            &format!("To {to_key}"),
        )?;

        let destination = self
            .store
            .find_by_id_mut(&to_key)
            .ok_or(LedgerError::DestinationAccountNotFound)?;
        destination.apply(
            TransactionType::TransferIn,
            amount,
            timestamp,
            &format!("From {from_key}"),
        )?;

        self.persist();
        Ok(())
    }

    /// Delete an account, gated on a zero balance
    ///
    /// A strictly positive balance turns the deletion into a
    /// confirmation-required signal; without `confirmed`, the engine
    /// declines and the account (and its full history) is retained.
    /// Removal is all-or-nothing: the account and its transaction history
    /// go together.
    ///
    /// # Arguments
    ///
    /// * `id` - Account to delete
    /// * `confirmed` - Whether the operator explicitly confirmed deleting a
    ///   non-empty account
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AccountNotFound`] - no account matches `id`
    /// * [`LedgerError::DeletionRequiresConfirmation`] - positive balance
    ///   and no confirmation supplied (soft category)
    pub fn delete_account(&mut self, id: &str, confirmed: bool) -> Result<(), LedgerError> {
        let account = self
            .store
            .find_by_id(id)
            .ok_or(LedgerError::AccountNotFound)?;

        if let DeletionCheck::RequiresConfirmation { balance } = validate::check_deletion(account) {
            if !confirmed {
                return Err(LedgerError::deletion_requires_confirmation(balance));
            }
        }

        self.store.remove(id);
        self.persist();
        Ok(())
    }

    /// All accounts that pass the integrity sweep, sorted by id
    ///
    /// # Returns
    ///
    /// The surviving accounts plus a flag saying whether any account was
    /// excluded by the sweep (and should be reported to the operator).
    pub fn list_accounts(&self) -> (Vec<&Account>, bool) {
        validate::filter_invalid_accounts(self.store.all_accounts())
    }

    /// Look up a single account by id
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.store.find_by_id(id)
    }

    /// The transaction history of an account, oldest first
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AccountNotFound`] - no account matches `id`
    pub fn history(&self, id: &str) -> Result<&[Transaction], LedgerError> {
        self.store
            .find_by_id(id)
            .map(|account| account.transactions.as_slice())
            .ok_or(LedgerError::AccountNotFound)
    }

    /// Sum of balances over the integrity-swept account set
    pub fn total_balance(&self) -> Decimal {
        let (accounts, _) = self.list_accounts();
        accounts.iter().map(|account| account.balance).sum()
    }

    /// Number of accounts in the ledger (including swept-out ones)
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the ledger holds no accounts at all
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Synchronously write the current state; the best-effort exit save
    ///
    /// # Errors
    ///
    /// The underlying serialization or I/O error; callers report it and
    /// terminate anyway.
    pub fn save_on_exit(&self) -> Result<(), LedgerError> {
        self.gateway.save_blocking(&self.store.snapshot())
    }

    /// Request a save of the current state after a successful mutation
    ///
    /// Dropped requests (a save already in flight) and gateway failures are
    /// logged; the in-memory mutation stands either way.
    fn persist(&self) {
        match self.gateway.request_save(&self.store.snapshot()) {
            SaveStatus::Scheduled => {}
            SaveStatus::Dropped => debug!("save request dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    /// Gateway that records every snapshot it is handed
    #[derive(Default, Clone)]
    struct MemoryGateway {
        saves: Rc<RefCell<Vec<Vec<Account>>>>,
    }

    impl MemoryGateway {
        fn save_count(&self) -> usize {
            self.saves.borrow().len()
        }

        fn last_snapshot(&self) -> Vec<Account> {
            self.saves.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl PersistenceGateway for MemoryGateway {
        fn load(&self) -> Vec<Account> {
            Vec::new()
        }

        fn request_save(&self, accounts: &[Account]) -> SaveStatus {
            self.saves.borrow_mut().push(accounts.to_vec());
            SaveStatus::Scheduled
        }

        fn save_blocking(&self, accounts: &[Account]) -> Result<(), LedgerError> {
            self.saves.borrow_mut().push(accounts.to_vec());
            Ok(())
        }
    }

    fn engine() -> (LedgerEngine<MemoryGateway>, MemoryGateway) {
        let gateway = MemoryGateway::default();
        (LedgerEngine::new(gateway.clone()), gateway)
    }

    /// The balance invariant: balance equals the replayed sum of signed
    /// deltas and the balance_after of the most recent transaction.
    fn assert_invariant(engine: &LedgerEngine<MemoryGateway>) {
        let (accounts, _) = engine.list_accounts();
        for account in accounts {
            assert_eq!(account.replayed_balance(), Some(account.balance));
            assert_eq!(
                account.transactions.last().map(|tx| tx.balance_after),
                Some(account.balance),
            );
        }
    }

    // Decimal::MAX, as an operator would type it.
    const MAX_AMOUNT: &str = "79228162514264337593543950335";

    #[test]
    fn test_open_account() {
        let (mut engine, gateway) = engine();

        let id = engine.open_account("Tatsuya", "100.25").unwrap();
        assert!(id.starts_with("ACC-"));
        assert_eq!(id.len(), 8);

        let account = engine.account(&id).unwrap();
        assert_eq!(account.holder_name, "Tatsuya");
        assert_eq!(account.balance, dec!(100.25));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(account.transactions[0].tx_type, TransactionType::Deposit);
        assert_eq!(account.transactions[0].balance_after, dec!(100.25));

        assert_eq!(gateway.save_count(), 1);
        assert_invariant(&engine);
    }

    #[rstest]
    #[case::bad_name("Alice2", "100", LedgerError::InvalidHolderName)]
    #[case::empty_name("", "100", LedgerError::EmptyHolderName)]
    #[case::bad_amount("Alice", "10.005", LedgerError::TooManyDecimalPlaces)]
    #[case::negative_amount("Alice", "-10", LedgerError::NegativeAmount)]
    fn test_open_account_rejections_leave_store_empty(
        #[case] name: &str,
        #[case] amount: &str,
        #[case] expected: LedgerError,
    ) {
        let (mut engine, gateway) = engine();

        assert_eq!(engine.open_account(name, amount), Err(expected));
        assert!(engine.is_empty());
        assert_eq!(gateway.save_count(), 0);
    }

    #[test]
    fn test_open_account_rejects_duplicate_name_case_insensitively() {
        let (mut engine, _) = engine();
        engine.open_account("Alice", "100").unwrap();

        assert_eq!(
            engine.open_account("ALICE", "50"),
            Err(LedgerError::DuplicateHolderName)
        );
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_deposit() {
        let (mut engine, gateway) = engine();
        let id = engine.open_account("Alice", "100").unwrap();

        let balance = engine.deposit(&id, "25.50").unwrap();
        assert_eq!(balance, dec!(125.50));

        let account = engine.account(&id).unwrap();
        assert_eq!(account.transactions.len(), 2);
        let deposit = &account.transactions[1];
        assert_eq!(deposit.tx_type, TransactionType::Deposit);
        assert_eq!(deposit.amount, dec!(25.50));
        assert_eq!(deposit.balance_after, dec!(125.50));
        assert_eq!(deposit.description, "Deposit");

        assert_eq!(gateway.save_count(), 2);
        assert_invariant(&engine);
    }

    #[test]
    fn test_deposit_overflow_is_rejected_not_fatal() {
        let (mut engine, gateway) = engine();
        let id = engine.open_account("Alice", MAX_AMOUNT).unwrap();

        let error = engine.deposit(&id, "1").unwrap_err();
        assert_eq!(
            error,
            LedgerError::arithmetic_overflow("DEPOSIT", &id)
        );

        // Rejected with no mutation and no save request.
        let account = engine.account(&id).unwrap();
        assert_eq!(account.balance, Decimal::MAX);
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(gateway.save_count(), 1);
        assert_invariant(&engine);
    }

    #[test]
    fn test_transfer_overflowing_destination_leaves_both_untouched() {
        let (mut engine, gateway) = engine();
        let from = engine.open_account("Alice", "100").unwrap();
        let to = engine.open_account("Bob", MAX_AMOUNT).unwrap();

        let error = engine.transfer(&from, &to, "1").unwrap_err();
        assert_eq!(
            error,
            LedgerError::arithmetic_overflow("TRANSFER_IN", &to)
        );

        // The credit-leg check runs before any debit.
        assert_eq!(engine.account(&from).unwrap().balance, dec!(100));
        assert_eq!(engine.account(&from).unwrap().transactions.len(), 1);
        assert_eq!(engine.account(&to).unwrap().balance, Decimal::MAX);
        assert_eq!(engine.account(&to).unwrap().transactions.len(), 1);
        assert_eq!(gateway.save_count(), 2);
    }

    #[test]
    fn test_deposit_to_unknown_account() {
        let (mut engine, gateway) = engine();

        assert_eq!(
            engine.deposit("ACC-0000", "25"),
            Err(LedgerError::AccountNotFound)
        );
        assert_eq!(gateway.save_count(), 0);
    }

    #[test]
    fn test_withdraw() {
        let (mut engine, _) = engine();
        let id = engine.open_account("Alice", "100").unwrap();

        let balance = engine.withdraw(&id, "40.25").unwrap();
        assert_eq!(balance, dec!(59.75));

        let account = engine.account(&id).unwrap();
        let withdrawal = account.transactions.last().unwrap();
        assert_eq!(withdrawal.tx_type, TransactionType::Withdrawal);
        assert_eq!(withdrawal.description, "Withdrawal");
        assert_invariant(&engine);
    }

    #[test]
    fn test_withdraw_over_balance_leaves_account_untouched() {
        let (mut engine, gateway) = engine();
        let id = engine.open_account("Alice", "2000").unwrap();

        assert_eq!(
            engine.withdraw(&id, "3000"),
            Err(LedgerError::InsufficientBalance)
        );

        let account = engine.account(&id).unwrap();
        assert_eq!(account.balance, dec!(2000));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(gateway.save_count(), 1);
    }

    #[test]
    fn test_withdraw_exact_balance_is_allowed() {
        let (mut engine, _) = engine();
        let id = engine.open_account("Alice", "2000").unwrap();

        assert_eq!(engine.withdraw(&id, "2000"), Ok(dec!(0)));
        assert_invariant(&engine);
    }

    #[test]
    fn test_transfer() {
        let (mut engine, gateway) = engine();
        let from = engine.open_account("Alice", "5000").unwrap();
        let to = engine.open_account("Bob", "1000").unwrap();

        engine.transfer(&from, &to, "500").unwrap();

        let source = engine.account(&from).unwrap();
        let destination = engine.account(&to).unwrap();
        assert_eq!(source.balance, dec!(4500));
        assert_eq!(destination.balance, dec!(1500));

        let out = source.transactions.last().unwrap();
        let incoming = destination.transactions.last().unwrap();
        assert_eq!(out.tx_type, TransactionType::TransferOut);
        assert_eq!(incoming.tx_type, TransactionType::TransferIn);
        assert_eq!(out.description, format!("To {to}"));
        assert_eq!(incoming.description, format!("From {from}"));
        assert_eq!(out.timestamp, incoming.timestamp);

        // Both legs persisted in a single save request.
        assert_eq!(gateway.save_count(), 3);
        assert_invariant(&engine);
    }

    #[test]
    fn test_transfer_to_unknown_destination_never_debits_source() {
        let (mut engine, gateway) = engine();
        let from = engine.open_account("Alice", "5000").unwrap();

        assert_eq!(
            engine.transfer(&from, "ACC-0000", "500"),
            Err(LedgerError::DestinationAccountNotFound)
        );

        let source = engine.account(&from).unwrap();
        assert_eq!(source.balance, dec!(5000));
        assert_eq!(source.transactions.len(), 1);
        assert_eq!(gateway.save_count(), 1);
    }

    #[test]
    fn test_transfer_from_unknown_source() {
        let (mut engine, _) = engine();
        let to = engine.open_account("Bob", "1000").unwrap();

        assert_eq!(
            engine.transfer("ACC-0000", &to, "500"),
            Err(LedgerError::SourceAccountNotFound)
        );
        assert_eq!(engine.account(&to).unwrap().transactions.len(), 1);
    }

    #[test]
    fn test_transfer_over_source_balance_is_rejected() {
        let (mut engine, _) = engine();
        let from = engine.open_account("Alice", "100").unwrap();
        let to = engine.open_account("Bob", "0").unwrap();

        assert_eq!(
            engine.transfer(&from, &to, "100.01"),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(engine.account(&from).unwrap().balance, dec!(100));
        assert_eq!(engine.account(&to).unwrap().balance, dec!(0));
    }

    #[test]
    fn test_transfer_accepts_ids_with_surrounding_whitespace() {
        let (mut engine, _) = engine();
        let from = engine.open_account("Alice", "100").unwrap();
        let to = engine.open_account("Bob", "0").unwrap();

        engine
            .transfer(&format!("  {from}  "), &format!(" {to} "), "25")
            .unwrap();

        assert_eq!(engine.account(&from).unwrap().balance, dec!(75));
        // Descriptions reference the trimmed counterparty ids.
        assert_eq!(
            engine.account(&to).unwrap().transactions.last().unwrap().description,
            format!("From {from}")
        );
    }

    #[test]
    fn test_delete_account_with_zero_balance() {
        let (mut engine, gateway) = engine();
        let id = engine.open_account("Alice", "0").unwrap();

        engine.delete_account(&id, false).unwrap();
        assert!(engine.account(&id).is_none());
        assert_eq!(gateway.save_count(), 2);
    }

    #[test]
    fn test_delete_account_with_balance_requires_confirmation() {
        let (mut engine, gateway) = engine();
        let id = engine.open_account("Alice", "5000").unwrap();

        let error = engine.delete_account(&id, false).unwrap_err();
        assert!(error.is_confirmation_required());
        assert_eq!(
            error,
            LedgerError::DeletionRequiresConfirmation {
                balance: dec!(5000)
            }
        );

        // Declined, not deleted: account and history retained.
        assert!(engine.account(&id).is_some());
        assert_eq!(gateway.save_count(), 1);

        // An explicit confirmation goes through.
        engine.delete_account(&id, true).unwrap();
        assert!(engine.account(&id).is_none());
    }

    #[test]
    fn test_delete_unknown_account() {
        let (mut engine, _) = engine();
        assert_eq!(
            engine.delete_account("ACC-0000", false),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[test]
    fn test_history() {
        let (mut engine, _) = engine();
        let id = engine.open_account("Alice", "100").unwrap();
        engine.deposit(&id, "50").unwrap();
        engine.withdraw(&id, "25").unwrap();

        let history = engine.history(&id).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history
                .iter()
                .map(|tx| tx.tx_type)
                .collect::<Vec<_>>(),
            vec![
                TransactionType::Deposit,
                TransactionType::Deposit,
                TransactionType::Withdrawal
            ]
        );

        assert_eq!(
            engine.history("ACC-0000"),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[test]
    fn test_list_accounts_and_total_balance() {
        let (mut engine, _) = engine();
        engine.open_account("Alice", "100.50").unwrap();
        engine.open_account("Bob", "200").unwrap();

        let (accounts, has_invalid) = engine.list_accounts();
        assert_eq!(accounts.len(), 2);
        assert!(!has_invalid);
        assert_eq!(engine.total_balance(), dec!(300.50));
    }

    #[test]
    fn test_load_sweeps_nothing_but_listing_flags_corrupt_entries() {
        // A corrupted snapshot entry (blank holder name) stays in the store
        // but is excluded from listings and aggregation.
        let corrupt = Account::open("ACC-1111".to_string(), " ".to_string(), dec!(99), Utc::now());
        let good = Account::open("ACC-2222".to_string(), "Alice".to_string(), dec!(1), Utc::now());

        struct SeededGateway(Vec<Account>);
        impl PersistenceGateway for SeededGateway {
            fn load(&self) -> Vec<Account> {
                self.0.clone()
            }
            fn request_save(&self, _: &[Account]) -> SaveStatus {
                SaveStatus::Scheduled
            }
            fn save_blocking(&self, _: &[Account]) -> Result<(), LedgerError> {
                Ok(())
            }
        }

        let engine = LedgerEngine::load(SeededGateway(vec![corrupt, good]));
        assert_eq!(engine.len(), 2);

        let (accounts, has_invalid) = engine.list_accounts();
        assert_eq!(accounts.len(), 1);
        assert!(has_invalid);
        assert_eq!(engine.total_balance(), dec!(1));
    }

    #[test]
    fn test_every_successful_mutation_requests_exactly_one_save() {
        let (mut engine, gateway) = engine();

        let a = engine.open_account("Alice", "100").unwrap();
        let b = engine.open_account("Bob", "0").unwrap();
        engine.deposit(&a, "1").unwrap();
        engine.withdraw(&a, "1").unwrap();
        engine.transfer(&a, &b, "10").unwrap();
        engine.delete_account(&b, true).unwrap();

        assert_eq!(gateway.save_count(), 6);

        // The last snapshot reflects the final in-memory state.
        let snapshot = gateway.last_snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].balance, dec!(90));
    }
}
