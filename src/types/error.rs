//! Error types for the bank ledger engine
//!
//! This module defines every rejection the engine can produce. Display
//! strings are operator-facing and surfaced verbatim by the CLI, so they are
//! part of the observable behavior and pinned by tests.
//!
//! # Error Categories
//!
//! - **Input-format errors**: empty input, wrong character set, wrong shape.
//!   Recoverable; the operation aborts with no mutation.
//! - **Business-rule violations**: duplicate name, insufficient balance,
//!   account not found. Same treatment.
//! - **Confirmation-required**: deletion of an account with a positive
//!   balance. A soft category — "operation declined", not "operation
//!   invalid" — distinguished via [`LedgerError::is_confirmation_required`].
//! - **Persistence errors**: reported, but never undo an in-memory mutation
//!   and never crash the process.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// Every variant is local, recoverable, and reported; none are fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Holder name is empty or whitespace-only
    #[error("Account holder name cannot be empty.")]
    EmptyHolderName,

    /// Holder name contains a character outside Latin letters and whitespace
    #[error("Account holder name must contain only alphabetic characters.")]
    InvalidHolderName,

    /// Another account already uses this holder name (case-insensitive)
    #[error("An account with this name already exists.")]
    DuplicateHolderName,

    /// Amount input is empty or whitespace-only
    #[error("Amount cannot be empty.")]
    EmptyAmount,

    /// Amount input contains full-width digit characters
    #[error("Full-width numbers are not allowed. Please use half-width numbers.")]
    FullWidthDigits,

    /// Amount input contains comma separators
    #[error("Comma-separated numbers are not allowed.")]
    CommaSeparated,

    /// Amount input does not match `-?digits[.digits]`
    #[error("Invalid amount format. Please enter a valid number.")]
    InvalidAmountFormat,

    /// Amount matched the accepted grammar but did not parse to a value
    ///
    /// The parse gate is distinct from the format gate: a well-formed
    /// string can still exceed the decimal type's capacity.
    #[error("Invalid amount. Please enter a valid number.")]
    InvalidAmount,

    /// Amount is negative and the operation does not allow negatives
    #[error("Amount cannot be negative.")]
    NegativeAmount,

    /// Amount carries more than two fractional digits
    #[error("Amount cannot have more than 2 decimal places.")]
    TooManyDecimalPlaces,

    /// Amount exceeds the current balance of the debited account
    #[error("Insufficient balance for this transaction.")]
    InsufficientBalance,

    /// No account matches the given id
    #[error("Account not found.")]
    AccountNotFound,

    /// Transfer source account does not exist
    ///
    /// Kept distinct from [`LedgerError::AccountNotFound`] so the caller can
    /// tell which role of a transfer failed to resolve.
    #[error("Source account not found.")]
    SourceAccountNotFound,

    /// Transfer destination account does not exist
    ///
    /// Always raised before any mutation of the source account.
    #[error("Destination account not found. Transfer rejected.")]
    DestinationAccountNotFound,

    /// Deletion of an account with a positive balance needs confirmation
    ///
    /// A soft rejection: the deletion is declined, not invalid. The safe
    /// default is "do not delete".
    #[error(
        "Warning: This account has a balance of ${balance:.2}. \
         Are you sure you want to delete it?"
    )]
    DeletionRequiresConfirmation {
        /// The remaining balance blocking the deletion
        balance: Decimal,
    },

    /// Balance arithmetic would overflow the decimal type
    ///
    /// Recoverable: the operation is rejected before any mutation, so the
    /// account keeps its previous balance and history.
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow (DEPOSIT, TRANSFER_IN, ...)
        operation: String,
        /// Account whose balance would overflow
        id: String,
    },

    /// I/O error while reading or writing the persisted document
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying I/O failure
        message: String,
    },

    /// The persisted document could not be serialized or deserialized
    #[error("Data file error: {message}")]
    Serialization {
        /// Description of the underlying serde failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a DeletionRequiresConfirmation error
    pub fn deletion_requires_confirmation(balance: Decimal) -> Self {
        LedgerError::DeletionRequiresConfirmation { balance }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether this is the soft confirmation-required category
    ///
    /// Callers treat it as "operation declined" rather than "operation
    /// invalid" (a warning, not an error).
    pub fn is_confirmation_required(&self) -> bool {
        matches!(self, LedgerError::DeletionRequiresConfirmation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::empty_name(LedgerError::EmptyHolderName, "Account holder name cannot be empty.")]
    #[case::invalid_name(
        LedgerError::InvalidHolderName,
        "Account holder name must contain only alphabetic characters."
    )]
    #[case::duplicate_name(
        LedgerError::DuplicateHolderName,
        "An account with this name already exists."
    )]
    #[case::empty_amount(LedgerError::EmptyAmount, "Amount cannot be empty.")]
    #[case::full_width(
        LedgerError::FullWidthDigits,
        "Full-width numbers are not allowed. Please use half-width numbers."
    )]
    #[case::comma(LedgerError::CommaSeparated, "Comma-separated numbers are not allowed.")]
    #[case::format(
        LedgerError::InvalidAmountFormat,
        "Invalid amount format. Please enter a valid number."
    )]
    #[case::parse(
        LedgerError::InvalidAmount,
        "Invalid amount. Please enter a valid number."
    )]
    #[case::negative(LedgerError::NegativeAmount, "Amount cannot be negative.")]
    #[case::decimal_places(
        LedgerError::TooManyDecimalPlaces,
        "Amount cannot have more than 2 decimal places."
    )]
    #[case::insufficient(
        LedgerError::InsufficientBalance,
        "Insufficient balance for this transaction."
    )]
    #[case::not_found(LedgerError::AccountNotFound, "Account not found.")]
    #[case::source_not_found(LedgerError::SourceAccountNotFound, "Source account not found.")]
    #[case::destination_not_found(
        LedgerError::DestinationAccountNotFound,
        "Destination account not found. Transfer rejected."
    )]
    #[case::overflow(
        LedgerError::arithmetic_overflow("DEPOSIT", "ACC-1234"),
        "Arithmetic overflow in DEPOSIT for account ACC-1234"
    )]
    #[case::confirmation(
        LedgerError::DeletionRequiresConfirmation { balance: dec!(5000) },
        "Warning: This account has a balance of $5000.00. Are you sure you want to delete it?"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_confirmation_required_is_a_distinct_category() {
        assert!(LedgerError::deletion_requires_confirmation(dec!(1)).is_confirmation_required());
        assert!(!LedgerError::InsufficientBalance.is_confirmation_required());
        assert!(!LedgerError::AccountNotFound.is_confirmation_required());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
