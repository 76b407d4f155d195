//! Input and business-rule validation
//!
//! Pure checks that gate every money-moving operation. Each function takes a
//! proposed input and returns either an accepted, typed value or a
//! [`LedgerError`] carrying the exact reason text the operator sees; none
//! have side effects.
//!
//! The amount pipeline in [`validate_amount`] applies its gates in a fixed
//! order (empty, full-width digits, commas, format, parse, sign, fractional
//! digits, balance ceiling). The full-width gate sits before the format gate
//! even though the format gate would also reject such strings: the two
//! rejections carry different reason texts, and the reason text is
//! observable behavior.

use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Options for [`validate_amount`]
///
/// The default rule (no negatives, no ceiling) matches deposits and account
/// opening; debiting operations add a ceiling with [`AmountRule::with_ceiling`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountRule {
    /// Accept negative amounts (disabled for every current operation)
    pub allow_negative: bool,

    /// Reject amounts exceeding this balance, when supplied
    pub current_balance: Option<Decimal>,
}

impl AmountRule {
    /// Rule for debiting operations: amounts above `balance` are rejected
    pub fn with_ceiling(balance: Decimal) -> Self {
        AmountRule {
            allow_negative: false,
            current_balance: Some(balance),
        }
    }
}

/// Outcome of the account-deletion precondition check
///
/// Deletion of an account holding a positive balance is never a hard
/// rejection, only a confirmation requirement; the safe default is
/// "do not delete".
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionCheck {
    /// Zero (or negative) balance: deletion may proceed
    Clear,

    /// Positive balance: deletion needs an explicit confirmation
    RequiresConfirmation {
        /// The balance still held by the account
        balance: Decimal,
    },
}

/// Validate an account holder name
///
/// Fails on empty or whitespace-only names, and on any character outside
/// Latin letters and whitespace. The two failures carry distinct reasons.
///
/// # Errors
///
/// * [`LedgerError::EmptyHolderName`] - name is empty or whitespace-only
/// * [`LedgerError::InvalidHolderName`] - name contains a disallowed character
pub fn validate_holder_name(name: &str) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        return Err(LedgerError::EmptyHolderName);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(LedgerError::InvalidHolderName);
    }

    Ok(())
}

/// Reject a holder name already used by an existing account
///
/// The comparison is case-insensitive. Uniqueness is only enforced at
/// creation time; it is never re-checked afterward.
///
/// # Errors
///
/// * [`LedgerError::DuplicateHolderName`] - some account already holds this name
pub fn validate_duplicate_name(
    name: &str,
    accounts: &HashMap<String, Account>,
) -> Result<(), LedgerError> {
    let is_duplicate = accounts
        .values()
        .any(|account| account.holder_name.eq_ignore_ascii_case(name));

    if is_duplicate {
        return Err(LedgerError::DuplicateHolderName);
    }

    Ok(())
}

/// Validate a raw amount string and parse it to a [`Decimal`]
///
/// Applies the layered gates in this exact order:
///
/// 1. empty / whitespace-only input
/// 2. full-width digit characters (U+FF10..=U+FF19)
/// 3. comma separators
/// 4. format: optional leading minus, digits, optional single decimal point
///    followed by digits
/// 5. parse to a decimal value (a well-formed string can still exceed the
///    decimal type's capacity; this gate has its own reason)
/// 6. negative values, unless `rule.allow_negative`
/// 7. more than two fractional digits, counted on the original string's
///    decimal suffix, not the parsed value
/// 8. ceiling: amount exceeds `rule.current_balance`, when supplied
///
/// # Returns
///
/// The parsed amount on success.
///
/// # Errors
///
/// One distinct [`LedgerError`] variant per gate; callers surface the
/// reason verbatim.
pub fn validate_amount(raw: &str, rule: AmountRule) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(LedgerError::EmptyAmount);
    }

    if trimmed.chars().any(|c| ('\u{FF10}'..='\u{FF19}').contains(&c)) {
        return Err(LedgerError::FullWidthDigits);
    }

    if trimmed.contains(',') {
        return Err(LedgerError::CommaSeparated);
    }

    if !matches_amount_format(trimmed) {
        return Err(LedgerError::InvalidAmountFormat);
    }

    // The parse gate is distinct from the format gate: a string matching
    // the grammar can still exceed the decimal type's capacity.
    let amount = Decimal::from_str(trimmed).map_err(|_| LedgerError::InvalidAmount)?;

    if !rule.allow_negative && amount < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount);
    }

    // Count fractional digits on the input string, not the parsed value:
    // "1.10" has two, even though it parses equal to "1.1".
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > 2 {
            return Err(LedgerError::TooManyDecimalPlaces);
        }
    }

    if let Some(ceiling) = rule.current_balance {
        if amount > ceiling {
            return Err(LedgerError::InsufficientBalance);
        }
    }

    Ok(amount)
}

/// `-?\d+(\.\d+)?` over ASCII digits, without a regex engine
fn matches_amount_format(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match fraction {
        Some(f) => !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()),
        None => true,
    }
}

/// Resolve an account id, in the generic (non-transfer) role
///
/// Lookup is by exact match on the trimmed input.
///
/// # Errors
///
/// * [`LedgerError::AccountNotFound`] - no account matches the id
pub fn validate_account_exists<'a>(
    id: &str,
    accounts: &'a HashMap<String, Account>,
) -> Result<&'a Account, LedgerError> {
    accounts.get(id.trim()).ok_or(LedgerError::AccountNotFound)
}

/// Resolve an account id in the transfer-destination role
///
/// Identical lookup to [`validate_account_exists`], but the rejection names
/// the destination role so a failed transfer is distinguishable from a
/// failed source lookup.
///
/// # Errors
///
/// * [`LedgerError::DestinationAccountNotFound`] - no account matches the id
pub fn validate_transfer_destination<'a>(
    id: &str,
    accounts: &'a HashMap<String, Account>,
) -> Result<&'a Account, LedgerError> {
    accounts
        .get(id.trim())
        .ok_or(LedgerError::DestinationAccountNotFound)
}

/// Defensive integrity sweep over a set of accounts
///
/// Excludes accounts whose holder name is empty or whitespace-only (the
/// invalid state a corrupted persisted document can still smuggle past the
/// typed load). Does not repair anything; invalid accounts are only
/// excluded from display and aggregation, never removed from the store.
/// Applying the sweep twice yields the same result as applying it once.
///
/// # Returns
///
/// The surviving accounts plus a flag saying whether anything was excluded.
pub fn filter_invalid_accounts<'a, I>(accounts: I) -> (Vec<&'a Account>, bool)
where
    I: IntoIterator<Item = &'a Account>,
{
    let mut total = 0usize;
    let valid: Vec<&Account> = accounts
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|account| !account.holder_name.trim().is_empty())
        .collect();

    let has_invalid = valid.len() != total;
    (valid, has_invalid)
}

/// Check the zero-balance precondition for account deletion
///
/// A strictly positive balance yields a confirmation requirement, never a
/// hard rejection. Deletion must be refused whenever confirmation is
/// required and none was supplied.
pub fn check_deletion(account: &Account) -> DeletionCheck {
    if account.balance > Decimal::ZERO {
        DeletionCheck::RequiresConfirmation {
            balance: account.balance,
        }
    } else {
        DeletionCheck::Clear
    }
}
