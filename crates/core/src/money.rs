//! Monetary amounts.
//!
//! Amounts are exact decimals in a single (implicit) currency.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

/// A monetary amount in the restaurant's currency.
pub type Money = Decimal;

/// Reject negative amounts; `what` names the field in the error.
pub fn ensure_non_negative(amount: Money, what: &str) -> DomainResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::validation(format!(
            "{what} must not be negative (got {amount})"
        )));
    }
    Ok(())
}

/// Round to whole cents, half away from zero.
pub fn round_cents(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly two decimals (`21.4` -> `"21.40"`).
pub fn format_amount(amount: Money) -> String {
    format!("{:.2}", round_cents(amount))
}
