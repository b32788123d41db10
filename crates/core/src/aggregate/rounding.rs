//! Rounding of computed figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in every computed column.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
