//! Money helpers
//!
//! All arithmetic on prices stays in `Decimal`; `f64` only appears on the
//! wire. Rounding happens once, for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// `price × quantity`
pub fn line_total(price: Decimal, quantity: i32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Sum of monetary amounts
pub fn sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, x| acc + x)
}

/// Round to cents, half away from zero
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as a plain amount with exactly two decimals, e.g. `13.50`
pub fn format(value: Decimal) -> String {
    format!("{:.2}", round(value))
}
