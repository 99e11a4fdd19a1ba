//! Money calculation utilities using rust_decimal for precision
//!
//! All line totals and the order total are computed with `Decimal`
//! internally, then converted to `f64` for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Prices come from the product table and are validated non-negative at
/// seed time. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO instead of corrupting the total.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round a decimal amount to 2 decimal places (half-up)
#[inline]
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit price × quantity
#[inline]
pub fn line_total(price: f64, qty: i32) -> Decimal {
    to_decimal(price) * Decimal::from(qty)
}
