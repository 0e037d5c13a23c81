//! Money calculation utilities using rust_decimal for precision
//!
//! All running totals are accumulated as `Decimal` and converted to `f64`
//! only at the storage/serialization boundary. Rounding to two decimals
//! happens once, at that boundary, never inside a running sum.

use rust_decimal::prelude::*;
use shared::{AppError, AppResult, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed unit price (€1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed guest count per line
pub const MAX_COUNT: u32 = 999;
/// Maximum allowed quantity per product or extra-time line
pub const MAX_QUANTITY: u32 = 999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("{} must be a finite number, got {}", field, value),
        ));
    }
    Ok(())
}

/// Validate a unit price coming from catalog data or operator input
pub fn validate_price(value: f64, field: &str) -> AppResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("{} must be non-negative, got {}", field, value),
        ));
    }
    if value > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("{} exceeds maximum allowed ({}), got {}", field, MAX_PRICE, value),
        ));
    }
    Ok(())
}

/// Validate a guest count (zero is a valid draft state)
pub fn validate_count(count: u32, field: &str) -> AppResult<()> {
    if count > MAX_COUNT {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("{} exceeds maximum allowed ({}), got {}", field, MAX_COUNT, count),
        ));
    }
    Ok(())
}

/// Validate a product or extra-time quantity (zero is a valid draft state)
pub fn validate_qty(qty: u32, field: &str) -> AppResult<()> {
    if qty > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("{} exceeds maximum allowed ({}), got {}", field, MAX_QUANTITY, qty),
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `validate_price()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption.
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
        // SAFETY: Decimal rounded to 2dp with max input ≤ 1_000_000 (validated at boundary)
        // is always within f64 representable range (~1.8e308)
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
