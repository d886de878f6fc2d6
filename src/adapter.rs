//! Adapter layer: converts between the engine's f64 rates and Decimal ledger totals.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::types::Coins;

/// Convert f64 to Decimal. NaN becomes zero; values beyond the Decimal range
/// (infinities included) saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or_else(|| {
        if v.is_nan() {
            Decimal::ZERO
        } else if v > 0.0 {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Convert an integral Decimal to i64, saturating at the i64 range.
pub fn decimal_to_i64(d: Decimal) -> i64 {
    d.to_i64().unwrap_or(if d.is_sign_negative() { i64::MIN } else { i64::MAX })
}

pub fn coins(v: f64) -> Coins {
    Coins::from_decimal(to_decimal(v))
}
