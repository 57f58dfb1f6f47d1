//! Fixed-point money helpers
//!
//! Balances are kept at a scale of two fractional digits. Every balance
//! mutation goes through [`round_half_up`]; transfer amounts keep whatever
//! precision the caller supplied.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept on every balance
pub const BALANCE_SCALE: u32 = 2;

/// Zero at balance scale (`0.00`)
pub fn zero() -> Decimal {
    Decimal::new(0, BALANCE_SCALE)
}

/// Round a value to [`BALANCE_SCALE`] digits, ties away from zero
///
/// `0.005` becomes `0.01` and `-0.005` becomes `-0.01`. A result that rounds
/// to zero is returned as a positive `0.00`, so `-0.004` compares and prints
/// as an ordinary zero balance.
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return zero();
    }
    if rounded.scale() < BALANCE_SCALE {
        rounded.rescale(BALANCE_SCALE);
    }
    rounded
}
