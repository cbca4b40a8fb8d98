pub mod billing;
pub mod display;
pub mod invoicing;
pub mod mileage;
pub mod pagination;
pub mod timeclock;

use bigdecimal::{BigDecimal, RoundingMode};

/// Round to two decimal places, half-up. Applied only to final presentation
/// values; intermediate arithmetic keeps full precision.
pub fn round_2dp(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

#[cfg(test)]
mod timeclock_tests;
