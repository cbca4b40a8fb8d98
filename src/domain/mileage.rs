use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::round_2dp;
use crate::error::AppError;

/// HMRC approved mileage allowance: 45p per mile for the first 10,000 miles
/// of a tax year, 25p per mile above that.
pub const HIGH_RATE_THRESHOLD_MILES: u32 = 10_000;

pub fn high_rate() -> BigDecimal {
    "0.45".parse().unwrap()
}

pub fn low_rate() -> BigDecimal {
    "0.25".parse().unwrap()
}

fn threshold() -> BigDecimal {
    BigDecimal::from(HIGH_RATE_THRESHOLD_MILES)
}

/// The UK tax year containing `date`: April 6 of year Y through April 5 of
/// year Y+1. A date before April 6 belongs to the year that started the
/// previous April.
pub fn tax_year_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let april_6 = NaiveDate::from_ymd_opt(date.year(), 4, 6).unwrap();
    let start_year = if date < april_6 {
        date.year() - 1
    } else {
        date.year()
    };
    bounds_for_start_year(start_year)
}

/// Bounds of the tax year that starts April 6 of `start_year`.
pub fn bounds_for_start_year(start_year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(start_year, 4, 6).unwrap(),
        NaiveDate::from_ymd_opt(start_year + 1, 4, 5).unwrap(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct MileageClaim {
    /// The rate of the band the journey started in, not a blended rate.
    pub rate_per_mile: BigDecimal,
    /// Weighted claim, rounded to 2 dp at the end only.
    pub total_claim: BigDecimal,
}

/// Compute the reimbursement for one journey given the miles already recorded
/// for the same user in the same tax year. The journey is banded against that
/// prior total: miles up to the 10,000 threshold earn 45p, the rest 25p.
pub fn compute_claim(
    miles: &BigDecimal,
    prior_miles_in_tax_year: &BigDecimal,
) -> Result<MileageClaim, AppError> {
    if miles <= &BigDecimal::from(0) {
        return Err(AppError::Validation(
            "miles must be greater than zero".to_string(),
        ));
    }

    let zero = BigDecimal::from(0);
    let mut remaining_at_high_rate = threshold() - prior_miles_in_tax_year;
    if remaining_at_high_rate < zero {
        remaining_at_high_rate = zero.clone();
    }

    let claim = if miles <= &remaining_at_high_rate {
        MileageClaim {
            rate_per_mile: high_rate(),
            total_claim: round_2dp(&(miles * high_rate())),
        }
    } else if remaining_at_high_rate > zero {
        let above = miles - &remaining_at_high_rate;
        let weighted = &remaining_at_high_rate * high_rate() + above * low_rate();
        MileageClaim {
            rate_per_mile: high_rate(),
            total_claim: round_2dp(&weighted),
        }
    } else {
        MileageClaim {
            rate_per_mile: low_rate(),
            total_claim: round_2dp(&(miles * low_rate())),
        }
    };

    Ok(claim)
}

/// Split a tax-year total into its 45p and 25p portions.
pub fn banded_split(total_miles: &BigDecimal) -> (BigDecimal, BigDecimal) {
    let zero = BigDecimal::from(0);
    if total_miles <= &threshold() {
        (total_miles.clone(), zero)
    } else {
        (threshold(), total_miles - threshold())
    }
}

/// Aggregated view of one user's mileage inside one tax year.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxYearSummary {
    pub total_miles: BigDecimal,
    pub total_claim: BigDecimal,
    pub miles_at_45p: BigDecimal,
    pub miles_at_25p: BigDecimal,
    pub journey_count: usize,
    pub tax_year_start: NaiveDate,
    pub tax_year_end: NaiveDate,
}
