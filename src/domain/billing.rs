use bigdecimal::BigDecimal;
use chrono::{Days, Months, NaiveDate};

use crate::database::models::BillingCycle;
use crate::error::AppError;

/// Normalize a subscription amount to its monthly-equivalent cost:
/// daily × 30, weekly × 4.33, monthly unchanged, quarterly ÷ 3, yearly ÷ 12.
pub fn monthly_cost(amount: &BigDecimal, cycle: BillingCycle) -> BigDecimal {
    match cycle {
        BillingCycle::Daily => amount * BigDecimal::from(30),
        BillingCycle::Weekly => amount * "4.33".parse::<BigDecimal>().unwrap(),
        BillingCycle::Monthly => amount.clone(),
        BillingCycle::Quarterly => amount / BigDecimal::from(3),
        BillingCycle::Yearly => amount / BigDecimal::from(12),
    }
}

/// String-boundary variant: an unrecognized cycle label falls back to the raw
/// amount unchanged. This is a documented fallback, never an error.
pub fn monthly_cost_lenient(amount: &BigDecimal, cycle_label: &str) -> BigDecimal {
    match cycle_label.parse::<BillingCycle>() {
        Ok(cycle) => monthly_cost(amount, cycle),
        Err(_) => amount.clone(),
    }
}

/// A finite sequence of billing dates starting at `start_date`, each advanced
/// by one cycle unit. Month-based cycles clamp to the end of shorter months
/// (Jan 31 + 1 month = Feb 29 in a leap year) and roll over year boundaries.
pub fn upcoming_dates(
    start_date: NaiveDate,
    cycle: BillingCycle,
    count: usize,
) -> UpcomingDates {
    UpcomingDates {
        start: start_date,
        cycle,
        index: 0,
        count,
    }
}

/// Parse-then-generate variant for raw form input. An unparseable start date
/// is a `Format` error; generation itself never fails because `BillingCycle`
/// is a closed enum, so unknown labels are rejected here as `UnsupportedCycle`.
pub fn upcoming_dates_for_label(
    start_date: &str,
    cycle_label: &str,
    count: usize,
) -> Result<UpcomingDates, AppError> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| AppError::Format(format!("invalid start date: {}", start_date)))?;
    let cycle = cycle_label
        .parse::<BillingCycle>()
        .map_err(|_| AppError::UnsupportedCycle(cycle_label.to_string()))?;
    Ok(upcoming_dates(start, cycle, count))
}

pub struct UpcomingDates {
    start: NaiveDate,
    cycle: BillingCycle,
    index: usize,
    count: usize,
}

impl Iterator for UpcomingDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.index >= self.count {
            return None;
        }
        // Offsets are always taken from the original start date so a month-end
        // clamp in one step (Jan 31 -> Feb 29) does not shorten every later
        // date in the sequence.
        let date = offset(self.start, self.cycle, self.index as u32)?;
        self.index += 1;
        Some(date)
    }
}

fn offset(start: NaiveDate, cycle: BillingCycle, periods: u32) -> Option<NaiveDate> {
    match cycle {
        BillingCycle::Daily => start.checked_add_days(Days::new(periods as u64)),
        BillingCycle::Weekly => start.checked_add_days(Days::new(7 * periods as u64)),
        BillingCycle::Monthly => start.checked_add_months(Months::new(periods)),
        BillingCycle::Quarterly => start.checked_add_months(Months::new(3 * periods)),
        BillingCycle::Yearly => start.checked_add_months(Months::new(12 * periods)),
    }
}

/// One cycle forward. `None` only at the edge of chrono's date range.
pub fn advance(date: NaiveDate, cycle: BillingCycle) -> Option<NaiveDate> {
    match cycle {
        BillingCycle::Daily => date.checked_add_days(Days::new(1)),
        BillingCycle::Weekly => date.checked_add_days(Days::new(7)),
        BillingCycle::Monthly => date.checked_add_months(Months::new(1)),
        BillingCycle::Quarterly => date.checked_add_months(Months::new(3)),
        BillingCycle::Yearly => date.checked_add_months(Months::new(12)),
    }
}
