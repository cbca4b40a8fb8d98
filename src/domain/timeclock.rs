use bigdecimal::BigDecimal;
use bigdecimal::{RoundingMode, ToPrimitive};
use chrono::NaiveDateTime;

use super::round_2dp;
use crate::error::AppError;

/// Hours between clock-in and clock-out: total seconds / 3600, 2 dp half-up.
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> BigDecimal {
    let seconds = (end - start).num_seconds();
    round_2dp(&(BigDecimal::from(seconds) / BigDecimal::from(3600)))
}

/// Cost of a session: hours × hourly rate, 2 dp half-up.
pub fn session_cost(hours_worked: &BigDecimal, hourly_rate: &BigDecimal) -> BigDecimal {
    round_2dp(&(hours_worked * hourly_rate))
}

/// Parse the "H.MM" shorthand ("1.10" is 1 hour 10 minutes) into decimal
/// hours. A single digit after the dot means tens of minutes ("1.1" is also
/// 1h10m). Minutes of 60 or more are rejected.
pub fn parse_intuitive_hours(input: &str) -> Result<BigDecimal, AppError> {
    let trimmed = input.trim();
    let (hours_part, minutes_part) = match trimmed.split_once('.') {
        Some((h, m)) => (h, m),
        None => (trimmed, "0"),
    };

    let hours: u32 = hours_part
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid hours value: {}", input)))?;

    let minutes: u32 = match minutes_part.len() {
        1 => {
            // "1.1" means 1h10m, matching how the value reads aloud
            minutes_part
                .parse::<u32>()
                .map(|m| m * 10)
                .map_err(|_| AppError::Validation(format!("invalid minutes value: {}", input)))?
        }
        2 => minutes_part
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid minutes value: {}", input)))?,
        _ => {
            return Err(AppError::Validation(format!(
                "minutes must be one or two digits: {}",
                input
            )));
        }
    };

    if minutes >= 60 {
        return Err(AppError::Validation(format!(
            "minutes must be between 0 and 59: {}",
            input
        )));
    }

    let decimal = BigDecimal::from(hours) + BigDecimal::from(minutes) / BigDecimal::from(60);
    Ok(round_2dp(&decimal))
}

/// Inverse of `parse_intuitive_hours`: decimal hours back to "H.MM".
pub fn format_intuitive_hours(decimal_hours: &BigDecimal) -> String {
    let total_minutes = (decimal_hours * BigDecimal::from(60))
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
        .unwrap_or(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{}.{:02}", hours, minutes)
}
