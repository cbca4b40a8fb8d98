use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::timeclock::*;
use crate::error::AppError;

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn whole_hours() {
    assert_eq!(duration_hours(at(9, 0), at(17, 0)), dec("8.00"));
}

#[test]
fn partial_hours_round_to_two_places() {
    // 100 minutes = 1.666... hours
    assert_eq!(duration_hours(at(9, 0), at(10, 40)), dec("1.67"));
}

#[test]
fn session_cost_is_hours_times_rate() {
    assert_eq!(session_cost(&dec("7.5"), &dec("40")), dec("300.00"));
    assert_eq!(session_cost(&dec("1.67"), &dec("33.33")), dec("55.66"));
}

#[test]
fn intuitive_hours_two_digit_minutes() {
    // 1h10m = 1.1666..., rounds to 1.17
    assert_eq!(parse_intuitive_hours("1.10").unwrap(), dec("1.17"));
}

#[test]
fn intuitive_hours_single_digit_means_tens_of_minutes() {
    assert_eq!(parse_intuitive_hours("1.1").unwrap(), dec("1.17"));
    assert_eq!(parse_intuitive_hours("2.3").unwrap(), dec("2.50"));
}

#[test]
fn intuitive_hours_without_minutes() {
    assert_eq!(parse_intuitive_hours("3").unwrap(), dec("3.00"));
}

#[test]
fn intuitive_hours_rejects_sixty_or_more_minutes() {
    assert!(matches!(
        parse_intuitive_hours("1.60"),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        parse_intuitive_hours("1.99"),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn intuitive_hours_rejects_garbage() {
    assert!(matches!(
        parse_intuitive_hours("abc"),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        parse_intuitive_hours("1.234"),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn formatting_round_trips_the_shorthand() {
    assert_eq!(format_intuitive_hours(&dec("1.17")), "1.10");
    assert_eq!(format_intuitive_hours(&dec("2.50")), "2.30");
    assert_eq!(format_intuitive_hours(&dec("3.00")), "3.00");
}
