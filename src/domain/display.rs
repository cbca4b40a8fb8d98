use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::round_2dp;

/// Map a status label to the badge color token the list views render with.
/// The lookup is case-insensitive and closed; anything unrecognized falls
/// back to "secondary".
pub fn status_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pending" => "warning",
        "invoiced" => "info",
        "paid" => "success",
        "active" => "success",
        "inactive" => "secondary",
        "cancelled" => "danger",
        _ => "secondary",
    }
}

pub fn currency_symbol(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "GBP" => "£".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        other => other.to_string(),
    }
}

/// "£1234.50" style presentation value, always 2 dp.
pub fn format_money(amount: &BigDecimal, currency_code: &str) -> String {
    format!("{}{}", currency_symbol(currency_code), round_2dp(amount))
}

/// UK-style short date.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "06 Apr 2024" style, used on invoice headers.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
