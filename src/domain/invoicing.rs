use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;

use crate::database::models::{WorkLog, WorkStatus};

/// The sequence conventionally starts at INV-005.
const FIRST_INVOICE_NUMBER: u64 = 5;

/// Derive the next invoice number from the user's existing ones: take the
/// numeric suffix of every `INV-<digits>` entry (malformed entries are
/// ignored), add one to the maximum, and zero-pad to three digits. The width
/// grows naturally past 999.
pub fn next_invoice_number(existing_numbers: &[String]) -> String {
    let pattern = Regex::new(r"^INV-(\d+)$").unwrap();

    let max = existing_numbers
        .iter()
        .filter_map(|number| {
            pattern
                .captures(number)
                .and_then(|caps| caps[1].parse::<u64>().ok())
        })
        .max();

    let next = match max {
        Some(n) => n + 1,
        None => FIRST_INVOICE_NUMBER,
    };

    format!("INV-{:03}", next)
}

/// An invoice's total is always the sum of its linked work logs, never stored.
pub fn invoice_total(line_items: &[WorkLog]) -> BigDecimal {
    line_items
        .iter()
        .fold(BigDecimal::from(0), |acc, log| acc + &log.total_amount)
}

/// Paid only when there is at least one line item and every linked work log
/// is PAID. An invoice with zero line items is never considered paid.
pub fn is_paid(line_items: &[WorkLog]) -> bool {
    !line_items.is_empty()
        && line_items
            .iter()
            .all(|log| log.status == WorkStatus::Paid)
}

pub fn is_overdue(due_date: NaiveDate, today: NaiveDate, paid: bool) -> bool {
    due_date < today && !paid
}
