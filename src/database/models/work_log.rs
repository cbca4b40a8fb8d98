use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// Work/invoice status enum
string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum WorkStatus {
        Pending => "pending",
        Invoiced => "invoiced",
        Paid => "paid",
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        WorkStatus::Pending
    }
}

/// A single open/close interval of billable work for one client.
/// Active → Completed is one-way: clocking out sets `clock_out_time`, flips
/// `is_active` off, and the session never reopens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockSession {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub clock_in_time: NaiveDateTime,
    pub clock_out_time: Option<NaiveDateTime>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl ClockSession {
    pub fn start(user_id: String, client_id: String, clock_in_time: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            client_id,
            clock_in_time,
            clock_out_time: None,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// A date-scoped aggregate of hours worked for one client, possibly merged
/// from several clock sessions. Unique per (user, client, work_date);
/// `total_amount` is recomputed from hours × rate on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub work_date: NaiveDate,
    pub hours_worked: BigDecimal,
    pub hourly_rate: BigDecimal,
    pub total_amount: BigDecimal,
    pub status: WorkStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl WorkLog {
    pub fn new(
        user_id: String,
        client_id: String,
        work_date: NaiveDate,
        hours_worked: BigDecimal,
        hourly_rate: BigDecimal,
        total_amount: BigDecimal,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            client_id,
            work_date,
            hours_worked,
            hourly_rate,
            total_amount,
            status: WorkStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
