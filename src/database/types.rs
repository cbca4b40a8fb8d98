use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

// Database row types that match the exact SQLite schema. Decimal columns are
// TEXT; the conversions below parse them into BigDecimal so no float ever
// touches a monetary value.

/// A decimal column that fails to parse means the row was written outside the
/// application. Substitute 0 so reads keep working, but say so in the log.
fn parse_decimal(value: &str, column: &str, row_id: &str) -> BigDecimal {
    value.parse().unwrap_or_else(|_| {
        log::warn!(
            "Unparseable decimal {:?} in {} for row {}, substituting 0",
            value,
            column,
            row_id
        );
        BigDecimal::from(0)
    })
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClientRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub hourly_rate: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubscriptionRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub billing_cycle: String,
    pub start_date: NaiveDate,
    pub next_billing_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MileageJourneyRow {
    pub id: String,
    pub user_id: String,
    pub client_id: Option<String>,
    pub journey_date: NaiveDate,
    pub miles: String,
    pub rate_per_mile: String,
    pub total_claim: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClockSessionRow {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub clock_in_time: NaiveDateTime,
    pub clock_out_time: Option<NaiveDateTime>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkLogRow {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub work_date: NaiveDate,
    pub hours_worked: String,
    pub hourly_rate: String,
    pub total_amount: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceRow {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub sender_name: String,
    pub sender_address: String,
    pub bank_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_sort_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceItemRow {
    pub id: String,
    pub invoice_id: String,
    pub work_log_id: String,
}

// Conversion functions
impl From<ClientRow> for super::models::Client {
    fn from(row: ClientRow) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            hourly_rate: parse_decimal(&row.hourly_rate, "clients.hourly_rate", &row.id),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            id: row.id,
        }
    }
}

impl From<SubscriptionRow> for super::models::Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            amount: parse_decimal(&row.amount, "subscriptions.amount", &row.id),
            billing_cycle: row
                .billing_cycle
                .parse()
                .unwrap_or(super::models::BillingCycle::Monthly),
            start_date: row.start_date,
            next_billing_date: row.next_billing_date,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            id: row.id,
        }
    }
}

impl From<MileageJourneyRow> for super::models::MileageJourney {
    fn from(row: MileageJourneyRow) -> Self {
        Self {
            user_id: row.user_id,
            client_id: row.client_id,
            journey_date: row.journey_date,
            miles: parse_decimal(&row.miles, "mileage_journeys.miles", &row.id),
            rate_per_mile: parse_decimal(&row.rate_per_mile, "mileage_journeys.rate_per_mile", &row.id),
            total_claim: parse_decimal(&row.total_claim, "mileage_journeys.total_claim", &row.id),
            description: row.description,
            created_at: row.created_at,
            id: row.id,
        }
    }
}

impl From<ClockSessionRow> for super::models::ClockSession {
    fn from(row: ClockSessionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            client_id: row.client_id,
            clock_in_time: row.clock_in_time,
            clock_out_time: row.clock_out_time,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl From<WorkLogRow> for super::models::WorkLog {
    fn from(row: WorkLogRow) -> Self {
        Self {
            user_id: row.user_id,
            client_id: row.client_id,
            work_date: row.work_date,
            hours_worked: parse_decimal(&row.hours_worked, "work_logs.hours_worked", &row.id),
            hourly_rate: parse_decimal(&row.hourly_rate, "work_logs.hourly_rate", &row.id),
            total_amount: parse_decimal(&row.total_amount, "work_logs.total_amount", &row.id),
            status: row
                .status
                .parse()
                .unwrap_or(super::models::WorkStatus::Pending),
            created_at: row.created_at,
            updated_at: row.updated_at,
            id: row.id,
        }
    }
}

impl From<InvoiceRow> for super::models::Invoice {
    fn from(row: InvoiceRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            client_id: row.client_id,
            invoice_number: row.invoice_number,
            issue_date: row.issue_date,
            due_date: row.due_date,
            sender_name: row.sender_name,
            sender_address: row.sender_address,
            bank_name: row.bank_name,
            bank_account_number: row.bank_account_number,
            bank_sort_code: row.bank_sort_code,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

impl From<InvoiceItemRow> for super::models::InvoiceItem {
    fn from(row: InvoiceItemRow) -> Self {
        Self {
            id: row.id,
            invoice_id: row.invoice_id,
            work_log_id: row.work_log_id,
        }
    }
}
