use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// Billing cycle enum
string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum BillingCycle {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
}

impl Default for BillingCycle {
    fn default() -> Self {
        BillingCycle::Monthly
    }
}

/// A recurring subscription. The monthly-equivalent cost is always derived
/// from `amount` and `billing_cycle` at read time, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: BigDecimal,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    // Expected to be >= start_date, but the original system never validated
    // this and callers may rely on rolling it forward lazily.
    pub next_billing_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Subscription {
    pub fn new(
        user_id: String,
        name: String,
        amount: BigDecimal,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
        next_billing_date: NaiveDate,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            amount,
            billing_cycle,
            start_date,
            next_billing_date,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
