use bigdecimal::BigDecimal;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client the user bills work and mileage against. Each client carries the
/// default hourly rate applied to work logs created from clock sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub hourly_rate: BigDecimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Client {
    pub fn new(
        user_id: String,
        name: String,
        email: Option<String>,
        hourly_rate: BigDecimal,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            email,
            hourly_rate,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
