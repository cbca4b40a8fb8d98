use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded journey. `rate_per_mile` and `total_claim` are derived at
/// creation time from the cumulative mileage already recorded for the same
/// user in the same UK tax year; they are snapshots and are never recomputed
/// when earlier journeys change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MileageJourney {
    pub id: String,
    pub user_id: String,
    pub client_id: Option<String>,
    pub journey_date: NaiveDate,
    pub miles: BigDecimal,
    pub rate_per_mile: BigDecimal,
    pub total_claim: BigDecimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl MileageJourney {
    pub fn new(
        user_id: String,
        client_id: Option<String>,
        journey_date: NaiveDate,
        miles: BigDecimal,
        rate_per_mile: BigDecimal,
        total_claim: BigDecimal,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            client_id,
            journey_date,
            miles,
            rate_per_mile,
            total_claim,
            description,
            created_at: Utc::now().naive_utc(),
        }
    }
}
