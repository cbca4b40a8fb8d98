use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::models::MileageJourney;
use crate::database::types::MileageJourneyRow;

#[derive(Clone)]
pub struct MileageRepository {
    pool: SqlitePool,
}

impl MileageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, journey: &MileageJourney) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO mileage_journeys
                (id, user_id, client_id, journey_date, miles, rate_per_mile, total_claim, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&journey.id)
        .bind(&journey.user_id)
        .bind(&journey.client_id)
        .bind(journey.journey_date)
        .bind(journey.miles.to_string())
        .bind(journey.rate_per_mile.to_string())
        .bind(journey.total_claim.to_string())
        .bind(&journey.description)
        .bind(journey.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str, journey_id: &str) -> Result<Option<MileageJourney>> {
        let row = sqlx::query_as::<_, MileageJourneyRow>(
            "SELECT * FROM mileage_journeys WHERE id = ? AND user_id = ?",
        )
        .bind(journey_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MileageJourney::from))
    }

    /// All journeys for one user within [start, end] inclusive, oldest first.
    pub async fn list_in_window(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MileageJourney>> {
        let rows = sqlx::query_as::<_, MileageJourneyRow>(
            r#"
            SELECT * FROM mileage_journeys
            WHERE user_id = ? AND journey_date >= ? AND journey_date <= ?
            ORDER BY journey_date ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MileageJourney::from).collect())
    }

    /// Cumulative miles already recorded for the user inside the window.
    /// Summed in BigDecimal rather than SQL so TEXT-stored decimals never
    /// pass through floating point.
    pub async fn total_miles_in_window(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BigDecimal> {
        let miles: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT miles FROM mileage_journeys
            WHERE user_id = ? AND journey_date >= ? AND journey_date <= ?
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        let mut total = BigDecimal::from(0);
        for (m,) in miles {
            total += m.parse::<BigDecimal>().unwrap_or_default();
        }
        Ok(total)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<MileageJourney>> {
        let rows = sqlx::query_as::<_, MileageJourneyRow>(
            "SELECT * FROM mileage_journeys WHERE user_id = ? ORDER BY journey_date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MileageJourney::from).collect())
    }
}
