use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::models::{WorkLog, WorkStatus};
use crate::database::types::WorkLogRow;

#[derive(Clone)]
pub struct WorkLogRepository {
    pool: SqlitePool,
}

impl WorkLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, work_log: &WorkLog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO work_logs
                (id, user_id, client_id, work_date, hours_worked, hourly_rate, total_amount, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&work_log.id)
        .bind(&work_log.user_id)
        .bind(&work_log.client_id)
        .bind(work_log.work_date)
        .bind(work_log.hours_worked.to_string())
        .bind(work_log.hourly_rate.to_string())
        .bind(work_log.total_amount.to_string())
        .bind(work_log.status.as_str())
        .bind(work_log.created_at)
        .bind(work_log.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str, work_log_id: &str) -> Result<Option<WorkLog>> {
        let row = sqlx::query_as::<_, WorkLogRow>(
            "SELECT * FROM work_logs WHERE id = ? AND user_id = ?",
        )
        .bind(work_log_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WorkLog::from))
    }

    /// The merge key: at most one work log exists per (user, client, date).
    pub async fn find_by_user_client_date(
        &self,
        user_id: &str,
        client_id: &str,
        work_date: NaiveDate,
    ) -> Result<Option<WorkLog>> {
        let row = sqlx::query_as::<_, WorkLogRow>(
            "SELECT * FROM work_logs WHERE user_id = ? AND client_id = ? AND work_date = ?",
        )
        .bind(user_id)
        .bind(client_id)
        .bind(work_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WorkLog::from))
    }

    /// Save new hours and rate, always recomputing total_amount from them.
    pub async fn update_hours(
        &self,
        user_id: &str,
        work_log_id: &str,
        hours_worked: &BigDecimal,
        hourly_rate: &BigDecimal,
        total_amount: &BigDecimal,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE work_logs
            SET hours_worked = ?, hourly_rate = ?, total_amount = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(hours_worked.to_string())
        .bind(hourly_rate.to_string())
        .bind(total_amount.to_string())
        .bind(chrono::Utc::now().naive_utc())
        .bind(work_log_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_status(
        &self,
        user_id: &str,
        work_log_id: &str,
        status: WorkStatus,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE work_logs SET status = ?, updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(status.as_str())
        .bind(chrono::Utc::now().naive_utc())
        .bind(work_log_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<WorkLog>> {
        let rows = sqlx::query_as::<_, WorkLogRow>(
            "SELECT * FROM work_logs WHERE user_id = ? ORDER BY work_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkLog::from).collect())
    }

    pub async fn list_for_client(&self, user_id: &str, client_id: &str) -> Result<Vec<WorkLog>> {
        let rows = sqlx::query_as::<_, WorkLogRow>(
            "SELECT * FROM work_logs WHERE user_id = ? AND client_id = ? ORDER BY work_date DESC",
        )
        .bind(user_id)
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkLog::from).collect())
    }
}
