use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::database::models::ClockSession;
use crate::database::types::ClockSessionRow;

#[derive(Clone)]
pub struct ClockSessionRepository {
    pool: SqlitePool,
}

impl ClockSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &ClockSession) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO clock_sessions
                (id, user_id, client_id, clock_in_time, clock_out_time, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(&session.client_id)
        .bind(session.clock_in_time)
        .bind(session.clock_out_time)
        .bind(session.is_active)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str, session_id: &str) -> Result<Option<ClockSession>> {
        let row = sqlx::query_as::<_, ClockSessionRow>(
            "SELECT * FROM clock_sessions WHERE id = ? AND user_id = ?",
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ClockSession::from))
    }

    pub async fn find_active_for_client(
        &self,
        user_id: &str,
        client_id: &str,
    ) -> Result<Option<ClockSession>> {
        let row = sqlx::query_as::<_, ClockSessionRow>(
            "SELECT * FROM clock_sessions WHERE user_id = ? AND client_id = ? AND is_active = 1",
        )
        .bind(user_id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ClockSession::from))
    }

    /// Complete a session exactly once. The `is_active = 1` guard makes a
    /// second clock-out a no-op at the SQL level, so a double call can never
    /// double-increment a work log. Returns whether this call won the flip.
    pub async fn complete(
        &self,
        user_id: &str,
        session_id: &str,
        clock_out_time: NaiveDateTime,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE clock_sessions
            SET clock_out_time = ?, is_active = 0
            WHERE id = ? AND user_id = ? AND is_active = 1
            "#,
        )
        .bind(clock_out_time)
        .bind(session_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<ClockSession>> {
        let rows = sqlx::query_as::<_, ClockSessionRow>(
            "SELECT * FROM clock_sessions WHERE user_id = ? ORDER BY clock_in_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClockSession::from).collect())
    }
}
