use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::Client;
use crate::database::types::ClientRow;

#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, client: &Client) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO clients (id, user_id, name, email, hourly_rate, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&client.id)
        .bind(&client.user_id)
        .bind(&client.name)
        .bind(&client.email)
        .bind(client.hourly_rate.to_string())
        .bind(client.is_active)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a client by id, scoped to the owning user. Cross-user access
    /// comes back as `None` so callers surface not-found, never forbidden.
    pub async fn find_by_id(&self, user_id: &str, client_id: &str) -> Result<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT * FROM clients WHERE id = ? AND user_id = ?",
        )
        .bind(client_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Client::from))
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            "SELECT * FROM clients WHERE user_id = ? ORDER BY name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    pub async fn set_active(&self, user_id: &str, client_id: &str, is_active: bool) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE clients SET is_active = ?, updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(is_active)
        .bind(chrono::Utc::now().naive_utc())
        .bind(client_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
