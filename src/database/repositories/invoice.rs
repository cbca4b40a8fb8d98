use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Invoice, InvoiceItem, WorkLog, WorkStatus};
use crate::database::types::{InvoiceItemRow, InvoiceRow, WorkLogRow};

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an invoice together with its line items in one transaction,
    /// moving every billed work log to INVOICED in the same transaction so a
    /// partial failure never leaves an issued invoice with PENDING items.
    /// The UNIQUE (user_id, invoice_number) constraint is the backstop for
    /// the scan-derived number; callers retry on a uniqueness violation.
    pub async fn create_with_items(
        &self,
        invoice: &Invoice,
        work_log_ids: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO invoices
                (id, user_id, client_id, invoice_number, issue_date, due_date,
                 sender_name, sender_address, bank_name, bank_account_number, bank_sort_code,
                 notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.user_id)
        .bind(&invoice.client_id)
        .bind(&invoice.invoice_number)
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .bind(&invoice.sender_name)
        .bind(&invoice.sender_address)
        .bind(&invoice.bank_name)
        .bind(&invoice.bank_account_number)
        .bind(&invoice.bank_sort_code)
        .bind(&invoice.notes)
        .bind(invoice.created_at)
        .execute(&mut *tx)
        .await?;

        for work_log_id in work_log_ids {
            sqlx::query(
                "INSERT INTO invoice_items (id, invoice_id, work_log_id) VALUES (?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&invoice.id)
            .bind(work_log_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                "UPDATE work_logs SET status = ?, updated_at = ? WHERE id = ? AND user_id = ?",
            )
            .bind(WorkStatus::Invoiced.as_str())
            .bind(chrono::Utc::now().naive_utc())
            .bind(work_log_id)
            .bind(&invoice.user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str, invoice_id: &str) -> Result<Option<Invoice>> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            "SELECT * FROM invoices WHERE id = ? AND user_id = ?",
        )
        .bind(invoice_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Invoice::from))
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT * FROM invoices WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Invoice::from).collect())
    }

    /// Every invoice number the user has used so far; input to the
    /// next-number scan.
    pub async fn list_numbers_for_user(&self, user_id: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT invoice_number FROM invoices WHERE user_id = ?")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(n,)| n).collect())
    }

    pub async fn items_for_invoice(&self, invoice_id: &str) -> Result<Vec<InvoiceItem>> {
        let rows = sqlx::query_as::<_, InvoiceItemRow>(
            "SELECT * FROM invoice_items WHERE invoice_id = ?",
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(InvoiceItem::from).collect())
    }

    /// The work logs billed by an invoice, user-scoped through the invoice.
    pub async fn work_logs_for_invoice(
        &self,
        user_id: &str,
        invoice_id: &str,
    ) -> Result<Vec<WorkLog>> {
        let rows = sqlx::query_as::<_, WorkLogRow>(
            r#"
            SELECT w.* FROM work_logs w
            INNER JOIN invoice_items i ON i.work_log_id = w.id
            INNER JOIN invoices inv ON inv.id = i.invoice_id
            WHERE i.invoice_id = ? AND inv.user_id = ?
            ORDER BY w.work_date ASC
            "#,
        )
        .bind(invoice_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WorkLog::from).collect())
    }
}
