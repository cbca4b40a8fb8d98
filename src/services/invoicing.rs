use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::database::models::{Invoice, SenderDetails, WorkStatus};
use crate::database::repositories::{InvoiceRepository, WorkLogRepository};
use crate::domain::invoicing::{invoice_total, is_overdue, is_paid, next_invoice_number};
use crate::error::AppError;

/// Numbering is derived by scanning existing invoices, so two concurrent
/// creations can compute the same candidate. The UNIQUE constraint catches
/// that; this is how many times we rescan and retry before giving up.
const MAX_NUMBERING_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct InvoicingService {
    invoices: InvoiceRepository,
    work_logs: WorkLogRepository,
}

/// An invoice with its derived presentation values.
#[derive(Debug, Clone)]
pub struct InvoiceSummary {
    pub invoice: Invoice,
    pub total_amount: BigDecimal,
    pub is_paid: bool,
    pub is_overdue: bool,
}

impl InvoicingService {
    pub fn new(invoices: InvoiceRepository, work_logs: WorkLogRepository) -> Self {
        Self { invoices, work_logs }
    }

    /// Create an invoice billing the given work logs. Sender and bank details
    /// are snapshotted onto the invoice so later profile edits leave issued
    /// invoices untouched. The invoice number is assigned here exactly once.
    pub async fn create_invoice(
        &self,
        user_id: &str,
        client_id: &str,
        work_log_ids: &[String],
        issue_date: NaiveDate,
        due_date: NaiveDate,
        sender: SenderDetails,
        notes: Option<String>,
    ) -> Result<Invoice, AppError> {
        // Every billed work log must belong to the requesting user; anything
        // else is reported as not-found, never forbidden.
        for work_log_id in work_log_ids {
            self.work_logs
                .find_by_id(user_id, work_log_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("work log {}", work_log_id)))?;
        }

        for attempt in 1..=MAX_NUMBERING_ATTEMPTS {
            let existing = self.invoices.list_numbers_for_user(user_id).await?;
            let invoice_number = next_invoice_number(&existing);

            let invoice = Invoice::new(
                user_id.to_string(),
                client_id.to_string(),
                invoice_number,
                issue_date,
                due_date,
                sender.clone(),
                notes.clone(),
            );

            // The repository moves the billed work logs to INVOICED in the
            // same transaction as the invoice insert.
            match self.invoices.create_with_items(&invoice, work_log_ids).await {
                Ok(()) => {
                    log::info!(
                        "Created invoice {} ({}) for user {}",
                        invoice.invoice_number,
                        invoice.id,
                        user_id
                    );
                    return Ok(invoice);
                }
                Err(e) => {
                    let err = AppError::from(e);
                    if err.is_unique_violation() {
                        log::warn!(
                            "Invoice number {} taken for user {} (attempt {}), retrying",
                            invoice.invoice_number,
                            user_id,
                            attempt
                        );
                        continue;
                    }
                    return Err(err);
                }
            }
        }

        Err(AppError::conflict(
            "could not allocate a unique invoice number".to_string(),
        ))
    }

    /// The invoice plus its derived total and paid/overdue flags. The total
    /// is recomputed from the linked work logs on every read.
    pub async fn summarize(
        &self,
        user_id: &str,
        invoice_id: &str,
        today: NaiveDate,
    ) -> Result<InvoiceSummary, AppError> {
        let invoice = self
            .invoices
            .find_by_id(user_id, invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("invoice {}", invoice_id)))?;

        let line_items = self.invoices.work_logs_for_invoice(user_id, invoice_id).await?;
        let paid = is_paid(&line_items);

        Ok(InvoiceSummary {
            total_amount: invoice_total(&line_items),
            is_paid: paid,
            is_overdue: is_overdue(invoice.due_date, today, paid),
            invoice,
        })
    }

    /// Mark every work log billed by the invoice as paid.
    pub async fn mark_paid(&self, user_id: &str, invoice_id: &str) -> Result<(), AppError> {
        self.invoices
            .find_by_id(user_id, invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("invoice {}", invoice_id)))?;

        let line_items = self.invoices.work_logs_for_invoice(user_id, invoice_id).await?;
        for work_log in line_items {
            self.work_logs
                .update_status(user_id, &work_log.id, WorkStatus::Paid)
                .await?;
        }
        Ok(())
    }
}
