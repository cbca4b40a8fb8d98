use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sender and bank details as entered on the user's profile. These are
/// copied onto each invoice at creation time; later profile edits must not
/// change invoices that were already issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderDetails {
    pub sender_name: String,
    pub sender_address: String,
    pub bank_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_sort_code: Option<String>,
}

/// An issued invoice. `invoice_number` is assigned exactly once at first save
/// and never changes; the total is always derived from the linked work logs
/// and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
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

impl Invoice {
    pub fn new(
        user_id: String,
        client_id: String,
        invoice_number: String,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        sender: SenderDetails,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            client_id,
            invoice_number,
            issue_date,
            due_date,
            sender_name: sender.sender_name,
            sender_address: sender.sender_address,
            bank_name: sender.bank_name,
            bank_account_number: sender.bank_account_number,
            bank_sort_code: sender.bank_sort_code,
            notes,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// The association between an invoice and one work log it bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub invoice_id: String,
    pub work_log_id: String,
}
