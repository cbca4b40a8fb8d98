pub mod client;
pub mod invoice;
pub mod macros;
pub mod mileage;
pub mod subscription;
pub mod work_log;

pub use client::Client;
pub use invoice::{Invoice, InvoiceItem, SenderDetails};
pub use mileage::MileageJourney;
pub use subscription::{BillingCycle, Subscription};
pub use work_log::{ClockSession, WorkLog, WorkStatus};
