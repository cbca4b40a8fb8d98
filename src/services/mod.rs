pub mod invoicing;
pub mod mileage;
pub mod subscriptions;
pub mod timeclock;

pub use invoicing::{InvoiceSummary, InvoicingService};
pub use mileage::MileageService;
pub use subscriptions::SubscriptionService;
pub use timeclock::TimeclockService;
