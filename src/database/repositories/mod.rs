pub mod client;
pub mod clock_session;
pub mod invoice;
pub mod mileage;
pub mod subscription;
pub mod work_log;

pub use client::ClientRepository;
pub use clock_session::ClockSessionRepository;
pub use invoice::InvoiceRepository;
pub use mileage::MileageRepository;
pub use subscription::SubscriptionRepository;
pub use work_log::WorkLogRepository;
