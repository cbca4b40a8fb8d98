pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::AppError;
