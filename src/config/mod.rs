//! Configuration loading and management for the invoice tracker.
//!
//! This module loads contractor, client, payment and pay period settings
//! from a YAML file. The configuration is immutable once loaded.
//!
//! # Example
//!
//! ```no_run
//! use invoice_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/invoice.yaml").unwrap();
//! println!("Billing {}", config.config().client.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ClientDetails, ContractorDetails, InvoiceConfig, MAX_HOURLY_RATE,
    MAX_PAYMENT_DAYS_AFTER_PERIOD_END, MAX_PERIOD_LENGTH_DAYS, PayPeriodConfig, PaymentConfig,
};
