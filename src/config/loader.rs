//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the invoice
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::types::{InvoiceConfig, PayPeriodConfig, PaymentConfig};

/// Loads and provides access to the invoice configuration.
///
/// The configuration is read once at startup and never mutated afterwards.
/// Validation happens at load time, so a loader that exists always holds a
/// usable configuration.
///
/// # File Format
///
/// ```text
/// contractor:
///   name: Jane Contractor
///   email: jane@example.com
///   payment_email: pay@example.com
/// client:
///   name: Example Client
///   address: 1 Main St
///   city: Vancouver
///   province: BC
///   postal_code: V6A 2P3
///   country: Canada
/// payment:
///   hourly_rate: 30
///   currency: CAD
///   currency_symbol: "$"
/// pay_period:
///   reference_start_date: 2025-11-09
///   period_length_days: 14
///   payment_days_after_period_end: 7
/// ```
///
/// # Example
///
/// ```no_run
/// use invoice_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/invoice.yaml").unwrap();
/// println!("Invoicing {}", loader.config().client.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: InvoiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a zero period length (`ConfigParseError`)
    /// - A value fails validation, such as a non-positive rate (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Loads configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// contractor: { name: Jane, email: jane@example.com, payment_email: pay@example.com }
    /// client: { name: Client, address: 1 Main St, city: Vancouver, province: BC, postal_code: V6A 2P3, country: Canada }
    /// payment: { hourly_rate: 30, currency: CAD, currency_symbol: "$" }
    /// pay_period: { reference_start_date: 2025-11-09, period_length_days: 14, payment_days_after_period_end: 7 }
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
    /// assert_eq!(loader.pay_period().period_length_days(), 14);
    /// ```
    pub fn from_yaml_str(content: &str) -> TrackerResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> TrackerResult<Self> {
        let config: InvoiceConfig =
            serde_yaml::from_str(content).map_err(|e| TrackerError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;

        debug!(
            path = %path,
            reference_start_date = %config.pay_period.reference_start_date(),
            period_length_days = config.pay_period.period_length_days(),
            "Loaded invoice configuration"
        );

        Ok(Self { config })
    }

    /// Returns the underlying invoice configuration.
    pub fn config(&self) -> &InvoiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> InvoiceConfig {
        self.config
    }

    /// Returns the pay period grid.
    pub fn pay_period(&self) -> &PayPeriodConfig {
        &self.config.pay_period
    }

    /// Returns the billing rate and currency.
    pub fn payment(&self) -> &PaymentConfig {
        &self.config.payment
    }
}
