//! Application state for the invoice tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayPeriodCalculator;
use crate::config::InvoiceConfig;
use crate::storage::EntryStore;

/// Shared application state.
///
/// Holds the loaded configuration, a calculator built from it and the entry
/// store. Cloning is cheap: the configuration and store are shared.
#[derive(Clone)]
pub struct AppState {
    config: Arc<InvoiceConfig>,
    calculator: PayPeriodCalculator,
    store: Arc<dyn EntryStore>,
}

impl AppState {
    /// Creates application state from a validated configuration and a store.
    pub fn new(config: InvoiceConfig, store: Arc<dyn EntryStore>) -> Self {
        let calculator = PayPeriodCalculator::from_config(&config);
        Self {
            config: Arc::new(config),
            calculator,
            store,
        }
    }

    /// Returns the invoice configuration.
    pub fn config(&self) -> &InvoiceConfig {
        &self.config
    }

    /// Returns the pay period calculator.
    pub fn calculator(&self) -> &PayPeriodCalculator {
        &self.calculator
    }

    /// Returns a shared handle to the entry store.
    pub fn store(&self) -> Arc<dyn EntryStore> {
        Arc::clone(&self.store)
    }
}
