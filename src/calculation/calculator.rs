//! The pay period calculator.
//!
//! [`PayPeriodCalculator`] bundles the pay period grid and hourly rate so that
//! callers holding shared state do not have to thread configuration through
//! every call. It holds no mutable state and is `Copy`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{InvoiceConfig, PayPeriodConfig};
use crate::models::{Entry, InvoiceGroup, InvoiceTotals, PayPeriod};

use super::date_format::format_period_label;
use super::invoice_grouping::{group_entries_by_invoice, select_entries_for_invoice, stamp_invoice};
use super::pay_period::compute_pay_period;
use super::totals::aggregate;

/// Stateless calculator over a fixed configuration.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::PayPeriodCalculator;
/// use invoice_tracker::config::PayPeriodConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 14, 7).unwrap();
/// let calculator = PayPeriodCalculator::new(config, Decimal::new(30, 0));
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
/// assert_eq!(calculator.invoice_number(date), "INV-2025-11-29");
/// assert_eq!(calculator.period_label(date), "Nov 9 - Nov 22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriodCalculator {
    config: PayPeriodConfig,
    hourly_rate: Decimal,
}

impl PayPeriodCalculator {
    /// Creates a calculator for the given grid and rate.
    pub fn new(config: PayPeriodConfig, hourly_rate: Decimal) -> Self {
        Self {
            config,
            hourly_rate,
        }
    }

    /// Creates a calculator from a loaded invoice configuration.
    pub fn from_config(config: &InvoiceConfig) -> Self {
        Self::new(config.pay_period, config.payment.hourly_rate)
    }

    /// The pay period grid.
    pub fn config(&self) -> &PayPeriodConfig {
        &self.config
    }

    /// The hourly rate used by [`aggregate`](Self::aggregate).
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The pay period containing `date`.
    pub fn compute_pay_period(&self, date: NaiveDate) -> PayPeriod {
        compute_pay_period(date, &self.config)
    }

    /// The invoice number for the period containing `date`.
    pub fn invoice_number(&self, date: NaiveDate) -> String {
        self.compute_pay_period(date).invoice_number
    }

    /// The payment date for the period containing `date`.
    pub fn payment_date(&self, date: NaiveDate) -> NaiveDate {
        self.compute_pay_period(date).payment_date
    }

    /// Short label for a period, e.g. "Nov 9 - Nov 22".
    pub fn format_period_label(&self, period: &PayPeriod) -> String {
        format_period_label(period)
    }

    /// Short label for the period containing `date`.
    pub fn period_label(&self, date: NaiveDate) -> String {
        format_period_label(&self.compute_pay_period(date))
    }

    /// One group per distinct invoice, most recent payment first.
    pub fn group_entries_by_invoice(&self, entries: &[Entry]) -> Vec<InvoiceGroup> {
        group_entries_by_invoice(entries, &self.config)
    }

    /// Entries billed under `invoice_number`, in input order.
    pub fn select_entries_for_invoice(&self, entries: &[Entry], invoice_number: &str) -> Vec<Entry> {
        select_entries_for_invoice(entries, invoice_number)
    }

    /// Total hours and amount at this calculator's rate.
    pub fn aggregate(&self, entries: &[Entry]) -> InvoiceTotals {
        aggregate(entries, self.hourly_rate)
    }

    /// Recomputes the entry's invoice number from its date.
    ///
    /// Returns the overwritten value when it differed.
    pub fn stamp_invoice(&self, entry: &mut Entry) -> Option<String> {
        stamp_invoice(entry, &self.config)
    }
}
