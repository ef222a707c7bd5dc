//! Pay period model.
//!
//! This module contains the [`PayPeriod`] value type: the fixed-length block
//! of days that a work date falls into, with its payment date and invoice
//! number. Pay periods are always derived from a date and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A derived pay period.
///
/// # Example
///
/// ```
/// use invoice_tracker::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     period_start: NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
///     payment_date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
///     invoice_number: "INV-2025-11-29".to_string(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 15).unwrap()));
/// assert_eq!(period.length_days(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub period_start: NaiveDate,
    /// The last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// The date the invoice for this period is due.
    pub payment_date: NaiveDate,
    /// The invoice identifier, `INV-YYYY-MM-DD` of the payment date.
    pub invoice_number: String,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     period_start: NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
    ///     payment_date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
    ///     invoice_number: "INV-2025-11-29".to_string(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 22).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 23).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.period_start && date <= self.period_end
    }

    /// Number of days in the period, counting both ends.
    pub fn length_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }
}
