//! Fixed-locale date labels.
//!
//! Labels use English month names regardless of the host locale.

use chrono::NaiveDate;

use crate::models::PayPeriod;

/// Formats a date as it appears in the line-item table, e.g. "Nov 26".
pub fn format_table_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Formats a date with its year, e.g. "Nov 9, 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date in long form for invoice headers, e.g. "November 9, 2025".
pub fn format_invoice_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders a pay period as a short label, e.g. "Nov 9 - Nov 22".
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::format_period_label;
/// use invoice_tracker::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     period_start: NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
///     payment_date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
///     invoice_number: "INV-2025-11-29".to_string(),
/// };
/// assert_eq!(format_period_label(&period), "Nov 9 - Nov 22");
/// ```
pub fn format_period_label(period: &PayPeriod) -> String {
    format!(
        "{} - {}",
        format_table_date(period.period_start),
        format_table_date(period.period_end)
    )
}

/// Renders a pay period in long form, e.g. "November 9, 2025 - November 22, 2025".
pub fn format_period_text(period_start: NaiveDate, period_end: NaiveDate) -> String {
    format!(
        "{} - {}",
        format_invoice_date(period_start),
        format_invoice_date(period_end)
    )
}
