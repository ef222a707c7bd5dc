//! Grouping entries by invoice.
//!
//! Entries are grouped by the invoice number they carry rather than by
//! recomputing it, because legacy rows may have been stamped under an
//! earlier configuration.

use std::collections::HashSet;

use crate::config::PayPeriodConfig;
use crate::models::{Entry, InvoiceGroup};

use super::date_format::format_period_label;
use super::pay_period::compute_pay_period;

/// Builds one [`InvoiceGroup`] per distinct invoice number in `entries`.
///
/// # Behavior
///
/// - Entries without an invoice number (absent or empty) are skipped
/// - Period fields come from the first entry seen for each invoice
/// - Groups are ordered by payment date, most recent first; equal payment
///   dates (only possible with hand-edited invoice numbers) fall back to the
///   invoice number, descending, so the order never depends on input order
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::{group_entries_by_invoice, get_invoice_number};
/// use invoice_tracker::config::PayPeriodConfig;
/// use invoice_tracker::models::Entry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 14, 7).unwrap();
/// let stamped = |y, m, d| {
///     let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
///     Entry::new("Task", "", date, Decimal::ONE).with_invoice(get_invoice_number(date, &config))
/// };
///
/// let entries = vec![stamped(2025, 11, 10), stamped(2025, 11, 25), stamped(2025, 11, 12)];
/// let groups = group_entries_by_invoice(&entries, &config);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].invoice_number, "INV-2025-12-13");
/// assert_eq!(groups[1].invoice_number, "INV-2025-11-29");
/// assert_eq!(groups[1].label, "Nov 9 - Nov 22");
/// ```
pub fn group_entries_by_invoice(entries: &[Entry], config: &PayPeriodConfig) -> Vec<InvoiceGroup> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups: Vec<InvoiceGroup> = Vec::new();

    for entry in entries {
        let Some(invoice_number) = entry.invoice_number() else {
            continue;
        };
        if !seen.insert(invoice_number) {
            continue;
        }

        let period = compute_pay_period(entry.date, config);
        groups.push(InvoiceGroup {
            invoice_number: invoice_number.to_string(),
            period_start: period.period_start,
            period_end: period.period_end,
            payment_date: period.payment_date,
            label: format_period_label(&period),
        });
    }

    groups.sort_by(|a, b| {
        b.payment_date
            .cmp(&a.payment_date)
            .then_with(|| b.invoice_number.cmp(&a.invoice_number))
    });
    groups
}

/// Returns the entries billed under `invoice_number`, in input order.
pub fn select_entries_for_invoice(entries: &[Entry], invoice_number: &str) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.invoice.as_deref() == Some(invoice_number))
        .cloned()
        .collect()
}

/// Recomputes an entry's invoice number from its work date.
///
/// Returns the previous value when it differed from the derived one.
pub fn stamp_invoice(entry: &mut Entry, config: &PayPeriodConfig) -> Option<String> {
    let derived = compute_pay_period(entry.date, config).invoice_number;
    match entry.invoice.replace(derived) {
        Some(previous) if Some(previous.as_str()) != entry.invoice.as_deref() => Some(previous),
        _ => None,
    }
}
