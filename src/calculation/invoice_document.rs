//! Invoice document assembly.
//!
//! Builds the bundle a renderer needs for one invoice: header fields,
//! from/to blocks, line items, totals and payment instructions.

use crate::config::InvoiceConfig;
use crate::models::{Entry, InvoiceDocument, InvoiceLineItem};

use super::date_format::{
    format_invoice_date, format_period_label, format_period_text, format_table_date,
};
use super::invoice_grouping::select_entries_for_invoice;
use super::pay_period::compute_pay_period;
use super::totals::{aggregate, line_amount};

/// Builds the document for `invoice_number` from the stored entries.
///
/// The period is computed from the first matching entry's date. Returns
/// `None` when no entry carries the invoice number.
pub fn build_invoice(
    entries: &[Entry],
    invoice_number: &str,
    config: &InvoiceConfig,
) -> Option<InvoiceDocument> {
    let selected = select_entries_for_invoice(entries, invoice_number);
    let first = selected.first()?;

    let period = compute_pay_period(first.date, &config.pay_period);
    let hourly_rate = config.payment.hourly_rate;
    let totals = aggregate(&selected, hourly_rate);

    let line_items = selected
        .iter()
        .map(|entry| {
            let amount = line_amount(entry, hourly_rate);
            InvoiceLineItem {
                date: entry.date,
                date_label: format_table_date(entry.date),
                task: entry.task.clone(),
                description: if entry.description.is_empty() {
                    "-".to_string()
                } else {
                    entry.description.clone()
                },
                hours: entry
                    .hours
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                amount,
                amount_label: config.format_currency(amount),
            }
        })
        .collect();

    Some(InvoiceDocument {
        invoice_number: invoice_number.to_string(),
        period_start: period.period_start,
        period_end: period.period_end,
        payment_date: period.payment_date,
        label: format_period_label(&period),
        due_date_text: format_invoice_date(period.payment_date),
        period_text: format_period_text(period.period_start, period.period_end),
        contractor_name: config.contractor.name.clone(),
        contractor_email: config.contractor.email.clone(),
        client_name: config.client.name.clone(),
        client_address: config.client_full_address(),
        entries: selected,
        line_items,
        total_hours: totals.total_hours,
        total_amount: totals.total_amount,
        hourly_rate,
        currency: config.payment.currency.clone(),
        rate_text: format!("{}/hr", config.format_currency(hourly_rate)),
        total_due_text: config.format_currency(totals.total_amount),
        payment_instructions: format!(
            "Payment to be E-transferred to {}",
            config.contractor.payment_email
        ),
    })
}
