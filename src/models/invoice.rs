//! Invoice view models.
//!
//! These types carry the result of grouping entries by invoice and the
//! bundle a document generator needs to render one invoice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Entry;

/// One invoice present among the stored entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceGroup {
    /// The invoice number shared by the grouped entries.
    pub invoice_number: String,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Payment due date.
    pub payment_date: NaiveDate,
    /// Short period label, e.g. "Nov 9 - Nov 22".
    pub label: String,
}

/// Summed hours and billable amount for a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Total hours, counting non-numeric hours as zero.
    pub total_hours: Decimal,
    /// `total_hours` multiplied by the hourly rate.
    pub total_amount: Decimal,
}

/// One row of the invoice line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// The work date.
    pub date: NaiveDate,
    /// The work date as shown in the table, e.g. "Nov 26".
    pub date_label: String,
    /// Task name.
    pub task: String,
    /// Description, or "-" when empty.
    pub description: String,
    /// Hours as recorded.
    pub hours: String,
    /// Hours multiplied by the hourly rate.
    pub amount: Decimal,
    /// `amount` formatted in the configured currency.
    pub amount_label: String,
}

/// Everything needed to render one invoice document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// The invoice number.
    pub invoice_number: String,
    /// First day of the billed pay period.
    pub period_start: NaiveDate,
    /// Last day of the billed pay period.
    pub period_end: NaiveDate,
    /// Payment due date.
    pub payment_date: NaiveDate,
    /// Short period label, e.g. "Nov 9 - Nov 22".
    pub label: String,
    /// Due date in long form, e.g. "November 29, 2025".
    pub due_date_text: String,
    /// Period in long form, e.g. "November 9, 2025 - November 22, 2025".
    pub period_text: String,
    /// Contractor name for the "from" block.
    pub contractor_name: String,
    /// Contractor email for the "from" block.
    pub contractor_email: String,
    /// Client name for the "to" block.
    pub client_name: String,
    /// Client address for the "to" block.
    pub client_address: String,
    /// The billed entries, in stored order.
    pub entries: Vec<Entry>,
    /// Table rows, one per entry.
    pub line_items: Vec<InvoiceLineItem>,
    /// Total hours billed.
    pub total_hours: Decimal,
    /// Total amount due.
    pub total_amount: Decimal,
    /// Hourly rate applied.
    pub hourly_rate: Decimal,
    /// Currency code.
    pub currency: String,
    /// Rate as printed, e.g. "30.00 CAD/hr".
    pub rate_text: String,
    /// Amount due as printed, e.g. "165.00 CAD".
    pub total_due_text: String,
    /// Payment instructions line.
    pub payment_instructions: String,
}

impl InvoiceDocument {
    /// Suggested file name for the rendered document.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.invoice_number)
    }
}
