//! Calculation logic for the invoice tracker.
//!
//! This module contains the pure pay period functions: deriving the pay
//! period, payment date and invoice number for a work date, formatting
//! period labels, grouping entries by invoice, aggregating hours and
//! amounts, and assembling invoice documents. None of these functions
//! perform I/O or keep state.

mod calculator;
mod date_format;
mod invoice_document;
mod invoice_grouping;
mod pay_period;
mod totals;

pub use calculator::PayPeriodCalculator;
pub use date_format::{
    format_display_date, format_invoice_date, format_period_label, format_period_text,
    format_table_date,
};
pub use invoice_document::build_invoice;
pub use invoice_grouping::{group_entries_by_invoice, select_entries_for_invoice, stamp_invoice};
pub use pay_period::{
    MAX_WORK_YEAR, MIN_WORK_YEAR, WORK_DATE_FORMAT, compute_pay_period, ensure_supported_date,
    get_invoice_number, get_payment_date, invoice_number_for_payment_date, parse_work_date,
};
pub use totals::{aggregate, line_amount};
