//! Core data models for the invoice tracker.
//!
//! This module contains the domain models shared by the calculator,
//! the entry store and the HTTP API.

mod entry;
mod invoice;
mod pay_period;

pub use entry::{Entry, EntryHours, MAX_ENTRY_HOURS};
pub use invoice::{InvoiceDocument, InvoiceGroup, InvoiceLineItem, InvoiceTotals};
pub use pay_period::PayPeriod;
