//! Time entry model.
//!
//! This module defines the [`Entry`] record that the persistence layer stores
//! and the API exchanges. Field names on the wire are `Task`, `Description`,
//! `Date`, `Hours` and `Invoice`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Most hours a single entry may record.
pub const MAX_ENTRY_HOURS: u32 = 24;

/// The hours recorded on an entry.
///
/// Stored files may hold arbitrary text in the hours column, so the value is
/// kept as typed rather than rejected. Aggregation treats anything that is
/// not a number between 0 and [`MAX_ENTRY_HOURS`] as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryHours {
    /// A numeric hours value.
    Number(#[serde(with = "rust_decimal::serde::float")] Decimal),
    /// Text that did not parse as a number.
    Text(String),
}

impl EntryHours {
    /// Returns the numeric value, if there is one.
    ///
    /// Text holding a number (e.g. `"3"`) still counts as numeric.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::models::EntryHours;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(EntryHours::Number(Decimal::new(25, 1)).value(), Some(Decimal::new(25, 1)));
    /// assert_eq!(EntryHours::Text(" 3 ".to_string()).value(), Some(Decimal::new(3, 0)));
    /// assert_eq!(EntryHours::Text("bad".to_string()).value(), None);
    /// ```
    pub fn value(&self) -> Option<Decimal> {
        match self {
            EntryHours::Number(hours) => Some(*hours),
            EntryHours::Text(text) => text.trim().parse::<Decimal>().ok(),
        }
    }

    /// Returns the numeric value when it lies between 0 and
    /// [`MAX_ENTRY_HOURS`] inclusive.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::models::EntryHours;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(EntryHours::Number(Decimal::new(8, 0)).billable(), Some(Decimal::new(8, 0)));
    /// assert_eq!(EntryHours::Number(Decimal::new(-1, 0)).billable(), None);
    /// assert_eq!(EntryHours::Number(Decimal::new(25, 0)).billable(), None);
    /// ```
    pub fn billable(&self) -> Option<Decimal> {
        self.value()
            .filter(|hours| *hours >= Decimal::ZERO && *hours <= Decimal::from(MAX_ENTRY_HOURS))
    }

    /// Parses a raw cell into hours, returning `None` for an empty cell.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<Decimal>() {
            Ok(hours) => EntryHours::Number(hours),
            Err(_) => EntryHours::Text(cell.to_string()),
        })
    }
}

impl From<Decimal> for EntryHours {
    fn from(hours: Decimal) -> Self {
        EntryHours::Number(hours)
    }
}

impl std::fmt::Display for EntryHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryHours::Number(hours) => write!(f, "{}", hours.normalize()),
            EntryHours::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A single recorded unit of work.
///
/// # Example
///
/// ```
/// use invoice_tracker::models::Entry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = Entry::new(
///     "Workshop",
///     "Set up the kiln room",
///     NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(),
///     Decimal::new(25, 1),
/// );
/// assert_eq!(entry.hours_or_zero(), Decimal::new(25, 1));
/// assert!(entry.invoice.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    /// Short task name.
    pub task: String,
    /// Free-form description; may be empty.
    #[serde(default)]
    pub description: String,
    /// The calendar date the work was done.
    pub date: NaiveDate,
    /// Hours worked; absent on some legacy rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<EntryHours>,
    /// Invoice number this entry is billed under; absent on legacy rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
}

impl Entry {
    /// Creates an entry with numeric hours and no invoice stamp.
    pub fn new(
        task: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
    ) -> Self {
        Self {
            task: task.into(),
            description: description.into(),
            date,
            hours: Some(EntryHours::Number(hours)),
            invoice: None,
        }
    }

    /// Returns this entry carrying the given invoice number.
    pub fn with_invoice(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice = Some(invoice_number.into());
        self
    }

    /// Hours as a number, counting missing, non-numeric or out-of-range
    /// hours as zero.
    pub fn hours_or_zero(&self) -> Decimal {
        self.hours
            .as_ref()
            .and_then(EntryHours::billable)
            .unwrap_or(Decimal::ZERO)
    }

    /// The invoice number, if present and non-empty.
    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice.as_deref().filter(|invoice| !invoice.is_empty())
    }
}
