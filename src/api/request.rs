//! Request types for the invoice tracker API.
//!
//! This module defines the JSON body accepted when creating or replacing an
//! entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::ensure_supported_date;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Entry, EntryHours, MAX_ENTRY_HOURS};

/// Request body for `POST /api/entries` and `PUT /api/entries/:index`.
///
/// `Invoice` is accepted for compatibility with clients that echo it back,
/// but the server always recomputes it from `Date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntryRequest {
    /// Short task name.
    pub task: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// The work date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Hours worked.
    #[serde(default)]
    pub hours: Option<EntryHours>,
    /// Client-side invoice number; ignored.
    #[serde(default)]
    pub invoice: Option<String>,
}

impl EntryRequest {
    /// Validates the request before it is stored.
    ///
    /// # Validation Rules
    ///
    /// - `Date` must fall within the supported work years
    /// - Numeric `Hours` must be between 0 and [`MAX_ENTRY_HOURS`]
    /// - Non-numeric `Hours` are accepted and bill as zero
    pub fn validate(&self) -> TrackerResult<()> {
        ensure_supported_date(self.date)?;

        if let Some(hours) = &self.hours {
            if hours.value().is_some() && hours.billable().is_none() {
                return Err(TrackerError::InvalidHours {
                    value: hours.to_string(),
                    message: format!("must be between 0 and {}", MAX_ENTRY_HOURS),
                });
            }
        }
        Ok(())
    }
}

impl From<EntryRequest> for Entry {
    fn from(req: EntryRequest) -> Self {
        Entry {
            task: req.task,
            description: req.description,
            date: req.date,
            hours: req.hours,
            invoice: req.invoice,
        }
    }
}
