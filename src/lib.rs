//! Contractor time tracking with biweekly pay periods and invoice grouping
//!
//! This crate records dated work entries, derives the pay period, payment
//! date and invoice number for each work date from a fixed reference
//! schedule, and assembles per-invoice summaries for billing a client.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use invoice_tracker::calculation::get_invoice_number;
//! use invoice_tracker::config::PayPeriodConfig;
//!
//! let schedule =
//!     PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 14, 7).unwrap();
//! let work_date = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
//!
//! assert_eq!(get_invoice_number(work_date, &schedule), "INV-2025-11-29");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
