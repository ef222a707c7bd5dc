//! Error types for the invoice tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading or writing entries, and building invoices.

use thiserror::Error;

/// The main error type for the invoice tracker.
///
/// All fallible operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use invoice_tracker::error::TrackerError;
///
/// let error = TrackerError::ConfigNotFound {
///     path: "/missing/invoice.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/invoice.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A work date could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// An entry's hours were negative or above the per-entry maximum.
    #[error("Invalid hours '{value}': {message}")]
    InvalidHours {
        /// The hours as submitted.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An entry position was outside the stored collection.
    #[error("Invalid index {index}: {len} entries stored")]
    InvalidIndex {
        /// The requested position.
        index: usize,
        /// The number of entries currently stored.
        len: usize,
    },

    /// No stored entry carries the requested invoice number.
    #[error("Invoice not found: {invoice_number}")]
    InvoiceNotFound {
        /// The invoice number that was requested.
        invoice_number: String,
    },

    /// The entry file could not be read or written.
    #[error("Storage error for '{path}': {message}")]
    StorageError {
        /// The path of the entry file.
        path: String,
        /// A description of the I/O or format failure.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
