//! Pay period derivation.
//!
//! This module maps a calendar date onto the fixed-length pay period grid
//! anchored at the configured reference start date, and derives the payment
//! date and invoice number for that period.
//!
//! All arithmetic is on [`NaiveDate`] values, so there is no time-of-day or
//! time zone component that could shift a date across a day boundary.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::PayPeriodConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::models::PayPeriod;

/// The format accepted for work dates.
pub const WORK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year a work date may fall in.
pub const MIN_WORK_YEAR: i32 = 1900;

/// Latest year a work date may fall in.
///
/// Period lengths and payment offsets are capped at 365 days each, so every
/// payment date derived from a supported work date is at most 9999-12-31 and
/// invoice numbers keep four-digit years.
pub const MAX_WORK_YEAR: i32 = 9997;

/// Checks that `date` lies within the supported work years.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::ensure_supported_date;
/// use chrono::NaiveDate;
///
/// assert!(ensure_supported_date(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()).is_ok());
/// assert!(ensure_supported_date(NaiveDate::MAX).is_err());
/// ```
pub fn ensure_supported_date(date: NaiveDate) -> TrackerResult<NaiveDate> {
    if (MIN_WORK_YEAR..=MAX_WORK_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(TrackerError::InvalidDate {
            value: date.format(WORK_DATE_FORMAT).to_string(),
            message: format!(
                "year must be between {} and {}",
                MIN_WORK_YEAR, MAX_WORK_YEAR
            ),
        })
    }
}

/// Parses a `YYYY-MM-DD` work date.
///
/// Malformed input is an error; no default date is ever substituted. Dates
/// outside the supported years are rejected as well.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::parse_work_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_work_date("2025-11-09").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()
/// );
/// assert!(parse_work_date("2025-02-30").is_err());
/// assert!(parse_work_date("").is_err());
/// assert!(parse_work_date("+262142-12-31").is_err());
/// ```
pub fn parse_work_date(value: &str) -> TrackerResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), WORK_DATE_FORMAT).map_err(|e| {
        TrackerError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        }
    })?;
    ensure_supported_date(date).map_err(|e| match e {
        TrackerError::InvalidDate { message, .. } => TrackerError::InvalidDate {
            value: value.to_string(),
            message,
        },
        other => other,
    })
}

/// Formats the invoice number for a payment date: `INV-YYYY-MM-DD`.
///
/// The fixed-width format sorts chronologically as a plain string.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::invoice_number_for_payment_date;
/// use chrono::NaiveDate;
///
/// let payment_date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// assert_eq!(invoice_number_for_payment_date(payment_date), "INV-2026-01-02");
/// ```
pub fn invoice_number_for_payment_date(payment_date: NaiveDate) -> String {
    format!("INV-{}", payment_date.format(WORK_DATE_FORMAT))
}

/// Computes the pay period containing `date`.
///
/// The period index is the floor of the day difference to the reference
/// start date divided by the period length, so dates before the reference
/// fall into the preceding blocks rather than rounding towards it.
///
/// # Arguments
///
/// * `date` - The work date
/// * `config` - The pay period grid
///
/// # Returns
///
/// A [`PayPeriod`] with the inclusive start and end dates, the payment date
/// (`period_end + payment_days_after_period_end`) and the invoice number
/// derived from the payment date.
///
/// # Panics
///
/// Never panics for a date within [`MIN_WORK_YEAR`]..=[`MAX_WORK_YEAR`],
/// which is every date [`parse_work_date`], entry requests and the entry
/// file accept. Outside that range the derived dates can overflow
/// `NaiveDate` near its limits.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::compute_pay_period;
/// use invoice_tracker::config::PayPeriodConfig;
/// use chrono::NaiveDate;
///
/// let config = PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 14, 7).unwrap();
///
/// let period = compute_pay_period(NaiveDate::from_ymd_opt(2025, 11, 15).unwrap(), &config);
/// assert_eq!(period.period_start, NaiveDate::from_ymd_opt(2025, 11, 9).unwrap());
/// assert_eq!(period.period_end, NaiveDate::from_ymd_opt(2025, 11, 22).unwrap());
/// assert_eq!(period.payment_date, NaiveDate::from_ymd_opt(2025, 11, 29).unwrap());
/// assert_eq!(period.invoice_number, "INV-2025-11-29");
///
/// // The day before the reference start belongs to the preceding period
/// let previous = compute_pay_period(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(), &config);
/// assert_eq!(previous.period_start, NaiveDate::from_ymd_opt(2025, 10, 26).unwrap());
/// assert_eq!(previous.period_end, NaiveDate::from_ymd_opt(2025, 11, 8).unwrap());
/// ```
pub fn compute_pay_period(date: NaiveDate, config: &PayPeriodConfig) -> PayPeriod {
    let reference_start = config.reference_start_date();
    let length = i64::from(config.period_length_days());

    let diff_days = (date - reference_start).num_days();
    let period_offset = diff_days.div_euclid(length);

    let period_start = reference_start + Duration::days(period_offset * length);
    let period_end = period_start + Duration::days(length - 1);
    let payment_date =
        period_end + Duration::days(i64::from(config.payment_days_after_period_end()));

    PayPeriod {
        period_start,
        period_end,
        payment_date,
        invoice_number: invoice_number_for_payment_date(payment_date),
    }
}

/// Returns the invoice number for the pay period containing `date`.
pub fn get_invoice_number(date: NaiveDate, config: &PayPeriodConfig) -> String {
    compute_pay_period(date, config).invoice_number
}

/// Returns the payment date for the pay period containing `date`.
pub fn get_payment_date(date: NaiveDate, config: &PayPeriodConfig) -> NaiveDate {
    compute_pay_period(date, config).payment_date
}
