//! Configuration types for the invoice tracker.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};

/// Longest allowed pay period, in days.
pub const MAX_PERIOD_LENGTH_DAYS: u32 = 365;

/// Longest allowed gap between a period's end and its payment date, in days.
pub const MAX_PAYMENT_DAYS_AFTER_PERIOD_END: u32 = 365;

/// Highest allowed hourly rate.
pub const MAX_HOURLY_RATE: u32 = 1_000_000;

/// The contractor issuing invoices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractorDetails {
    /// The contractor's display name.
    pub name: String,
    /// Contact email printed in the "from" block.
    pub email: String,
    /// Email address payments are sent to.
    pub payment_email: String,
}

/// The client being invoiced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientDetails {
    /// The client's name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
}

impl ClientDetails {
    /// Returns the single-line address used on invoices.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::config::ClientDetails;
    ///
    /// let client = ClientDetails {
    ///     name: "Arts Factory Society".to_string(),
    ///     address: "281 Industrial Ave".to_string(),
    ///     city: "Vancouver".to_string(),
    ///     province: "BC".to_string(),
    ///     postal_code: "V6A 2P3".to_string(),
    ///     country: "Canada".to_string(),
    /// };
    /// assert_eq!(client.full_address(), "281 Industrial Ave, Vancouver, BC V6A 2P3");
    /// ```
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.province, self.postal_code
        )
    }
}

/// Billing rate and currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentConfig {
    /// Amount charged per hour worked.
    pub hourly_rate: Decimal,
    /// ISO currency code appended to amounts (e.g., "CAD").
    pub currency: String,
    /// Currency symbol for display (e.g., "$").
    pub currency_symbol: String,
}

impl PaymentConfig {
    /// Formats an amount with two decimals followed by the currency code.
    ///
    /// # Example
    ///
    /// ```
    /// use invoice_tracker::config::PaymentConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let payment = PaymentConfig {
    ///     hourly_rate: Decimal::new(30, 0),
    ///     currency: "CAD".to_string(),
    ///     currency_symbol: "$".to_string(),
    /// };
    /// assert_eq!(payment.format_currency(Decimal::new(1650, 1)), "165.00 CAD");
    /// ```
    pub fn format_currency(&self, amount: Decimal) -> String {
        format!("{:.2} {}", amount.round_dp(2), self.currency)
    }
}

/// Raw pay period settings as they appear in YAML, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawPayPeriodConfig {
    reference_start_date: NaiveDate,
    period_length_days: u32,
    payment_days_after_period_end: u32,
}

/// Parameters anchoring the biweekly pay period grid.
///
/// A `PayPeriodConfig` always has a period length between 1 and
/// [`MAX_PERIOD_LENGTH_DAYS`] and a payment offset of at most
/// [`MAX_PAYMENT_DAYS_AFTER_PERIOD_END`]; both the constructor and
/// deserialization reject anything else.
///
/// # Example
///
/// ```
/// use invoice_tracker::config::PayPeriodConfig;
/// use chrono::NaiveDate;
///
/// let config = PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 14, 7).unwrap();
/// assert_eq!(config.period_length_days(), 14);
///
/// assert!(PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 0, 7).is_err());
/// assert!(PayPeriodConfig::new(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), 4_000_000_000, 7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPayPeriodConfig")]
pub struct PayPeriodConfig {
    reference_start_date: NaiveDate,
    period_length_days: u32,
    payment_days_after_period_end: u32,
}

impl PayPeriodConfig {
    /// Creates a validated pay period configuration.
    ///
    /// Returns `InvalidConfig` when `period_length_days` is zero or either
    /// day count exceeds its cap.
    pub fn new(
        reference_start_date: NaiveDate,
        period_length_days: u32,
        payment_days_after_period_end: u32,
    ) -> TrackerResult<Self> {
        if period_length_days == 0 {
            return Err(TrackerError::InvalidConfig {
                field: "pay_period.period_length_days".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if period_length_days > MAX_PERIOD_LENGTH_DAYS {
            return Err(TrackerError::InvalidConfig {
                field: "pay_period.period_length_days".to_string(),
                message: format!(
                    "must be at most {}, got {}",
                    MAX_PERIOD_LENGTH_DAYS, period_length_days
                ),
            });
        }
        if payment_days_after_period_end > MAX_PAYMENT_DAYS_AFTER_PERIOD_END {
            return Err(TrackerError::InvalidConfig {
                field: "pay_period.payment_days_after_period_end".to_string(),
                message: format!(
                    "must be at most {}, got {}",
                    MAX_PAYMENT_DAYS_AFTER_PERIOD_END, payment_days_after_period_end
                ),
            });
        }

        Ok(Self {
            reference_start_date,
            period_length_days,
            payment_days_after_period_end,
        })
    }

    /// The first day of the period numbered zero.
    pub fn reference_start_date(&self) -> NaiveDate {
        self.reference_start_date
    }

    /// Length of every pay period in days.
    pub fn period_length_days(&self) -> u32 {
        self.period_length_days
    }

    /// Days between the last day of a period and its payment date.
    pub fn payment_days_after_period_end(&self) -> u32 {
        self.payment_days_after_period_end
    }
}

impl TryFrom<RawPayPeriodConfig> for PayPeriodConfig {
    type Error = TrackerError;

    fn try_from(raw: RawPayPeriodConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.reference_start_date,
            raw.period_length_days,
            raw.payment_days_after_period_end,
        )
    }
}

/// The complete invoice configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvoiceConfig {
    /// Who issues the invoices.
    pub contractor: ContractorDetails,
    /// Who receives the invoices.
    pub client: ClientDetails,
    /// Rate and currency.
    pub payment: PaymentConfig,
    /// Pay period grid.
    pub pay_period: PayPeriodConfig,
}

impl InvoiceConfig {
    /// Checks constraints that serde cannot express.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.payment.hourly_rate <= Decimal::ZERO {
            return Err(TrackerError::InvalidConfig {
                field: "payment.hourly_rate".to_string(),
                message: format!("must be positive, got {}", self.payment.hourly_rate),
            });
        }
        if self.payment.hourly_rate > Decimal::from(MAX_HOURLY_RATE) {
            return Err(TrackerError::InvalidConfig {
                field: "payment.hourly_rate".to_string(),
                message: format!(
                    "must be at most {}, got {}",
                    MAX_HOURLY_RATE, self.payment.hourly_rate
                ),
            });
        }
        Ok(())
    }

    /// Formats an amount in the configured currency.
    pub fn format_currency(&self, amount: Decimal) -> String {
        self.payment.format_currency(amount)
    }

    /// Returns the client's single-line address.
    pub fn client_full_address(&self) -> String {
        self.client.full_address()
    }
}
