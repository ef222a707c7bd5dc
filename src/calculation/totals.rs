//! Hours and amount aggregation.

use rust_decimal::Decimal;

use crate::models::{Entry, InvoiceTotals};

/// Sums hours across `entries` and prices them at `hourly_rate`.
///
/// Missing, non-numeric or out-of-range hours count as zero rather than
/// failing the whole aggregation. Billable hours are capped per entry and the
/// rate is capped at load, so the sum and product stay within `Decimal`.
///
/// # Example
///
/// ```
/// use invoice_tracker::calculation::aggregate;
/// use invoice_tracker::models::{Entry, EntryHours};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
/// let mut bad = Entry::new("b", "", date, Decimal::ZERO);
/// bad.hours = Some(EntryHours::Text("bad".to_string()));
///
/// let entries = vec![
///     Entry::new("a", "", date, Decimal::new(25, 1)),
///     bad,
///     Entry::new("c", "", date, Decimal::new(3, 0)),
/// ];
///
/// let totals = aggregate(&entries, Decimal::new(30, 0));
/// assert_eq!(totals.total_hours, Decimal::new(55, 1));
/// assert_eq!(totals.total_amount, Decimal::new(165, 0));
/// ```
pub fn aggregate(entries: &[Entry], hourly_rate: Decimal) -> InvoiceTotals {
    let total_hours: Decimal = entries.iter().map(Entry::hours_or_zero).sum();

    InvoiceTotals {
        total_hours,
        total_amount: total_hours * hourly_rate,
    }
}

/// The billable amount of a single entry.
pub fn line_amount(entry: &Entry, hourly_rate: Decimal) -> Decimal {
    entry.hours_or_zero() * hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryHours;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(hours: Option<EntryHours>) -> Entry {
        let mut entry = Entry::new("t", "", NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), dec("0"));
        entry.hours = hours;
        entry
    }

    #[test]
    fn test_aggregate_skips_non_numeric_hours() {
        let entries = vec![
            entry(Some(EntryHours::Number(dec("2.5")))),
            entry(Some(EntryHours::Text("bad".to_string()))),
            entry(Some(EntryHours::Number(dec("3")))),
        ];
        let totals = aggregate(&entries, dec("30"));
        assert_eq!(totals.total_hours, dec("5.5"));
        assert_eq!(totals.total_amount, dec("165"));
    }

    #[test]
    fn test_aggregate_counts_missing_hours_as_zero() {
        let entries = vec![entry(None), entry(Some(EntryHours::Number(dec("1.25"))))];
        let totals = aggregate(&entries, dec("40"));
        assert_eq!(totals.total_hours, dec("1.25"));
        assert_eq!(totals.total_amount, dec("50"));
    }

    #[test]
    fn test_aggregate_parses_numeric_text() {
        let entries = vec![entry(Some(EntryHours::Text("4".to_string())))];
        assert_eq!(aggregate(&entries, dec("30")).total_hours, dec("4"));
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate(&[], dec("30")), InvoiceTotals::default());
    }

    #[test]
    fn test_aggregate_keeps_decimal_precision() {
        // 0.1 + 0.2 must be exactly 0.3
        let entries = vec![
            entry(Some(EntryHours::Number(dec("0.1")))),
            entry(Some(EntryHours::Number(dec("0.2")))),
        ];
        assert_eq!(aggregate(&entries, dec("30")).total_hours, dec("0.3"));
    }

    #[test]
    fn test_aggregate_ignores_out_of_range_hours() {
        let entries = vec![
            entry(EntryHours::from_cell("10000000000000000000000000000")),
            entry(Some(EntryHours::Number(dec("-4")))),
            entry(Some(EntryHours::Number(dec("2")))),
        ];
        let totals = aggregate(&entries, dec("30"));
        assert_eq!(totals.total_hours, dec("2"));
        assert_eq!(totals.total_amount, dec("60"));
        assert_eq!(line_amount(&entries[0], dec("30")), Decimal::ZERO);
    }

    #[test]
    fn test_line_amount() {
        let e = entry(Some(EntryHours::Number(dec("2.5"))));
        assert_eq!(line_amount(&e, dec("30")), dec("75"));
        assert_eq!(line_amount(&entry(None), dec("30")), Decimal::ZERO);
    }
}
