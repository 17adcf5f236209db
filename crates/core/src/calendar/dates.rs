//! Calendar arithmetic for monthly payment sequences.

use chrono::{Months, NaiveDate};

/// Returns `date` shifted forward by exactly `n` calendar months.
///
/// The day of month is preserved where it exists in the target month and
/// clamped to the last day otherwise: 2024-01-31 + 1 month is 2024-02-29.
/// This is the clamping policy of `chrono::Months` and is pinned by tests;
/// the alternative (overflowing into the next month, as JavaScript's
/// `setMonth` does) would let a day-31 schedule drift across months.
///
/// Saturates at the calendar horizon instead of failing; the schedules this
/// engine generates never get anywhere near it.
#[must_use]
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_months(Months::new(n)).unwrap_or(NaiveDate::MAX)
}
