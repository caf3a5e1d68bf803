//! The fixed set of look-back ranges offered for historical wind data, and the archive
//! date window each one resolves to.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown historical range '{0}', expected one of: 10 days, 1 month, 3 months, 6 months, 10 months")]
pub struct UnknownHistoricalRange(pub String);

/// How far back a historical (archive) request reaches.
///
/// Only these five ranges are offered. Each maps to a fixed number of days:
///
/// | Variant       | Label       | Days |
/// |---------------|-------------|------|
/// | `TenDays`     | `10 days`   | 10   |
/// | `OneMonth`    | `1 month`   | 30   |
/// | `ThreeMonths` | `3 months`  | 90   |
/// | `SixMonths`   | `6 months`  | 180  |
/// | `TenMonths`   | `10 months` | 300  |
///
/// # Examples
///
/// ```rust
/// use windscope::HistoricalRange;
///
/// let range: HistoricalRange = "3 months".parse().unwrap();
/// assert_eq!(range, HistoricalRange::ThreeMonths);
/// assert_eq!(range.days(), 90);
/// assert_eq!(HistoricalRange::try_from(300u32).unwrap(), HistoricalRange::TenMonths);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoricalRange {
    TenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TenMonths,
}

impl HistoricalRange {
    pub const ALL: [HistoricalRange; 5] = [
        HistoricalRange::TenDays,
        HistoricalRange::OneMonth,
        HistoricalRange::ThreeMonths,
        HistoricalRange::SixMonths,
        HistoricalRange::TenMonths,
    ];

    pub fn days(&self) -> u32 {
        match self {
            HistoricalRange::TenDays => 10,
            HistoricalRange::OneMonth => 30,
            HistoricalRange::ThreeMonths => 90,
            HistoricalRange::SixMonths => 180,
            HistoricalRange::TenMonths => 300,
        }
    }

    /// The human readable label shown in range selectors.
    pub fn label(&self) -> &'static str {
        match self {
            HistoricalRange::TenDays => "10 days",
            HistoricalRange::OneMonth => "1 month",
            HistoricalRange::ThreeMonths => "3 months",
            HistoricalRange::SixMonths => "6 months",
            HistoricalRange::TenMonths => "10 months",
        }
    }
}

impl fmt::Display for HistoricalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HistoricalRange {
    type Err = UnknownHistoricalRange;

    /// Parses either a label (`"1 month"`, case-insensitive) or a bare day count (`"30"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(days) = trimmed.parse::<u32>() {
            return HistoricalRange::try_from(days);
        }
        Self::ALL
            .into_iter()
            .find(|range| range.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownHistoricalRange(s.to_string()))
    }
}

impl TryFrom<u32> for HistoricalRange {
    type Error = UnknownHistoricalRange;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|range| range.days() == days)
            .ok_or_else(|| UnknownHistoricalRange(days.to_string()))
    }
}

/// A closed calendar date range `start_date..=end_date` for an archive request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ArchiveWindow {
    /// The window ending on `end_date` and starting `range.days()` days earlier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use windscope::{ArchiveWindow, HistoricalRange};
    ///
    /// let end = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    /// let window = ArchiveWindow::ending(HistoricalRange::TenDays, end);
    /// assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2024, 2, 24).unwrap());
    /// assert_eq!(window.span_days(), 10);
    /// ```
    pub fn ending(range: HistoricalRange, end_date: NaiveDate) -> Self {
        Self {
            start_date: end_date - Duration::days(i64::from(range.days())),
            end_date,
        }
    }

    /// The window ending on today's calendar date in UTC.
    pub fn ending_today(range: HistoricalRange) -> Self {
        Self::ending(range, Utc::now().date_naive())
    }

    /// Number of days between start and end date.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_and_labels() {
        let days: Vec<u32> = HistoricalRange::ALL.iter().map(|r| r.days()).collect();
        assert_eq!(days, [10, 30, 90, 180, 300]);
        for range in HistoricalRange::ALL {
            assert_eq!(range.label().parse::<HistoricalRange>(), Ok(range));
            assert_eq!(range.days().to_string().parse::<HistoricalRange>(), Ok(range));
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_whitespace() {
        assert_eq!(
            " 10 Months ".parse::<HistoricalRange>(),
            Ok(HistoricalRange::TenMonths)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("2 weeks".parse::<HistoricalRange>().is_err());
        assert!(HistoricalRange::try_from(14u32).is_err());
    }

    #[test]
    fn test_window_span_matches_range_for_any_date() {
        let mut date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        // Cross a year boundary, a leap day and month ends
        for _ in 0..500 {
            for range in HistoricalRange::ALL {
                let window = ArchiveWindow::ending(range, date);
                assert_eq!(window.end_date, date);
                assert_eq!(window.span_days(), i64::from(range.days()));
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_window_ending_today() {
        let window = ArchiveWindow::ending_today(HistoricalRange::TenDays);
        assert_eq!(window.span_days(), 10);
        assert!(window.end_date <= Utc::now().date_naive());
    }
}
