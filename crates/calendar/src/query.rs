//! Day, week and month bucketing for event queries.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::{DateOnly, Error, Result};

/// The size of the bucket a query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Same calendar year and ordinal day.
    Day,
    /// Same ISO-8601 week-numbering year and week.
    Week,
    /// Same calendar year and month.
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Week, Granularity::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }

    /// Whether `a` and `b` fall in the same bucket.
    pub fn same_bucket(&self, a: DateOnly, b: DateOnly) -> bool {
        let (a, b) = (a.naive(), b.naive());
        match self {
            Granularity::Day => a.year() == b.year() && a.ordinal() == b.ordinal(),
            Granularity::Week => a.iso_week() == b.iso_week(),
            Granularity::Month => a.year() == b.year() && a.month() == b.month(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::malformed("granularity", format!("unknown granularity {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> DateOnly {
        s.parse().unwrap()
    }

    #[test]
    fn test_day() {
        assert!(Granularity::Day.same_bucket(d("2025-10-04"), d("2025-10-04")));
        assert!(!Granularity::Day.same_bucket(d("2025-10-04"), d("2025-10-05")));
        assert!(!Granularity::Day.same_bucket(d("2025-10-04"), d("2024-10-04")));
    }

    #[test]
    fn test_week_spans_monday_to_sunday() {
        // 2025-09-29 is a Monday, 2025-10-05 a Sunday.
        assert!(Granularity::Week.same_bucket(d("2025-09-29"), d("2025-10-05")));
        assert!(!Granularity::Week.same_bucket(d("2025-10-05"), d("2025-10-06")));
        assert!(!Granularity::Week.same_bucket(d("2025-09-28"), d("2025-09-29")));
    }

    #[test]
    fn test_week_crosses_year_boundary() {
        // 2024-12-30 belongs to ISO week 1 of 2025.
        assert!(Granularity::Week.same_bucket(d("2024-12-30"), d("2025-01-02")));
        // 2021-01-03 belongs to ISO week 53 of 2020.
        assert!(Granularity::Week.same_bucket(d("2021-01-03"), d("2020-12-31")));
        assert!(!Granularity::Week.same_bucket(d("2021-01-03"), d("2021-01-04")));
    }

    #[test]
    fn test_month() {
        assert!(Granularity::Month.same_bucket(d("2025-10-01"), d("2025-10-31")));
        assert!(!Granularity::Month.same_bucket(d("2025-10-31"), d("2025-11-01")));
        assert!(!Granularity::Month.same_bucket(d("2025-10-01"), d("2024-10-01")));
    }

    #[test]
    fn test_parse() {
        assert_eq!("day".parse::<Granularity>().unwrap(), Granularity::Day);
        assert_eq!("Week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("MONTH".parse::<Granularity>().unwrap(), Granularity::Month);
        assert!(matches!(
            "year".parse::<Granularity>(),
            Err(Error::MalformedInput { field: "granularity", .. })
        ));
    }
}
