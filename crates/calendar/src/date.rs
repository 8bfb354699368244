//! Calendar dates without a time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Result};

const FORMAT: &str = "%Y-%m-%d";

/// A calendar date, always taken as the start of its day in UTC.
///
/// The text form is exactly `YYYY-MM-DD`, both when parsing and when
/// formatting, and this is also the JSON representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    /// Build a date from its parts, failing if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                Error::malformed(
                    "date",
                    format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
                )
            })
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

/// Moves the instant to UTC, then drops the time of day.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateOnly {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.with_timezone(&Utc).date_naive())
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DateOnly {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(Error::malformed(
                "date",
                format!("expected YYYY-MM-DD, got {s:?}"),
            ));
        }

        NaiveDate::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|e| Error::malformed("date", format!("{s:?}: {e}")))
    }
}

impl Serialize for DateOnly {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateOnly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Deserializes an optional date where `""` means absent.
pub(crate) mod optional {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<DateOnly>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => s.parse().map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}
