//! Conversion between `YYYY-MM-DD HH:MM:SS` date/time strings and Unix timestamps.
//!
//! The library backs two small tools: `htime2utime` (local date/time to
//! timestamp) and `utime2htime` (timestamp to local or UTC date/time).

mod consts;
mod prelude;
mod types;

pub mod cli;
pub mod convert;
pub mod error;
pub mod logging;
pub mod output;
pub mod timestamp;

pub use consts::*;
pub use convert::{ConversionError, Zone, ZonedDateTime};
pub use error::{EXIT_FAILURE, EXIT_SUCCESS, Error};
pub use timestamp::Timestamp;
pub use types::{Day, Field, Hour, Minute, Month, Second, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date/time as written by the user, without a zone.
///
/// Every field is range checked. The day is only checked against 31, so
/// values such as February 30 are representable; the calendar resolves them
/// when converting (see [`CalendarDateTime::to_timestamp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
    "year.get()",
    "month.get()",
    "day.get()",
    "hour.get()",
    "minute.get()",
    "second.get()"
)]
pub struct CalendarDateTime {
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(
        fmt = "{:?} has {} of {} fields of {}",
        input,
        fields,
        FIELD_COUNT,
        DATETIME_LAYOUT
    )]
    InvalidFormat { input: String, fields: usize },
    #[display(fmt = "{field} {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl std::error::Error for ParseError {}

impl CalendarDateTime {
    /// Creates a date/time from already validated components
    #[cfg(test)]
    const fn new(
        year: Year,
        month: Month,
        day: Day,
        hour: Hour,
        minute: Minute,
        second: Second,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Validates raw field values in `YYYY MM DD HH MM SS` order
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` for the first field outside its bounds.
    pub fn from_fields(fields: [i64; FIELD_COUNT]) -> Result<Self, ParseError> {
        let [year, month, day, hour, minute, second] = fields;
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day)?,
            hour: Hour::new(hour)?,
            minute: Minute::new(minute)?,
            second: Second::new(second)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn hour(&self) -> u8 {
        self.hour.get()
    }

    pub const fn minute(&self) -> u8 {
        self.minute.get()
    }

    pub const fn second(&self) -> u8 {
        self.second.get()
    }

    /// Converts to `(year, month, day, hour, minute, second)`
    pub const fn to_fields(&self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        )
    }
}

/// Scans the integer fields of `YYYY-MM-DD HH:MM:SS` the way a C
/// `"%d-%d-%d %d:%d:%d"` conversion does: integers may carry leading
/// whitespace and a sign, `-` and `:` must match exactly, the blank matches
/// any run of whitespace (including none) and anything after the last field
/// is ignored.
struct FieldScanner<'a> {
    rest: &'a str,
}

impl<'a> FieldScanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Consumes a signed decimal integer, saturating on overflow
    fn integer(&mut self) -> Option<i64> {
        let trimmed = self.rest.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if digits == 0 {
            return None;
        }

        let magnitude = unsigned[..digits].bytes().fold(0_i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
        self.rest = &unsigned[digits..];
        Some(if negative { -magnitude } else { magnitude })
    }

    fn literal(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Scans all six fields, returning how many were read on failure
    fn scan(mut self) -> Result<[i64; FIELD_COUNT], usize> {
        let mut fields = [0_i64; FIELD_COUNT];
        for (index, slot) in fields.iter_mut().enumerate() {
            let separated = match index {
                0 => true,
                1 | 2 => self.literal(DATE_SEPARATOR),
                3 => {
                    self.whitespace();
                    true
                }
                _ => self.literal(TIME_SEPARATOR),
            };
            if !separated {
                return Err(index);
            }
            *slot = self.integer().ok_or(index)?;
        }
        Ok(fields)
    }
}

impl FromStr for CalendarDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = FieldScanner::new(s)
            .scan()
            .map_err(|fields| ParseError::InvalidFormat {
                input: s.to_owned(),
                fields,
            })?;
        log::debug!("scanned {fields:?} from {s:?}");
        Self::from_fields(fields)
    }
}

impl serde::Serialize for CalendarDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
