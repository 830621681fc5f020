//! Calendar date/time ⇄ Unix timestamp conversion.
//!
//! Local time follows the host's timezone rules through [`chrono::Local`].

use chrono::{
    DateTime, Datelike, Days, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone,
    Timelike, Utc,
};
use log::{debug, warn};

use crate::{CalendarDateTime, MIN_DAY, prelude::*};

/// How far back to look for the offset in effect before a DST gap.
/// Larger than any real-world transition.
const GAP_LOOKBACK_HOURS: i64 = 3;

/// The zone a calendar date/time is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Zone {
    /// The host's configured timezone
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "UTC")]
    Utc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The calendar cannot place the date/time on the timeline.
    #[error("Failed to convert {0} to Unix time. Check your date/time values.")]
    Unrepresentable(CalendarDateTime),

    /// The timestamp lies outside the calendar's range.
    #[error("Failed to convert Unix timestamp {0}. Value may be out of range.")]
    TimestampOutOfRange(i64),
}

impl CalendarDateTime {
    /// Builds the naive date/time, rolling an oversized day into the
    /// following month(s) so `2024-02-30` becomes `2024-03-01`.
    fn to_naive(self) -> Option<NaiveDateTime> {
        let first = NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(MIN_DAY),
        )?;
        let date = first.checked_add_days(Days::new(u64::from(self.day() - MIN_DAY)))?;
        date.and_hms_opt(
            u32::from(self.hour()),
            u32::from(self.minute()),
            u32::from(self.second()),
        )
    }

    /// Converts to seconds since the epoch, reading the fields in `zone`.
    ///
    /// For [`Zone::Local`] an ambiguous time (DST fall-back) resolves to the
    /// earlier instant, and a skipped time (DST spring-forward) is read with
    /// the offset in effect before the transition.
    ///
    /// # Errors
    /// Returns `ConversionError::Unrepresentable` if the calendar cannot
    /// represent the date/time.
    pub fn to_timestamp(&self, zone: Zone) -> Result<i64, ConversionError> {
        let naive = self
            .to_naive()
            .ok_or(ConversionError::Unrepresentable(*self))?;
        if naive.day() != u32::from(self.day()) {
            debug!("{self} normalized to {naive}");
        }

        let timestamp = match zone {
            Zone::Utc => Some(naive.and_utc().timestamp()),
            Zone::Local => resolve_local(&naive),
        };
        timestamp.ok_or(ConversionError::Unrepresentable(*self))
    }
}

fn resolve_local(naive: &NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.timestamp()),
        LocalResult::Ambiguous(first, second) => {
            let timestamp = earlier_instant(&first, &second);
            debug!(
                "{naive} is ambiguous ({} or {}), using {timestamp}",
                first.timestamp(),
                second.timestamp()
            );
            Some(timestamp)
        }
        LocalResult::None => {
            let before = naive.checked_sub_signed(TimeDelta::hours(GAP_LOOKBACK_HOURS))?;
            let offset = Local.offset_from_local_datetime(&before).earliest()?;
            let timestamp = naive
                .and_utc()
                .timestamp()
                .checked_sub(i64::from(offset.local_minus_utc()))?;
            warn!("{naive} does not exist in the local timezone, read as UTC{offset}");
            Some(timestamp)
        }
    }
}

/// The earlier of two candidate instants, whatever order they come in.
fn earlier_instant<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> i64 {
    a.timestamp().min(b.timestamp())
}

/// A timestamp broken down into calendar fields in a given zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDateTime {
    utc: DateTime<Utc>,
    zone: Zone,
    naive: NaiveDateTime,
}

impl ZonedDateTime {
    /// Converts `timestamp` (seconds since the epoch) into `zone`.
    ///
    /// # Errors
    /// Returns `ConversionError::TimestampOutOfRange` if the calendar cannot
    /// represent the instant.
    pub fn from_timestamp(timestamp: i64, zone: Zone) -> Result<Self, ConversionError> {
        let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)
            .ok_or(ConversionError::TimestampOutOfRange(timestamp))?;
        let naive = match zone {
            Zone::Utc => utc.naive_utc(),
            Zone::Local => Local
                .timestamp_opt(timestamp, 0)
                .single()
                .ok_or(ConversionError::TimestampOutOfRange(timestamp))?
                .naive_local(),
        };
        debug!("{timestamp} in {zone} is {naive}");
        Ok(Self { utc, zone, naive })
    }

    pub fn timestamp(&self) -> i64 {
        self.utc.timestamp()
    }

    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Calendar fields in this value's zone
    #[cfg(test)]
    const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// Seconds the zone is ahead of UTC at this instant
    pub fn offset_seconds(&self) -> i64 {
        (self.naive - self.utc.naive_utc()).num_seconds()
    }

    /// `YYYY-MM-DD HH:MM:SS` in this value's zone
    pub fn format(&self) -> String {
        format_naive(&self.naive)
    }

    /// `YYYY-MM-DD HH:MM:SS` in UTC
    pub fn format_utc(&self) -> String {
        format_naive(&self.utc.naive_utc())
    }

    /// English weekday name in this value's zone, e.g. `Thursday`
    pub fn weekday_name(&self) -> String {
        self.naive.format("%A").to_string()
    }
}

fn format_naive(naive: &NaiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        naive.year(),
        naive.month(),
        naive.day(),
        naive.hour(),
        naive.minute(),
        naive.second()
    )
}
