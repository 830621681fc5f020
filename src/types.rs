use crate::consts::{
    MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR,
};
use crate::{ParseError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names a component of a calendar date/time, used in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl Field {
    /// Fields in the order they appear in `YYYY-MM-DD HH:MM:SS`
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Inclusive bounds accepted for this field
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Self::Year => (MIN_YEAR as i64, MAX_YEAR as i64),
            Self::Month => (MIN_MONTH as i64, MAX_MONTH as i64),
            Self::Day => (MIN_DAY as i64, MAX_DAY as i64),
            Self::Hour => (0, MAX_HOUR as i64),
            Self::Minute => (0, MAX_MINUTE as i64),
            Self::Second => (0, MAX_SECOND as i64),
        }
    }

    /// Checks `value` against [`Field::bounds`]
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` naming this field.
    pub fn check(self, value: i64) -> Result<i64, ParseError> {
        let (min, max) = self.bounds();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(ParseError::OutOfRange {
                field: self,
                value,
                min,
                max,
            })
        }
    }
}

/// Declares a bounded calendar component backed by `$repr`.
///
/// The generated `new` takes an `i64` so scanned values of any magnitude can
/// be range checked before narrowing.
macro_rules! bounded_component {
    ($(#[$meta:meta])* $name:ident($repr:ty), $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name($repr);

        impl $name {
            /// Creates a new value, validating it against the field bounds
            ///
            /// # Errors
            /// Returns `ParseError::OutOfRange` if the value is outside the bounds.
            pub fn new(value: i64) -> Result<Self, ParseError> {
                let checked = $field.check(value)?;
                <$repr>::try_from(checked)
                    .map(Self)
                    .map_err(|_| ParseError::OutOfRange {
                        field: $field,
                        value,
                        min: $field.bounds().0,
                        max: $field.bounds().1,
                    })
            }

            /// Returns the raw value
            #[inline]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ParseError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                Self::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_component!(
    /// A year in `MIN_YEAR..=MAX_YEAR` (1900..=2099)
    Year(u16),
    Field::Year
);

bounded_component!(
    /// A month in `1..=12`
    Month(u8),
    Field::Month
);

bounded_component!(
    /// A day of month in `1..=31`.
    /// Not checked against the length of any particular month.
    Day(u8),
    Field::Day
);

bounded_component!(
    /// An hour in `0..=23`
    Hour(u8),
    Field::Hour
);

bounded_component!(
    /// A minute in `0..=59`
    Minute(u8),
    Field::Minute
);

bounded_component!(
    /// A second in `0..=59` (no leap seconds)
    Second(u8),
    Field::Second
);
