use std::str::FromStr;

use crate::{Error, prelude::*};

/// A non-negative count of seconds since the Unix epoch, as given on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref)]
pub struct Timestamp(i64);

impl Timestamp {
    /// # Errors
    /// Returns `Error::NegativeTimestamp` for values before the epoch.
    pub fn new(seconds: i64) -> Result<Self, Error> {
        if seconds < 0 {
            return Err(Error::NegativeTimestamp(seconds));
        }
        Ok(Self(seconds))
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    /// Parses like `strtol` in base 10: leading whitespace and a sign are
    /// allowed, anything left over is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = s
            .trim_start()
            .parse::<i64>()
            .map_err(|_| Error::InvalidInteger(s.to_owned()))?;
        Self::new(seconds)
    }
}
