use crate::{ConversionError, ParseError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Everything that can end an invocation of either tool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The date/time string is malformed or a field is out of range.
    #[error("Invalid datetime format. Use: YYYY-MM-DD HH:MM:SS ({0})")]
    Parse(#[from] ParseError),

    /// The timestamp argument is not a clean base-10 integer.
    #[error("Invalid Unix timestamp {0:?}. Must be a valid integer.")]
    InvalidInteger(String),

    /// Pre-epoch timestamps are refused.
    #[error("Unix timestamp cannot be negative: {0}")]
    NegativeTimestamp(i64),

    #[error("Unknown option {0:?}. Use --utc for UTC time.")]
    UnknownOption(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl Error {
    /// A follow-up line shown under the error message, if any
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Parse(_) => Some("Example: \"2024-05-24 15:30:45\""),
            Self::InvalidInteger(_) => Some("Example: 1716556245"),
            Self::UnknownOption(_) => Some("Run with -h for help."),
            Self::NegativeTimestamp(_) | Self::Conversion(_) => None,
        }
    }

    /// Process exit status for this error
    pub const fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
