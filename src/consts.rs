/// Minimum accepted year (inclusive)
pub const MIN_YEAR: u16 = 1900;
/// Maximum accepted year (inclusive)
pub const MAX_YEAR: u16 = 2099;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Upper bound for any day of month.
/// Not checked against the real month length (February 30 passes).
pub const MAX_DAY: u8 = 31;

/// Last hour of the day
pub const MAX_HOUR: u8 = 23;
/// Last minute of the hour
pub const MAX_MINUTE: u8 = 59;
/// Last second of the minute (no leap seconds)
pub const MAX_SECOND: u8 = 59;

/// Number of numeric fields in `YYYY-MM-DD HH:MM:SS`
pub const FIELD_COUNT: usize = 6;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';

/// The only accepted input layout, as shown to users
pub const DATETIME_LAYOUT: &str = "YYYY-MM-DD HH:MM:SS";

/// Flag selecting UTC output in `utime2htime`
pub const UTC_FLAG: &str = "--utc";
/// Short help flag
pub const HELP_SHORT: &str = "-h";
/// Long help flag
pub const HELP_LONG: &str = "--help";
