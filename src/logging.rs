//! Diagnostic logging to stderr.
//!
//! Off the result path: the tools' own output never goes through `log`.

use chrono::Local;
use log::LevelFilter;

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "HTIME_LOG";

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Level named by `value`, case-insensitively; unknown or missing values
/// fall back to [`DEFAULT_LEVEL`].
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the stderr dispatcher at the level from [`LOG_ENV`].
///
/// # Errors
/// Returns an error if a logger is already installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
