//! Argument capture and invocation mapping for both tools.
//!
//! clap only collects the raw arguments; values such as `-5` or `--foo` have
//! to reach the tools' own validation, and the help contract (exit 0 on
//! `-h`, exit 1 on a wrong argument count) is decided here.

use std::ffi::OsString;
use std::iter;

use clap::Parser;

use crate::{Error, HELP_LONG, HELP_SHORT, Timestamp, UTC_FLAG, Zone};

#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct RawArgs {
    /// Arguments, validated by the tool itself
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    pub args: Vec<String>,
}

impl RawArgs {
    /// Captures the process arguments. Capture failures map to `None` and
    /// are reported as a usage error by the caller.
    pub fn capture() -> Option<Self> {
        Self::from_args(std::env::args_os())
    }

    /// Captures `args` (program name first). Everything after the program
    /// name is data, a literal `--` included.
    pub fn from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next()?;
        Self::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
        .ok()
    }
}

/// What a single run of a tool should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation<T> {
    /// Explicit `-h` / `--help`: usage, exit 0
    Help,
    /// Missing or extra arguments: usage, exit 1
    Usage,
    Run(T),
}

/// Arguments of `utime2htime` before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampArgs {
    pub timestamp: String,
    pub option: Option<String>,
}

impl TimestampArgs {
    /// Validates the timestamp first, then the optional flag.
    ///
    /// # Errors
    /// `InvalidInteger` or `NegativeTimestamp` for the timestamp,
    /// `UnknownOption` for any second argument other than `--utc`.
    pub fn resolve(&self) -> Result<(Timestamp, Zone), Error> {
        let timestamp: Timestamp = self.timestamp.parse()?;
        let zone = match self.option.as_deref() {
            None => Zone::Local,
            Some(UTC_FLAG) => Zone::Utc,
            Some(other) => return Err(Error::UnknownOption(other.to_owned())),
        };
        Ok((timestamp, zone))
    }
}

fn is_help(arg: &str) -> bool {
    arg == HELP_SHORT || arg == HELP_LONG
}

/// `htime2utime "YYYY-MM-DD HH:MM:SS"`
pub fn human_invocation(args: &[String]) -> Invocation<String> {
    match args {
        [flag] if is_help(flag) => Invocation::Help,
        [input] => Invocation::Run(input.clone()),
        _ => Invocation::Usage,
    }
}

/// `utime2htime <timestamp> [--utc]`
pub fn unix_invocation(args: &[String]) -> Invocation<TimestampArgs> {
    match args {
        [first] | [first, _] if is_help(first) => Invocation::Help,
        [timestamp] => Invocation::Run(TimestampArgs {
            timestamp: timestamp.clone(),
            option: None,
        }),
        [timestamp, option] => Invocation::Run(TimestampArgs {
            timestamp: timestamp.clone(),
            option: Some(option.clone()),
        }),
        _ => Invocation::Usage,
    }
}

/// The name the tool was started as, for usage text
pub fn program_name(default: &str) -> String {
    std::env::args_os().next().map_or_else(
        || default.to_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_raw_args_keep_hyphenated_values() {
        let raw = RawArgs::from_args(["utime2htime", "-5", "--foo"]).unwrap();
        assert_eq!(raw.args, args(&["-5", "--foo"]));

        let raw = RawArgs::from_args(["utime2htime", "--help"]).unwrap();
        assert_eq!(raw.args, args(&["--help"]));

        let raw = RawArgs::from_args(["htime2utime"]).unwrap();
        assert!(raw.args.is_empty());

        assert!(RawArgs::from_args(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_raw_args_keep_double_dash() {
        let raw = RawArgs::from_args(["htime2utime", "--", "2024-05-24 15:30:45"]).unwrap();
        assert_eq!(raw.args, args(&["--", "2024-05-24 15:30:45"]));
        assert_eq!(human_invocation(&raw.args), Invocation::Usage);

        let raw = RawArgs::from_args(["utime2htime", "--", "5"]).unwrap();
        assert_eq!(raw.args, args(&["--", "5"]));
        assert_eq!(
            unix_invocation(&raw.args),
            Invocation::Run(TimestampArgs {
                timestamp: "--".to_owned(),
                option: Some("5".to_owned()),
            })
        );

        let raw = RawArgs::from_args(["utime2htime", "--"]).unwrap();
        assert_eq!(raw.args, args(&["--"]));
    }

    #[test]
    fn test_program_name_is_never_empty() {
        assert!(!program_name("utime2htime").is_empty());
    }

    #[test]
    fn test_human_invocation() {
        assert_eq!(human_invocation(&args(&[])), Invocation::Usage);
        assert_eq!(human_invocation(&args(&["-h"])), Invocation::Help);
        assert_eq!(human_invocation(&args(&["--help"])), Invocation::Help);
        assert_eq!(
            human_invocation(&args(&["2024-05-24 15:30:45"])),
            Invocation::Run("2024-05-24 15:30:45".to_owned())
        );
        assert_eq!(
            human_invocation(&args(&["2024-05-24", "15:30:45"])),
            Invocation::Usage
        );
        assert_eq!(human_invocation(&args(&["-h", "x"])), Invocation::Usage);
    }

    #[test]
    fn test_unix_invocation() {
        assert_eq!(unix_invocation(&args(&[])), Invocation::Usage);
        assert_eq!(unix_invocation(&args(&["-h"])), Invocation::Help);
        assert_eq!(unix_invocation(&args(&["--help", "--utc"])), Invocation::Help);
        assert_eq!(unix_invocation(&args(&["1", "2", "3"])), Invocation::Usage);
        assert_eq!(
            unix_invocation(&args(&["0"])),
            Invocation::Run(TimestampArgs {
                timestamp: "0".to_owned(),
                option: None,
            })
        );
        assert_eq!(
            unix_invocation(&args(&["0", "--utc"])),
            Invocation::Run(TimestampArgs {
                timestamp: "0".to_owned(),
                option: Some("--utc".to_owned()),
            })
        );
    }

    #[test]
    fn test_resolve() {
        let resolve = |timestamp: &str, option: Option<&str>| {
            TimestampArgs {
                timestamp: timestamp.to_owned(),
                option: option.map(str::to_owned),
            }
            .resolve()
        };

        assert_eq!(
            resolve("0", None),
            Ok((Timestamp::new(0).unwrap(), Zone::Local))
        );
        assert_eq!(
            resolve("0", Some("--utc")),
            Ok((Timestamp::new(0).unwrap(), Zone::Utc))
        );
        assert_eq!(
            resolve("0", Some("--foo")),
            Err(Error::UnknownOption("--foo".to_owned()))
        );
        assert_eq!(
            resolve("0", Some("--UTC")),
            Err(Error::UnknownOption("--UTC".to_owned()))
        );
        // the timestamp is checked before the flag
        assert_eq!(
            resolve("abc", Some("--foo")),
            Err(Error::InvalidInteger("abc".to_owned()))
        );
        assert_eq!(
            resolve("-5", Some("--utc")),
            Err(Error::NegativeTimestamp(-5))
        );
    }
}
