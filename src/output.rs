//! Terminal rendering for both tools: usage banners, result blocks and
//! error lines. Colour is only emitted when the target is a terminal.

use std::io::{self, IsTerminal, Write};

use crate::{DATETIME_LAYOUT, Error, UTC_FLAG, Zone, ZonedDateTime};

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[37m";
const BRIGHT_RED: &str = "\x1b[91m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_YELLOW: &str = "\x1b[93m";
const BRIGHT_CYAN: &str = "\x1b[96m";

/// Label column width (left-aligned) in result blocks.
const LABEL_WIDTH: usize = 12;
/// Inner width of the header box.
const HEADER_WIDTH: usize = 42;

const RESULT_TOP: &str = "┌─ Conversion Result ─────────────────────┐";
const RESULT_BOTTOM: &str = "└─────────────────────────────────────────┘";

/// Wraps text in ANSI codes when colour is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub const fn plain() -> Self {
        Self::new(false)
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    fn heading(self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{BLUE}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    fn label(self, text: &str) -> String {
        self.paint(BOLD, &format!("{text:<LABEL_WIDTH$}"))
    }
}

fn write_header(out: &mut dyn Write, title: &str, painter: Painter) -> io::Result<()> {
    let rule = "─".repeat(HEADER_WIDTH);
    let bar = painter.paint(BRIGHT_CYAN, "│");
    writeln!(out)?;
    writeln!(out, "{}", painter.paint(BRIGHT_CYAN, &format!("┌{rule}┐")))?;
    writeln!(
        out,
        "{bar}{}{bar}",
        painter.paint(BRIGHT_YELLOW, &format!("{title:^HEADER_WIDTH$}"))
    )?;
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    writeln!(
        out,
        "{bar}{}{bar}",
        painter.paint(DIM, &format!("{version:^HEADER_WIDTH$}"))
    )?;
    writeln!(out, "{}", painter.paint(BRIGHT_CYAN, &format!("└{rule}┘")))?;
    writeln!(out)
}

fn write_result_open(out: &mut dyn Write, painter: Painter) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", painter.paint(BRIGHT_GREEN, RESULT_TOP))?;
    writeln!(out, "{}", painter.paint(BRIGHT_GREEN, "│"))
}

fn write_result_close(out: &mut dyn Write, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.paint(BRIGHT_GREEN, "│"))?;
    writeln!(out, "{}", painter.paint(BRIGHT_GREEN, RESULT_BOTTOM))?;
    writeln!(out)
}

fn write_row(out: &mut dyn Write, label: &str, value: &str, painter: Painter) -> io::Result<()> {
    writeln!(
        out,
        "{} {}{}",
        painter.paint(BRIGHT_GREEN, "│"),
        painter.label(label),
        value
    )
}

/// Usage banner for `htime2utime`
pub fn write_human_usage(out: &mut dyn Write, program: &str, painter: Painter) -> io::Result<()> {
    write_header(out, "Human Time to Unix Timestamp", painter)?;

    writeln!(out, "{}", painter.heading("USAGE:"))?;
    writeln!(
        out,
        "  {program} {}",
        painter.paint(YELLOW, &format!("\"{DATETIME_LAYOUT}\""))
    )?;
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("EXAMPLES:"))?;
    for example in [
        "2024-05-24 15:30:45",
        "2025-12-31 23:59:59",
        "1970-01-01 00:00:00",
    ] {
        writeln!(
            out,
            "  {program} {}",
            painter.paint(CYAN, &format!("\"{example}\""))
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("FORMAT:"))?;
    writeln!(out, "  {}", painter.paint(YELLOW, DATETIME_LAYOUT))?;
    for line in [
        "  Where:",
        "    YYYY = Year (1900-2099)",
        "    MM   = Month (01-12)",
        "    DD   = Day (01-31)",
        "    HH   = Hour (00-23)",
        "    MM   = Minute (00-59)",
        "    SS   = Second (00-59)",
    ] {
        writeln!(out, "{}", painter.paint(DIM, line))?;
    }
    writeln!(out)
}

/// Usage banner for `utime2htime`
pub fn write_unix_usage(out: &mut dyn Write, program: &str, painter: Painter) -> io::Result<()> {
    write_header(out, "Unix Timestamp to Human Time", painter)?;

    writeln!(out, "{}", painter.heading("USAGE:"))?;
    writeln!(
        out,
        "  {program} {} {}",
        painter.paint(YELLOW, "<unix_timestamp>"),
        painter.paint(DIM, &format!("[{UTC_FLAG}]"))
    )?;
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("EXAMPLES:"))?;
    writeln!(out, "  {program} {}", painter.paint(CYAN, "1716556245"))?;
    writeln!(
        out,
        "  {program} {} {}",
        painter.paint(CYAN, "1716556245"),
        painter.paint(MAGENTA, UTC_FLAG)
    )?;
    writeln!(
        out,
        "  {program} {}          {}",
        painter.paint(CYAN, "0"),
        painter.paint(DIM, "# Unix epoch")
    )?;
    writeln!(
        out,
        "  {program} {}   {}",
        painter.paint(CYAN, "2147483647"),
        painter.paint(DIM, "# Max 32-bit timestamp")
    )?;
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("OPTIONS:"))?;
    writeln!(
        out,
        "  {}      Show time in UTC instead of local time",
        painter.paint(MAGENTA, UTC_FLAG)
    )?;
    writeln!(
        out,
        "  {}  Show this help message",
        painter.paint(MAGENTA, "-h, --help")
    )?;
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("OUTPUT FORMAT:"))?;
    writeln!(
        out,
        "  {} {}",
        painter.paint(YELLOW, DATETIME_LAYOUT),
        painter.paint(DIM, "[timezone]")
    )?;
    writeln!(out)
}

/// Result block for `htime2utime`. `utc` is omitted when the timestamp
/// could not be broken down again.
pub fn write_human_result(
    out: &mut dyn Write,
    input: &str,
    timestamp: i64,
    utc: Option<&ZonedDateTime>,
    painter: Painter,
) -> io::Result<()> {
    write_result_open(out, painter)?;
    write_row(out, "Input:", &painter.paint(CYAN, input), painter)?;
    write_row(
        out,
        "Unix Time:",
        &painter.paint(BRIGHT_YELLOW, &timestamp.to_string()),
        painter,
    )?;
    if let Some(utc) = utc {
        write_row(
            out,
            "UTC:",
            &painter.paint(MAGENTA, &format!("{} UTC", utc.format_utc())),
            painter,
        )?;
    }
    write_result_close(out, painter)
}

/// Result block for `utime2htime`
pub fn write_unix_result(
    out: &mut dyn Write,
    zoned: &ZonedDateTime,
    painter: Painter,
) -> io::Result<()> {
    write_result_open(out, painter)?;
    write_row(
        out,
        "Unix Time:",
        &painter.paint(BRIGHT_YELLOW, &zoned.timestamp().to_string()),
        painter,
    )?;

    let mut human = painter.paint(CYAN, &zoned.format());
    if zoned.zone() == Zone::Utc {
        human.push(' ');
        human.push_str(&painter.paint(MAGENTA, "UTC"));
    }
    write_row(out, "Human Time:", &human, painter)?;

    if zoned.zone() == Zone::Local {
        write_row(
            out,
            "UTC:",
            &painter.paint(MAGENTA, &format!("{} UTC", zoned.format_utc())),
            painter,
        )?;
    }

    write_row(out, "Day:", &painter.paint(WHITE, &zoned.weekday_name()), painter)?;
    write_result_close(out, painter)
}

/// `Error: <message>` followed by the error's hint, if it has one
pub fn write_error(out: &mut dyn Write, err: &Error, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}{err}", painter.paint(BRIGHT_RED, "Error: "))?;
    writeln!(out)?;
    if let Some(hint) = err.hint() {
        writeln!(out, "{}", painter.paint(DIM, hint))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints `err` to stderr and returns the exit status to end with.
pub fn report_error(err: &Error) -> i32 {
    let stderr = io::stderr();
    let painter = Painter::new(stderr.is_terminal());
    if let Err(e) = write_error(&mut stderr.lock(), err, painter) {
        log::debug!("failed to write error: {e}");
    }
    err.exit_code()
}
