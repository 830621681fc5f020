use std::io::{self, IsTerminal, Write};
use std::process;

use htime::cli::{self, Invocation, RawArgs};
use htime::output::{self, Painter};
use htime::{CalendarDateTime, EXIT_FAILURE, EXIT_SUCCESS, Error, Zone, ZonedDateTime};

const PROGRAM: &str = "htime2utime";

fn main() {
    htime::logging::init().ok();

    let program = cli::program_name(PROGRAM);
    let invocation = RawArgs::capture().map_or(Invocation::Usage, |raw| {
        cli::human_invocation(&raw.args)
    });

    let code = run(&program, invocation);
    if code != EXIT_SUCCESS {
        process::exit(code);
    }
}

fn run(program: &str, invocation: Invocation<String>) -> i32 {
    let stdout = io::stdout();
    let painter = Painter::new(stdout.is_terminal());
    let mut out = stdout.lock();

    let (written, code) = match invocation {
        Invocation::Help => (output::write_human_usage(&mut out, program, painter), EXIT_SUCCESS),
        Invocation::Usage => (output::write_human_usage(&mut out, program, painter), EXIT_FAILURE),
        Invocation::Run(input) => match convert(&input) {
            Ok((timestamp, utc)) => (
                output::write_human_result(&mut out, &input, timestamp, utc.as_ref(), painter),
                EXIT_SUCCESS,
            ),
            Err(err) => return output::report_error(&err),
        },
    };

    if let Err(e) = written.and_then(|()| out.flush()) {
        log::debug!("failed to write output: {e}");
    }
    code
}

/// Local date/time to timestamp, plus the UTC view of the result.
fn convert(input: &str) -> Result<(i64, Option<ZonedDateTime>), Error> {
    let datetime: CalendarDateTime = input.parse()?;
    let timestamp = datetime.to_timestamp(Zone::Local)?;
    let utc = ZonedDateTime::from_timestamp(timestamp, Zone::Utc)
        .inspect_err(|e| log::warn!("{e}"))
        .ok();
    Ok((timestamp, utc))
}
