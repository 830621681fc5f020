use std::io::{self, IsTerminal, Write};
use std::process;

use htime::cli::{self, Invocation, RawArgs, TimestampArgs};
use htime::output::{self, Painter};
use htime::{EXIT_FAILURE, EXIT_SUCCESS, Error, ZonedDateTime};

const PROGRAM: &str = "utime2htime";

fn main() {
    htime::logging::init().ok();

    let program = cli::program_name(PROGRAM);
    let invocation = RawArgs::capture().map_or(Invocation::Usage, |raw| {
        cli::unix_invocation(&raw.args)
    });

    let code = run(&program, invocation);
    if code != EXIT_SUCCESS {
        process::exit(code);
    }
}

fn run(program: &str, invocation: Invocation<TimestampArgs>) -> i32 {
    let stdout = io::stdout();
    let painter = Painter::new(stdout.is_terminal());
    let mut out = stdout.lock();

    let (written, code) = match invocation {
        Invocation::Help => (output::write_unix_usage(&mut out, program, painter), EXIT_SUCCESS),
        Invocation::Usage => (output::write_unix_usage(&mut out, program, painter), EXIT_FAILURE),
        Invocation::Run(args) => match convert(&args) {
            Ok(zoned) => (output::write_unix_result(&mut out, &zoned, painter), EXIT_SUCCESS),
            Err(err) => return output::report_error(&err),
        },
    };

    if let Err(e) = written.and_then(|()| out.flush()) {
        log::debug!("failed to write output: {e}");
    }
    code
}

fn convert(args: &TimestampArgs) -> Result<ZonedDateTime, Error> {
    let (timestamp, zone) = args.resolve()?;
    Ok(ZonedDateTime::from_timestamp(timestamp.get(), zone)?)
}
