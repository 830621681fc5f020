#![allow(deprecated)] // Command::cargo_bin - replacement macro is unstable

use assert_cmd::Command;
use predicates::prelude::*;

/// POSIX TZ strings, so no zoneinfo files are needed on the host.
const TZ_UTC: &str = "UTC0";
const TZ_EST: &str = "EST5";
const TZ_US_EASTERN: &str = "EST5EDT,M3.2.0,M11.1.0";

fn htime2utime(tz: &str) -> Command {
    let mut cmd = Command::cargo_bin("htime2utime").unwrap();
    cmd.env("TZ", tz).env_remove("HTIME_LOG");
    cmd
}

fn utime2htime(tz: &str) -> Command {
    let mut cmd = Command::cargo_bin("utime2htime").unwrap();
    cmd.env("TZ", tz).env_remove("HTIME_LOG");
    cmd
}

/// Runs `utime2htime <timestamp> --utc` and returns the human time it printed.
fn utc_string(timestamp: &str) -> String {
    let output = utime2htime(TZ_UTC)
        .args([timestamp, "--utc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("│ Human Time: "))
        .and_then(|rest| rest.strip_suffix(" UTC"))
        .unwrap()
        .to_owned()
}

// ==================== htime2utime - help / usage ====================

#[test]
fn human_help_exits_zero() {
    for flag in ["-h", "--help"] {
        htime2utime(TZ_UTC)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE:"))
            .stdout(predicate::str::contains("Human Time to Unix Timestamp"));
    }
}

#[test]
fn human_without_arguments_prints_usage() {
    htime2utime(TZ_UTC)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn human_with_too_many_arguments_prints_usage() {
    htime2utime(TZ_UTC)
        .args(["2024-05-24", "15:30:45"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("Conversion Result").not());
}

#[test]
fn human_treats_double_dash_as_an_argument() {
    htime2utime(TZ_UTC)
        .args(["--", "2024-05-24 15:30:45"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("Conversion Result").not());
}

// ==================== htime2utime - conversion ====================

#[test]
fn human_epoch_in_utc() {
    htime2utime(TZ_UTC)
        .arg("1970-01-01 00:00:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Input:      1970-01-01 00:00:00\n"))
        .stdout(predicate::str::contains("│ Unix Time:  0\n"))
        .stdout(predicate::str::contains("│ UTC:        1970-01-01 00:00:00 UTC\n"));
}

#[test]
fn human_epoch_in_fixed_offset_zone() {
    // local midnight in UTC-5 is 05:00 UTC
    htime2utime(TZ_EST)
        .arg("1970-01-01 00:00:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Unix Time:  18000\n"))
        .stdout(predicate::str::contains("│ UTC:        1970-01-01 05:00:00 UTC\n"));
}

#[test]
fn human_output_is_plain_when_piped() {
    htime2utime(TZ_UTC)
        .arg("2024-05-24 15:30:45")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn human_accepts_unpadded_fields() {
    htime2utime(TZ_UTC)
        .arg("2024-5-4 3:7:9")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ UTC:        2024-05-04 03:07:09 UTC\n"));
}

#[test]
fn human_rolls_over_oversized_day() {
    htime2utime(TZ_UTC)
        .arg("2024-02-30 00:00:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Unix Time:  1709251200\n"))
        .stdout(predicate::str::contains("│ UTC:        2024-03-01 00:00:00 UTC\n"));
}

#[test]
fn human_skipped_local_time_uses_offset_before_transition() {
    // 02:30 does not exist on 2024-03-10 in US Eastern; read with EST (-5)
    htime2utime(TZ_US_EASTERN)
        .arg("2024-03-10 02:30:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Unix Time:  1710055800\n"));
}

#[test]
fn human_ambiguous_local_time_uses_earlier_instant() {
    // 01:30 happens twice on 2024-11-03 in US Eastern; EDT (-4) comes first
    htime2utime(TZ_US_EASTERN)
        .arg("2024-11-03 01:30:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Unix Time:  1730611800\n"));
}

#[test]
fn human_rejects_invalid_input() {
    for input in [
        "2024-13-01 00:00:00",
        "2024-05-24 24:00:00",
        "not-a-date",
        "",
        "1899-12-31 23:59:59",
        "2024-05-24",
    ] {
        htime2utime(TZ_UTC)
            .arg(input)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Conversion Result").not())
            .stderr(predicate::str::contains(
                "Error: Invalid datetime format. Use: YYYY-MM-DD HH:MM:SS",
            ))
            .stderr(predicate::str::contains("Example: \"2024-05-24 15:30:45\""));
    }
}

#[test]
fn human_names_the_offending_field() {
    htime2utime(TZ_UTC)
        .arg("2024-05-24 24:00:00")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hour 24 is out of range (0-23)"));
}

// ==================== utime2htime - help / usage ====================

#[test]
fn unix_help_exits_zero() {
    for args in [&["-h"][..], &["--help"][..], &["--help", "--utc"][..]] {
        utime2htime(TZ_UTC)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Unix Timestamp to Human Time"))
            .stdout(predicate::str::contains("OPTIONS:"));
    }
}

#[test]
fn unix_wrong_argument_count_prints_usage() {
    utime2htime(TZ_UTC)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"));

    utime2htime(TZ_UTC)
        .args(["1", "--utc", "extra"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"));
}

// ==================== utime2htime - conversion ====================

#[test]
fn unix_epoch_in_utc() {
    utime2htime(TZ_UTC)
        .args(["0", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Unix Time:  0\n"))
        .stdout(predicate::str::contains("│ Human Time: 1970-01-01 00:00:00 UTC\n"))
        .stdout(predicate::str::contains("│ Day:        Thursday\n"))
        .stdout(predicate::str::contains("│ UTC:").not());
}

#[test]
fn unix_epoch_in_local_time() {
    utime2htime(TZ_UTC)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Human Time: 1970-01-01 00:00:00\n"))
        .stdout(predicate::str::contains("│ UTC:        1970-01-01 00:00:00 UTC\n"))
        .stdout(predicate::str::contains("│ Day:        Thursday\n"));
}

#[test]
fn unix_utc_flag_only_changes_the_zone() {
    utime2htime(TZ_EST)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Human Time: 1969-12-31 19:00:00\n"))
        .stdout(predicate::str::contains("│ UTC:        1970-01-01 00:00:00 UTC\n"))
        .stdout(predicate::str::contains("│ Day:        Wednesday\n"));

    utime2htime(TZ_EST)
        .args(["0", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Human Time: 1970-01-01 00:00:00 UTC\n"))
        .stdout(predicate::str::contains("│ Day:        Thursday\n"));
}

#[test]
fn unix_known_timestamp() {
    utime2htime(TZ_UTC)
        .args(["1716556245", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Human Time: 2024-05-24 13:10:45 UTC\n"))
        .stdout(predicate::str::contains("│ Day:        Friday\n"));
}

#[test]
fn unix_rejects_invalid_integers() {
    for input in ["abc", "123abc", "", "1.5"] {
        utime2htime(TZ_UTC)
            .arg(input)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Conversion Result").not())
            .stderr(predicate::str::contains("Invalid Unix timestamp"))
            .stderr(predicate::str::contains("Example: 1716556245"));
    }
}

#[test]
fn unix_treats_double_dash_as_the_timestamp() {
    utime2htime(TZ_UTC)
        .args(["--", "5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Conversion Result").not())
        .stderr(predicate::str::contains("Invalid Unix timestamp"));
}

#[test]
fn unix_rejects_negative_timestamp() {
    utime2htime(TZ_UTC)
        .arg("-5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Unix timestamp cannot be negative: -5",
        ));
}

#[test]
fn unix_rejects_unknown_option() {
    utime2htime(TZ_UTC)
        .args(["0", "--foo"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown option \"--foo\""))
        .stderr(predicate::str::contains("Run with -h for help."));
}

#[test]
fn unix_rejects_unrepresentable_timestamp() {
    utime2htime(TZ_UTC)
        .args(["9223372036854775807", "--utc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Value may be out of range."));
}

// ==================== round trip ====================

#[test]
fn utc_string_round_trips_through_htime2utime() {
    for timestamp in ["0", "1716556245", "2147483647"] {
        let human = utc_string(timestamp);
        htime2utime(TZ_UTC)
            .arg(&human)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("│ Unix Time:  {timestamp}\n")));
    }
}

#[test]
fn debug_logging_goes_to_stderr() {
    htime2utime(TZ_UTC)
        .env("HTIME_LOG", "debug")
        .arg("2024-05-24 15:30:45")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::contains("DEBUG").not());
}
