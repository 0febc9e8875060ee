//! Snapshot tests using insta.
//!
//! These tests capture and verify the output format of various commands.

use crate::integration::fixtures::{cliutil, create_files, standard_files};

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.output().expect("Failed to run cliutil");
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// ==================== Number Output Snapshots ====================

#[test]
fn test_snapshot_extremes() {
    let stdout = stdout_of(cliutil().args(["extremes", "0.5", "-4", "12.25", "-4"]));

    insta::assert_snapshot!(stdout, @r"
    min: -4 (index 1)
    max: 12.25 (index 2)
    ");
}

#[test]
fn test_snapshot_round_series() {
    let mut lines = Vec::new();
    for (value, places) in [("2.345", "2"), ("-2.345", "2"), ("0.5", "0"), ("9.995", "2")] {
        lines.push(stdout_of(cliutil().args(["round", value, "-p", places])));
    }

    insta::assert_snapshot!(lines.join("\n"), @r"
    2.35
    -2.35
    1
    10
    ");
}

// ==================== Stat Output Snapshots ====================

#[test]
fn test_snapshot_stat_text() {
    let dir = create_files(&standard_files());

    let output = cliutil()
        .current_dir(dir.path())
        .args(["stat", "*.txt", "-", "*.log"])
        .write_stdin("four")
        .output()
        .expect("Failed to run cliutil");
    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();

    insta::assert_snapshot!(stdout, @r"
    6	alpha.txt
    5	beta.txt
    4	-
    6	gamma.log
    ");
}

#[test]
fn test_snapshot_stat_json() {
    let dir = create_files(&standard_files());

    let stdout = stdout_of(
        cliutil()
            .current_dir(dir.path())
            .args(["stat", "--json", "beta.txt"]),
    );

    insta::assert_snapshot!(stdout, @r#"
    [
      {
        "name": "beta.txt",
        "bytes": 5,
        "stdin": false
      }
    ]
    "#);
}
