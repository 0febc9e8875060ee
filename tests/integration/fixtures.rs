//! Test fixtures for creating temporary files and configurations.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Get a Command for the cliutil binary that ignores user config files.
pub fn cliutil() -> Command {
    let mut cmd = cargo_bin_cmd!("cliutil");
    cmd.arg("--no-config");
    cmd
}

/// Get a Command for the cliutil binary with config loading enabled.
///
/// The user config directory is pointed at `home` so only test files are seen.
pub fn cliutil_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("cliutil");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"));
    cmd
}

/// Create a directory holding the given files.
pub fn create_files(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }
    dir
}

/// A small set of text files.
pub fn standard_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("alpha.txt", "alpha\n"),
        ("beta.txt", "beta\n"),
        ("gamma.log", "gamma\n"),
    ]
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Number of entries in a directory.
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).expect("Failed to read directory").count()
}

/// A glob pattern inside a directory, as a string argument.
pub fn pattern(dir: &Path, glob: &str) -> String {
    dir.join(glob).to_string_lossy().into_owned()
}

/// Run `cliutil <args>` inside a fresh pseudo-terminal session, with stdin
/// and stdout of the binary redirected away from it.
///
/// Returns None when util-linux `script` is not installed.
#[cfg(target_os = "linux")]
pub fn cliutil_in_pty(args: &str) -> Option<std::process::Output> {
    use std::process::{Command as StdCommand, Stdio};

    let available = StdCommand::new("script")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    if !available {
        return None;
    }

    let bin = assert_cmd::cargo::cargo_bin!("cliutil");
    let inner = format!(
        "'{}' --no-config {args} < /dev/null | cat",
        bin.display()
    );
    let output = StdCommand::new("script")
        .args(["-qec", &inner, "/dev/null"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run script");
    Some(output)
}
