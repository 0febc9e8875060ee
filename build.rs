//! Build script for cliutil.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "cliutil")]
#[command(
    author,
    version,
    about = "Building blocks for command-line tools"
)]
#[command(
    long_about = "cliutil bundles small helpers for command-line tools: stdin that can be \
    read like a regular seekable file, screen clearing and controlling-terminal access, \
    glob file lists with overwrite prompts, and numeric helpers.\n\n\
    Every file argument accepts '-' for stdin or stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Concatenate files (stdin when none or '-') to an output
    Cat {
        /// Files or glob patterns; '-' reads stdin
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Output file; '-' writes stdout
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        output: String,

        /// Overwrite an existing output file without asking
        #[arg(short, long)]
        yes: bool,

        /// Skip invalid glob patterns
        #[arg(long)]
        ignore_invalid: bool,
    },

    /// Print the size of each file (stdin is buffered to measure it)
    Stat {
        /// Files or glob patterns; '-' reads stdin
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Skip invalid glob patterns
        #[arg(long)]
        ignore_invalid: bool,
    },

    /// Clear the terminal screen
    Clear,

    /// Open the controlling terminal and report on it
    Tty,

    /// Round a number, ties away from zero
    #[command(allow_negative_numbers = true)]
    Round {
        /// Number to round
        value: f64,

        /// Decimal places (negative rounds to tens, hundreds, ...)
        #[arg(short, long)]
        places: Option<i32>,
    },

    /// Print the position and value of the smallest and largest number
    #[command(allow_negative_numbers = true)]
    Extremes {
        /// Numbers to scan
        #[arg(required = true)]
        values: Vec<f64>,
    },

    /// Print an example configuration file
    Config,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("CLIUTIL_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    // Write to the build output directory
    let man_path = out_dir.join("cliutil.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("cliutil.1"));
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
