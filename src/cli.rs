//! CLI argument definitions for cliutil.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use cliutil::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Debug: {}", cli.debug);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

/// Building blocks for command-line tools.
#[derive(Parser, Debug)]
#[command(name = "cliutil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
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
        shell: CliShell,
    },
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "cliutil", &mut std::io::stdout());
    }
}
