//! cliutil - command-line building blocks
//!
//! Entry point for the cliutil demonstration binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cliutil::cli::{Cli, Command};
use cliutil::config::{generate_example_config, load_config, Config};
use cliutil::error::{exit_code, UtilError};
use cliutil::files::{open_buffered, parse_file_list, OverridePrompt};
use cliutil::number::{max_n, min_n, round};
use cliutil::sugar::result_or_abort;
use cliutil::terminal::{self, clear_terminal, terminal_size, Terminal};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(util_err) = err.downcast_ref::<UtilError>() {
                eprintln!("Error: {util_err}");
                return ExitCode::from(util_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    let config = if cli.no_config {
        Config::default()
    } else {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        load_config(cli.config.as_deref(), &cwd)?
    };
    debug!(?config, "effective configuration");

    match cli.command {
        Command::Cat {
            files,
            output,
            yes,
            ignore_invalid,
        } => cat(&files, &output, yes, ignore_invalid, &config),
        Command::Stat {
            files,
            json,
            ignore_invalid,
        } => stat(&files, json, ignore_invalid, &config),
        Command::Clear => clear(),
        Command::Tty => tty(),
        Command::Round { value, places } => {
            let places = places.unwrap_or(config.number.places);
            println!("{}", round(value, places));
            Ok(exit_code::SUCCESS)
        }
        Command::Extremes { values } => extremes(&values),
        Command::Config => {
            print!("{}", generate_example_config());
            Ok(exit_code::SUCCESS)
        }
        Command::Completions { shell } => {
            Cli::generate_completions(shell);
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Log to stderr; `--debug` wins over `RUST_LOG`.
fn init_logging(debug: bool) {
    let filter = if debug {
        result_or_abort(EnvFilter::try_new("debug"), "constant log filter")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cat(
    files: &[String],
    output: &str,
    yes: bool,
    ignore_invalid: bool,
    config: &Config,
) -> Result<i32> {
    let names = parse_file_list(files, ignore_invalid || config.files.ignore_invalid_patterns)?;
    let options = config.input_options();

    // Inputs are opened first so stdin is fully captured before any prompt.
    let mut inputs = Vec::with_capacity(names.len());
    let mut rest_of_stdin: Option<File> = None;
    for name in &names {
        let (input, stdin) = open_buffered(name, &options)?.into_parts();
        if stdin.is_some() {
            rest_of_stdin = stdin;
        }
        inputs.push(input);
    }

    let answers: Box<dyn BufRead> = match rest_of_stdin {
        Some(stdin) => Box::new(BufReader::new(stdin)),
        None => Box::new(io::stdin().lock()),
    };
    let mut prompt =
        OverridePrompt::new(answers, io::stderr()).assume_yes(yes || config.prompt.assume_yes);
    let mut out = prompt.create(output)?;

    for mut input in inputs {
        let copied = io::copy(&mut input, &mut out)
            .with_context(|| format!("Failed to copy '{}'", input.name().display()))?;
        debug!(name = %input.name().display(), bytes = copied, "copied input");
        input.close()?;
    }
    out.close()?;

    Ok(exit_code::SUCCESS)
}

/// Size report for one file.
#[derive(Debug, Serialize)]
struct FileStat {
    name: String,
    bytes: u64,
    stdin: bool,
}

fn stat(files: &[String], json: bool, ignore_invalid: bool, config: &Config) -> Result<i32> {
    let names = parse_file_list(files, ignore_invalid || config.files.ignore_invalid_patterns)?;
    let options = config.input_options();

    let mut stats = Vec::with_capacity(names.len());
    for name in &names {
        let (input, _) = open_buffered(name, &options)?.into_parts();
        stats.push(FileStat {
            name: display_name(name),
            bytes: input.metadata().map_or(0, |m| m.len()),
            stdin: input.is_stdin(),
        });
        input.close()?;
    }

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &stats)?;
        writeln!(stdout)?;
    } else {
        for stat in &stats {
            writeln!(stdout, "{}\t{}", stat.bytes, stat.name)?;
        }
    }

    Ok(exit_code::SUCCESS)
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

fn clear() -> Result<i32> {
    if !io::stdout().is_terminal() {
        return Err(UtilError::NotATerminal.into());
    }
    clear_terminal()?;
    Ok(exit_code::SUCCESS)
}

fn tty() -> Result<i32> {
    let term = terminal::native();
    let reader = term.open_reader()?;
    let writer = term.open_writer()?;

    let describe = |is_tty: bool| if is_tty { "terminal" } else { "not a terminal" };
    println!("reader: {}", describe(reader.is_terminal()));
    println!("writer: {}", describe(writer.is_terminal()));
    if let Some(size) = terminal_size() {
        println!("size: {}x{} ({} cells)", size.width, size.height, size.cells());
    }

    Ok(exit_code::SUCCESS)
}

fn extremes(values: &[f64]) -> Result<i32> {
    let (Some((min_index, min)), Some((max_index, max))) = (min_n(values), max_n(values)) else {
        anyhow::bail!("No numbers given");
    };

    println!("min: {min} (index {min_index})");
    println!("max: {max} (index {max_index})");
    Ok(exit_code::SUCCESS)
}
