//! cliutil - building blocks for command-line tools
//!
//! Small, independent helpers that command implementations compose.
//!
//! # Features
//!
//! - **Buffered stdin**: treat `-` as a real, seekable, re-readable file
//! - **Terminal control**: clear the screen and open the controlling terminal,
//!   whatever stdin and stdout point to
//! - **File helpers**: existence checks, overwrite prompts, glob file lists
//! - **Numbers**: min/max scans and decimal rounding with ties away from zero
//! - **Cross-platform**: POSIX terminals and the Windows console
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface of the `cliutil` binary
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`files`] - File inputs, outputs and file lists
//! - [`number`] - Numeric helpers
//! - [`sugar`] - Result conveniences for fixed call sites
//! - [`terminal`] - Screen clearing and controlling-terminal handles
//!
//! # Example
//!
//! ```no_run
//! use std::io::Read;
//!
//! use cliutil::files::{open_buffered, InputOptions};
//!
//! // Capture stdin so it can be read twice
//! let buffered = open_buffered("-", &InputOptions::default()).expect("capture stdin");
//! let (mut input, _rest_of_stdin) = buffered.into_parts();
//!
//! let mut first = Vec::new();
//! input.read_to_end(&mut first).unwrap();
//! println!("{} bytes on stdin", first.len());
//!
//! input.close().unwrap();
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// File inputs, outputs and file lists.
pub mod files;

/// Numeric helpers.
pub mod number;

/// Result conveniences.
pub mod sugar;

/// Terminal control.
pub mod terminal;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, UtilError};
pub use files::{open_buffered, Input, InputOptions};
pub use terminal::{clear_terminal, Terminal};
