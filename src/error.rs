//! Custom error types for cliutil.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the cliutil binary.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Input file missing or of the wrong type.
    pub const BAD_INPUT: i32 = 2;
    /// User declined an overwrite prompt.
    pub const ABORTED: i32 = 3;
    /// Invalid glob pattern.
    pub const BAD_PATTERN: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Terminal operation failed.
    pub const TERMINAL: i32 = 6;
}

/// Main error type for cliutil.
#[derive(Error, Debug)]
pub enum UtilError {
    /// The named file does not exist.
    #[error("File \"{path}\" does not exist")]
    NotFound { path: PathBuf },

    /// A file was expected but a directory was found.
    #[error("\"{path}\" is a directory, not a file")]
    IsDirectory { path: PathBuf },

    /// The user declined to overwrite an existing file.
    #[error("aborted by user")]
    AbortedByUser,

    /// A glob pattern could not be parsed.
    ///
    /// `matched` holds the paths collected before the bad pattern.
    #[error("Invalid pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        matched: Vec<PathBuf>,
        #[source]
        source: glob::PatternError,
    },

    /// A console API call failed.
    #[error("{call} failed: {source}")]
    ConsoleCall {
        call: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Stdout is required to be a terminal.
    #[error("stdout is not a terminal\n\nTip: Run this command directly in a terminal, without redirecting its output.")]
    NotATerminal,

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UtilError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            UtilError::NotFound { .. } => exit_code::BAD_INPUT,
            UtilError::IsDirectory { .. } => exit_code::BAD_INPUT,
            UtilError::AbortedByUser => exit_code::ABORTED,
            UtilError::BadPattern { .. } => exit_code::BAD_PATTERN,
            UtilError::ConsoleCall { .. } => exit_code::TERMINAL,
            UtilError::NotATerminal => exit_code::TERMINAL,
            UtilError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            UtilError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            UtilError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Wrap an IO error with the operation and path it failed on.
    pub fn io_at(operation: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UtilError::IoWithContext {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UtilError::NotFound { .. })
    }

    /// Whether this error means a directory was found where a file was expected.
    pub fn is_directory(&self) -> bool {
        matches!(self, UtilError::IsDirectory { .. })
    }
}

/// Result type alias for cliutil operations.
pub type Result<T> = std::result::Result<T, UtilError>;
