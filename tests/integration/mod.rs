//! Integration tests for cliutil.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary files and configs
//! - `cli_tests` - CLI interface tests
//! - `input_tests` - Buffered input and file list tests through the library
//! - `config_tests` - Configuration loading tests through the binary
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod fixtures;
pub mod input_tests;
pub mod snapshot_tests;
