//! Configuration module for cliutil.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Local `.cliutil.toml`
//! - User-level `~/.config/cliutil/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{
    Config, ConfigLayer, FilesConfig, FilesLayer, InputConfig, InputLayer, NumberConfig,
    NumberLayer, PromptConfig, PromptLayer, PROJECT_CONFIG_FILE,
};
