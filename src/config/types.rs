//! Configuration type definitions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::files::InputOptions;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = ".cliutil.toml";

/// Stdin capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory for captured stdin (default: the OS temp dir).
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// File name prefix for captured stdin.
    #[serde(default = "default_temp_prefix")]
    pub temp_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            temp_prefix: default_temp_prefix(),
        }
    }
}

/// File list settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Skip invalid glob patterns instead of failing.
    #[serde(default)]
    pub ignore_invalid_patterns: bool,
}

/// Overwrite prompt settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Overwrite existing files without asking.
    #[serde(default)]
    pub assume_yes: bool,
}

/// Number formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    /// Default number of decimal places for rounding.
    #[serde(default = "default_places")]
    pub places: i32,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            places: default_places(),
        }
    }
}

/// One config file as written: absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub input: Option<InputLayer>,
    pub files: Option<FilesLayer>,
    pub prompt: Option<PromptLayer>,
    pub number: Option<NumberLayer>,
}

/// `[input]` keys of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputLayer {
    pub temp_dir: Option<PathBuf>,
    pub temp_prefix: Option<String>,
}

/// `[files]` keys of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilesLayer {
    pub ignore_invalid_patterns: Option<bool>,
}

/// `[prompt]` keys of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PromptLayer {
    pub assume_yes: Option<bool>,
}

/// `[number]` keys of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NumberLayer {
    pub places: Option<i32>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Stdin capture settings.
    #[serde(default)]
    pub input: InputConfig,
    /// File list settings.
    #[serde(default)]
    pub files: FilesConfig,
    /// Overwrite prompt settings.
    #[serde(default)]
    pub prompt: PromptConfig,
    /// Number settings.
    #[serde(default)]
    pub number: NumberConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path in the user's config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cliutil").join("config.toml"))
    }

    /// Get the project config file path inside a directory.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    /// Apply a layer on top of this config. Only keys the layer sets win.
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(input) = layer.input {
            if let Some(temp_dir) = input.temp_dir {
                self.input.temp_dir = Some(temp_dir);
            }
            if let Some(temp_prefix) = input.temp_prefix {
                self.input.temp_prefix = temp_prefix;
            }
        }

        if let Some(files) = layer.files {
            if let Some(ignore) = files.ignore_invalid_patterns {
                self.files.ignore_invalid_patterns = ignore;
            }
        }

        if let Some(prompt) = layer.prompt {
            if let Some(assume_yes) = prompt.assume_yes {
                self.prompt.assume_yes = assume_yes;
            }
        }

        if let Some(number) = layer.number {
            if let Some(places) = number.places {
                self.number.places = places;
            }
        }
    }

    /// Stdin capture options for [`crate::files::open_buffered`].
    pub fn input_options(&self) -> InputOptions {
        InputOptions {
            temp_dir: self.input.temp_dir.clone(),
            temp_prefix: self.input.temp_prefix.clone(),
        }
    }
}

fn default_temp_prefix() -> String {
    crate::files::DEFAULT_TEMP_PREFIX.to_string()
}

fn default_places() -> i32 {
    2
}
