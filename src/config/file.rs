//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::{Config, ConfigLayer};
use crate::error::UtilError;

/// Load one config layer from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let layer: ConfigLayer = toml::from_str(&content).map_err(|err| UtilError::InvalidConfig {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(layer)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/cliutil/config.toml` (user-level, lowest priority)
/// 2. `.cliutil.toml` in the given directory (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing default config files are handled gracefully (defaults are used),
/// and broken ones are skipped with a warning.
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let user_config_path = Config::user_config_path();
    load_layers(user_config_path.as_deref(), cli_config_path, project_dir)
}

fn load_layers(
    user_config_path: Option<&Path>,
    cli_config_path: Option<&Path>,
    project_dir: &Path,
) -> Result<Config> {
    let mut config = Config::default();

    // Load user-level config (lowest priority)
    if let Some(user_config_path) = user_config_path {
        merge_optional(&mut config, user_config_path, "user");
    }

    // Load project-level config (medium priority)
    let project_config_path = Config::project_config_path(project_dir);
    merge_optional(&mut config, &project_config_path, "project");

    // Load CLI-specified config (highest priority)
    if let Some(cli_path) = cli_config_path {
        let cli_layer = load_layer_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_layer);
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, path: &Path, layer: &str) {
    if !path.exists() {
        return;
    }

    match load_layer_from_path(path) {
        Ok(loaded) => config.merge(loaded),
        Err(err) => warn!(
            layer,
            path = %path.display(),
            error = %format!("{err:#}"),
            "ignoring config file"
        ),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# cliutil Configuration File
# Place this file at ~/.config/cliutil/config.toml for global settings
# or .cliutil.toml in your working directory for local settings

# Captured stdin
[input]
# Directory that holds stdin while it is buffered (default: OS temp dir)
# temp_dir = "/var/tmp"

# File name prefix of the buffered copy
temp_prefix = "stdin"

# File lists
[files]
# Skip invalid glob patterns instead of failing
ignore_invalid_patterns = false

# Overwrite prompt
[prompt]
# Overwrite existing output files without asking
assume_yes = false

# Numbers
[number]
# Default decimal places for `cliutil round`
places = 2
"#
    .to_string()
}
