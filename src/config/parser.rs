use crate::config::types::{Config, OutputConfig, DEFAULT_SOLUTIONS_DIR_NAME};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Resolves the root directory that solutions are written under
///
/// Uses `output.solutions-dir` when set, otherwise `<home>/CodeforcesSolutions`.
pub fn resolve_solutions_dir(output: &OutputConfig) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = &output.solutions_dir {
        return Ok(dir.clone());
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_SOLUTIONS_DIR_NAME))
        .ok_or(ConfigError::NoHomeDir)
}
