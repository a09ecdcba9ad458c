//! Options file handling.
//! Creation options may be stored in a JSON or YAML file and passed with `--config`;
//! values given on the command line take precedence over the file.

use crate::error::{Error, Result};
use crate::options::OptionsDraft;
use log::debug;
use std::path::Path;

/// Loads an options file.
///
/// # Arguments
/// * `path` - Path to a JSON or YAML file
///
/// # Returns
/// * `Result<OptionsDraft>` - Option values found in the file
///
/// # Errors
/// * `Error::ConfigError` if the file is missing or cannot be parsed
pub fn load_options_file<P: AsRef<Path>>(path: P) -> Result<OptionsDraft> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid options file path: {}",
            path.display()
        )));
    }

    debug!("Loading options from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_options(&content)
}

/// Parses options file content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_options(content: &str) -> Result<OptionsDraft> {
    match serde_json::from_str(content) {
        Ok(draft) => Ok(draft),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid options format: {e}"))),
    }
}
