//! Reading the collaborators configuration file.

use std::fs;
use std::path::Path;

use log::debug;

use crate::collaborators::Collaborators;
use crate::error::{Error, Result};

fn read_config_text(config_path: &str) -> Result<String> {
    fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))
}

fn validate_collaborators(collaborators: &Collaborators) -> Result<()> {
    if collaborators.finder.trim().is_empty() {
        return Err(Error::EmptyProgram("finder".to_string()));
    }

    if collaborators.renderer.trim().is_empty() {
        return Err(Error::EmptyProgram("renderer".to_string()));
    }

    Ok(())
}

/// Loads the collaborators configuration.
///
/// A missing file is only acceptable when `required` is false, in which case
/// the defaults are used. An empty file also yields the defaults.
///
/// # Errors
///
/// Returns an error if:
/// - The file is required but cannot be read
/// - The file contains invalid YAML or unknown keys
/// - The finder or renderer is configured as an empty string
pub fn get_collaborators(config_path: &str, required: bool) -> Result<Collaborators> {
    if !required && !Path::new(config_path).exists() {
        debug!("No config file at `{}`, using defaults", config_path);
        return Ok(Collaborators::default());
    }

    let text = read_config_text(config_path)?;

    if text.trim().is_empty() {
        return Ok(Collaborators::default());
    }

    let collaborators: Collaborators = serde_yaml::from_str(&text).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    validate_collaborators(&collaborators)?;

    Ok(collaborators)
}
