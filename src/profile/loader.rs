use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Profile;

/// Errors that can occur when loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse profile file '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile validation failed: {message}")]
    ValidationError { message: String },
}

/// Loads and validates a profile file.
///
/// Files ending in `.json` are read as JSON, anything else as TOML.
pub fn load(path: &Path) -> Result<Profile, ProfileError> {
    let content = fs::read_to_string(path).map_err(|e| ProfileError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let profile: Profile = if is_json {
        serde_json::from_str(&content).map_err(|e| ProfileError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        toml::from_str(&content).map_err(|e| ProfileError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    profile.validate()?;
    tracing::info!(
        path = %path.display(),
        experience = profile.experience.len(),
        skills = profile.skills.len(),
        "Loaded profile file"
    );
    Ok(profile)
}
