use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const APP_DIR_NAME: &str = "chatsim";
const MIN_SHELL_WIDTH: usize = 20;

/// Loads config from `path`, or from `./config.toml` and then the user config
/// dir when no path is given. A missing file yields defaults.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    let Some(config_path) = resolve_path(path) else {
        return Ok(config);
    };

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path.clone(),
        source,
    })?;

    file_config.merge_into(&mut config);
    validate(&config)?;

    tracing::debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}

fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return path.exists().then(|| path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CONFIG_PATH);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_CONFIG_PATH))
        .filter(|candidate| candidate.exists())
}

fn validate(config: &AppConfig) -> Result<(), AppError> {
    if config.replies.text.trim().is_empty() {
        return Err(invalid("replies.text must not be empty"));
    }

    if config.shell.tick_ms == 0 {
        return Err(invalid("shell.tick_ms must be greater than zero"));
    }

    if config.shell.width < MIN_SHELL_WIDTH {
        return Err(invalid(format!(
            "shell.width must be at least {MIN_SHELL_WIDTH}"
        )));
    }

    if let Some(contacts) = &config.contacts {
        let mut seen = HashSet::new();
        for contact in contacts {
            if contact.id.trim().is_empty() {
                return Err(invalid("contact ids must not be empty"));
            }
            if !seen.insert(contact.id.as_str()) {
                return Err(invalid(format!("duplicate contact id {}", contact.id)));
            }
        }
    }

    Ok(())
}

fn invalid(details: impl Into<String>) -> AppError {
    AppError::ConfigInvalid {
        details: details.into(),
    }
}
