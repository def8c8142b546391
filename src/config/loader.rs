//! Configuration file discovery and loading.

use crate::config::schema::CacheControlConfig;
use crate::config::validator::validate;
use crate::error::{CacheControlError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the project config relative to the project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".cachectl").join("config.yml")
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CacheControlConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CacheControlError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CacheControlError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CacheControlConfig> {
    if content.trim().is_empty() {
        return Ok(CacheControlConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CacheControlError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, resolve and validate the configuration for a project.
///
/// An explicit `config_path` must exist. Without one, the project config
/// is used if present and the defaults otherwise. Relative paths in the
/// result are resolved against `project_root`.
pub fn load_config(project_root: &Path, config_path: Option<&Path>) -> Result<CacheControlConfig> {
    let config = match config_path {
        Some(path) => load_config_file(path)?,
        None => {
            let path = project_config_path(project_root);
            if path.exists() {
                load_config_file(&path)?
            } else {
                tracing::debug!("no config at {:?}, using defaults", path);
                CacheControlConfig::default()
            }
        }
    };

    validate(&config)?;
    Ok(resolve_paths(config, project_root))
}

/// Make relative paths absolute against `project_root`.
pub fn resolve_paths(mut config: CacheControlConfig, project_root: &Path) -> CacheControlConfig {
    for path in [
        &mut config.cache_root,
        &mut config.store_path,
        &mut config.log_path,
    ] {
        if path.is_relative() {
            *path = project_root.join(&*path);
        }
    }
    config
}
