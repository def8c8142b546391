//! Configuration validation.

use std::path::{Component, Path};

use crate::config::schema::CacheControlConfig;
use crate::error::{CacheControlError, Result};

/// Validate a loaded configuration.
///
/// Every cache folder must be a single path component and every namespace
/// must be non-blank.
pub fn validate(config: &CacheControlConfig) -> Result<()> {
    for dir in &config.clear_all.clear_directories {
        let mut components = Path::new(dir).components();
        let valid = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) && !dir.contains(['/', '\\']);
        if !valid {
            return Err(CacheControlError::ConfigValidationError {
                message: format!(
                    "clear_directories entry '{}' must be a folder name directly under the cache root",
                    dir
                ),
            });
        }
    }

    if config
        .clear_all
        .delete_namespaces
        .iter()
        .any(|ns| ns.trim().is_empty())
    {
        return Err(CacheControlError::ConfigValidationError {
            message: "delete_namespaces must not contain blank entries".to_string(),
        });
    }

    if config.log_name.trim().is_empty() {
        return Err(CacheControlError::ConfigValidationError {
            message: "log_name must not be empty".to_string(),
        });
    }

    Ok(())
}
