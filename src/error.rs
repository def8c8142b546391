//! Error types for cache-control operations.
//!
//! This module defines [`CacheControlError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store and filesystem failures are propagated unmodified, never retried
//! - A deletion that would leave the cache root is always a hard error
//! - A missing cache folder or an empty namespace is not an error at all

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cache-control operations.
#[derive(Debug, Error)]
pub enum CacheControlError {
    /// The key/value store failed to read or persist entries.
    #[error("Cache store error in namespace '{namespace}': {message}")]
    Store { namespace: String, message: String },

    /// A filesystem operation failed while clearing a cache folder.
    #[error("Filesystem error at {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A deletion path resolved outside the configured cache root.
    #[error("Refusing to delete {path}: outside of cache root {root}")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// No action is registered under the requested id.
    #[error("Unknown action: {id}")]
    UnknownAction { id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CacheControlError {
    /// Wrap an IO error with the path it occurred at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for cache-control operations.
pub type Result<T> = std::result::Result<T, CacheControlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_namespace_and_message() {
        let err = CacheControlError::Store {
            namespace: "site-search".into(),
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("site-search"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn file_system_error_displays_path_and_source() {
        let err = CacheControlError::file_system(
            "/cache/Page/a.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/cache/Page/a.html"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn path_escape_displays_path_and_root() {
        let err = CacheControlError::PathEscape {
            path: PathBuf::from("/etc/passwd"),
            root: PathBuf::from("/site/cache"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/passwd"));
        assert!(msg.contains("/site/cache"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = CacheControlError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn unknown_action_displays_id() {
        let err = CacheControlError::UnknownAction {
            id: "warm-up".into(),
        };
        assert!(err.to_string().contains("warm-up"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CacheControlError = io_err.into();
        assert!(matches!(err, CacheControlError::Io(_)));
    }
}
