//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use cachectl::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".cachectl");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "cache_root: cache").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.cache_root, temp.path().join("cache"));
//! assert_eq!(config.clear_all.clear_directories, vec!["Page".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, project_config_path, resolve_paths};
pub use schema::{normalize_namespaces, CacheControlConfig, ClearAllSettings};
pub use validator::validate;
