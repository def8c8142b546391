//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::oplog::DEFAULT_LOG_NAME;
use crate::tools::PAGE_RENDER_CACHE_DIR;

/// Root configuration structure for `.cachectl/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheControlConfig {
    /// Cache root directory (relative to project root)
    pub cache_root: PathBuf,

    /// Public URL of the cache root, shown in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_root_url: Option<String>,

    /// Directory of the key/value store (relative to project root)
    pub store_path: PathBuf,

    /// Operation log file (relative to project root)
    pub log_path: PathBuf,

    /// Name written with every log line
    pub log_name: String,

    /// What the default "clear all" action does
    pub clear_all: ClearAllSettings,
}

impl Default for CacheControlConfig {
    fn default() -> Self {
        Self {
            cache_root: PathBuf::from("site/assets/cache"),
            cache_root_url: None,
            store_path: PathBuf::from(".cachectl/store"),
            log_path: PathBuf::from(".cachectl/logs/cache-control.txt"),
            log_name: DEFAULT_LOG_NAME.to_string(),
            clear_all: ClearAllSettings::default(),
        }
    }
}

/// Steps performed by the "clear all" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearAllSettings {
    /// Delete every cache entry that has an expiration date
    pub expire_all: bool,

    /// Delete every cache entry except reserved ones
    pub delete_all: bool,

    /// Namespaces whose entries are deleted
    #[serde(deserialize_with = "deserialize_namespaces")]
    pub delete_namespaces: Vec<String>,

    /// Folders under the cache root whose contents are removed
    pub clear_directories: Vec<String>,

    /// Delete every stored asset version
    pub clear_asset_versions: bool,

    /// Clear the attached full-page cache, if any
    pub clear_full_page_cache: bool,
}

impl Default for ClearAllSettings {
    fn default() -> Self {
        Self {
            expire_all: true,
            delete_all: true,
            delete_namespaces: Vec::new(),
            clear_directories: vec![PAGE_RENDER_CACHE_DIR.to_string()],
            clear_asset_versions: true,
            clear_full_page_cache: true,
        }
    }
}

/// Namespaces given either as a list or as one-per-line text.
#[derive(Deserialize)]
#[serde(untagged)]
enum NamespaceList {
    Lines(String),
    List(Vec<String>),
}

fn deserialize_namespaces<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = match NamespaceList::deserialize(deserializer)? {
        NamespaceList::Lines(text) => text.lines().map(str::to_string).collect(),
        NamespaceList::List(list) => list,
    };
    Ok(normalize_namespaces(raw))
}

/// Trim namespaces and drop blank ones.
pub fn normalize_namespaces<I, S>(namespaces: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    namespaces
        .into_iter()
        .map(|ns| ns.as_ref().trim().to_string())
        .filter(|ns| !ns.is_empty())
        .collect()
}
