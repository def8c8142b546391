//! Integration tests for the cachectl binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(config) = config {
        let dir = temp.path().join(".cachectl");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
    }
    let cache = temp.path().join("site/assets/cache");
    fs::create_dir_all(cache.join("Page/blog")).unwrap();
    fs::write(cache.join("Page/blog/index.html"), "<html>").unwrap();
    fs::create_dir_all(cache.join("FileCompiler")).unwrap();
    fs::write(cache.join("FileCompiler/compiled.php"), "<?php").unwrap();
    temp
}

fn cachectl(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("cachectl"));
    cmd.current_dir(temp.path()).env_remove("CACHECTL_CACHE_ROOT");
    cmd
}

const CLEAR_ALL_CONFIG: &str = r#"
clear_all:
  expire_all: false
  delete_all: false
  delete_namespaces:
    - site-search
  clear_directories: [Page]
  clear_asset_versions: true
  clear_full_page_cache: false
"#;

#[test]
fn help_shows_about() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear site caches"))
        .stdout(predicate::str::contains("clear-all"));
    Ok(())
}

#[test]
fn version_flag_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn purge_empties_folder_and_shows_log() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .args(["purge", "Page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared the template render cache"));

    let page = temp.path().join("site/assets/cache/Page");
    assert!(page.is_dir());
    assert_eq!(fs::read_dir(&page)?.count(), 0);
    assert!(temp
        .path()
        .join("site/assets/cache/FileCompiler/compiled.php")
        .exists());
    Ok(())
}

#[test]
fn purge_rejects_path_outside_cache_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .args(["purge", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(temp
        .path()
        .join("site/assets/cache/FileCompiler/compiled.php")
        .exists());
    Ok(())
}

#[test]
fn version_get_is_stable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let first = cachectl(&temp)
        .args(["version", "get", "css", "--silent"])
        .output()?;
    let second = cachectl(&temp)
        .args(["version", "get", "css", "--silent"])
        .output()?;

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn version_refresh_accepts_explicit_token() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .args(["version", "refresh", "js", "--token", "build-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build-42"));
    cachectl(&temp)
        .args(["version", "get", "js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build-42"));
    Ok(())
}

#[test]
fn dirs_lists_cache_folders() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .arg("dirs")
        .assert()
        .success()
        .stdout(predicate::str::contains("FileCompiler"))
        .stdout(predicate::str::contains("Page (template render cache)"));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .args(["--config", "nope.yml", "dirs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn unknown_action_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cachectl(&temp)
        .args(["run", "warm-up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action: warm-up"));
    Ok(())
}

#[test]
fn clear_all_runs_configured_steps() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(CLEAR_ALL_CONFIG));
    cachectl(&temp)
        .arg("clear-all")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted cache entries in namespaces: site-search",
        ))
        .stdout(predicate::str::contains("Cleared the template render cache"))
        .stdout(predicate::str::contains("Cleared all asset versions"))
        .stdout(predicate::str::contains("All configured caches cleared"));

    let log = fs::read_to_string(temp.path().join(".cachectl/logs/cache-control.txt"))?;
    assert_eq!(log.lines().count(), 3);
    assert!(!temp
        .path()
        .join("site/assets/cache/Page/blog/index.html")
        .exists());
    Ok(())
}

#[test]
fn cache_root_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let other = temp.path().join("other-cache/Page");
    fs::create_dir_all(&other)?;
    fs::write(other.join("a.html"), "x")?;

    cachectl(&temp)
        .args(["--cache-root", "other-cache", "purge", "Page"])
        .assert()
        .success();

    assert!(!other.join("a.html").exists());
    assert!(temp
        .path()
        .join("site/assets/cache/Page/blog/index.html")
        .exists());
    Ok(())
}
