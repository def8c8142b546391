//! End-to-end tests of the cache-clearing library API.

use std::fs;

use cachectl::actions::{ActionRegistry, CLEAR_ALL_ACTION_ID};
use cachectl::config::{load_config, ClearAllSettings};
use cachectl::oplog::{FileLogSink, MemorySink, OperationLog};
use cachectl::store::{Expiry, FileStore, KeyValueStore, MemoryStore};
use cachectl::tools::{CacheTools, ASSET_VERSION_NAMESPACE};
use tempfile::TempDir;

fn populated_cache_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("Page");
    fs::create_dir_all(page.join("b").join("c")).unwrap();
    fs::write(page.join("a"), "cached").unwrap();
    fs::write(page.join("b").join("c").join("index.html"), "<html>").unwrap();
    fs::create_dir_all(temp.path().join("FileCompiler")).unwrap();
    fs::write(temp.path().join("FileCompiler").join("compiled.php"), "x").unwrap();
    temp
}

#[test]
fn clear_all_scenario_logs_one_message_per_action() {
    let root = populated_cache_root();
    let store = MemoryStore::new();
    store
        .save_for("site-search", "q:cache", "[1,2,3]", Expiry::after_seconds(3600))
        .unwrap();
    store
        .save_for("menus", "main", "<ul>", Expiry::Never)
        .unwrap();
    let sink = MemorySink::new();
    let log = OperationLog::new(sink.clone());
    let tools = CacheTools::new(&store, root.path(), &log);
    let css = tools.get_version("css").unwrap();
    let before = log.new_messages().len();

    let settings = ClearAllSettings {
        expire_all: false,
        delete_all: false,
        delete_namespaces: vec!["site-search".into()],
        clear_directories: vec!["Page".into()],
        clear_asset_versions: true,
        clear_full_page_cache: false,
    };
    ActionRegistry::with_defaults(settings)
        .run(CLEAR_ALL_ACTION_ID, &tools)
        .unwrap();

    let messages = log.new_messages();
    assert_eq!(messages.len() - before, 3);
    assert!(root.path().join("Page").is_dir());
    assert_eq!(fs::read_dir(root.path().join("Page")).unwrap().count(), 0);
    assert!(root
        .path()
        .join("FileCompiler")
        .join("compiled.php")
        .exists());
    assert!(store.get_for("site-search", "q:cache").unwrap().is_none());
    assert!(store.get_for("menus", "main").unwrap().is_some());
    assert!(store
        .get_for(ASSET_VERSION_NAMESPACE, "css")
        .unwrap()
        .is_none());
    assert_ne!(tools.get_version("css").unwrap(), css);
}

#[test]
fn silent_session_still_accepts_explicit_messages() {
    let root = populated_cache_root();
    let store = MemoryStore::new();
    let sink = MemorySink::new();
    let log = OperationLog::new(sink.clone());
    let tools = CacheTools::new(&store, root.path(), &log).silent();

    tools.clear_namespaces(&["ns1", "ns2"]).unwrap();
    tools.purge_directory("Page").unwrap();
    tools.log().log_message("nightly maintenance finished").unwrap();

    assert_eq!(sink.messages(), vec!["nightly maintenance finished"]);
}

#[test]
fn file_backed_setup_round_trips_through_config() {
    let project = TempDir::new().unwrap();
    let dir = project.path().join(".cachectl");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        "cache_root: cache\nclear_all:\n  delete_namespaces: |\n    site-search\n    menus\n",
    )
    .unwrap();
    fs::create_dir_all(project.path().join("cache/Page")).unwrap();
    fs::write(project.path().join("cache/Page/home.html"), "<html>").unwrap();

    let config = load_config(project.path(), None).unwrap();
    let store = FileStore::new(&config.store_path);
    store
        .save_for("menus", "main", "<ul>", Expiry::Never)
        .unwrap();
    let log = OperationLog::new(FileLogSink::new(&config.log_path));
    let tools = CacheTools::new(&store, &config.cache_root, &log);

    ActionRegistry::with_defaults(config.clear_all.clone())
        .run(CLEAR_ALL_ACTION_ID, &tools)
        .unwrap();

    assert!(!project.path().join("cache/Page/home.html").exists());
    assert!(store.get_for("menus", "main").unwrap().is_none());
    let written = fs::read_to_string(&config.log_path).unwrap();
    assert!(written.contains("site-search, menus"));
    assert!(written.contains("Cleared the template render cache"));
}
