#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use switcher_core::{
    config::{Config, ConfigManager},
    storage::JsonFileStore,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated config manager and a config whose preference store lives
/// in its own temporary directory.
pub fn setup_test_env() -> (ConfigManager, Config) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let manager = ConfigManager::with_base_dir(base.clone()).expect("create config manager");
    let config = Config {
        storage_path: Some(base.join("preferences.json")),
        ..Config::default()
    };
    (manager, config)
}

pub fn open_store(config: &Config) -> JsonFileStore {
    config.open_store().expect("open preference store")
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9 * right.abs().max(1.0)
}
