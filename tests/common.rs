#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fresh, empty directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtodo_test_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temporary output file path, removed if it already exists.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtodo_{}_{}_out.{}", name, std::process::id(), ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `rtodo` bound to an isolated home and storage directory.
pub fn rtodo(storage: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rtodo");
    cmd.env("HOME", storage.join("home"))
        .args(["--storage", &storage.to_string_lossy()]);
    cmd
}

/// Initialize an empty list in test mode.
pub fn init_storage(storage: &PathBuf) {
    rtodo(storage).args(["--test", "init"]).assert().success();
}

/// Raw JSON stored under the default key.
pub fn stored_json(storage: &PathBuf) -> serde_json::Value {
    let content =
        fs::read_to_string(storage.join("my-todo-list.json")).expect("read stored list");
    serde_json::from_str(&content).expect("stored list is JSON")
}

/// Ids of the stored items, in order.
pub fn stored_ids(storage: &PathBuf) -> Vec<i64> {
    stored_json(storage)
        .as_array()
        .expect("stored list is an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("integer id"))
        .collect()
}
