// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use cardbox::Config;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.default_background_color, "#1C1C1E",
        "New cards should default to the dark background"
    );
    assert_eq!(
        config.default_text_color, "#FFFFFF",
        "New cards should default to white text"
    );
    assert!(config.store_path.is_none());
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(dir.path().join("does-not-exist.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, b"{ definitely broken").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        default_background_color: "#004488".to_string(),
        default_text_color: "#FFEE00".to_string(),
        store_path: Some(PathBuf::from("/tmp/cards.json")),
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, br##"{ "defaultTextColor": "#000000" }"##).unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.default_text_color, "#000000");
    assert_eq!(config.default_background_color, "#1C1C1E");
}
