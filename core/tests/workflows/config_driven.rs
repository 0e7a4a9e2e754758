// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use std::path::PathBuf;

use agenda_core::{Config, DEFAULT_STORE_PATH, Store};

use crate::common::{setup_temp_store, test_config};

#[test]
fn config_from_toml_points_the_store() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let toml = format!("store_path = {:?}", temp.store_path.display().to_string());

    // Act
    let mut config: Config = toml::from_str(&toml).unwrap();
    config.normalize().unwrap();
    let store = Store::new(&config.store_path);
    store.prepare().unwrap();

    // Assert
    assert_eq!(store.path(), temp.store_path);
    assert!(temp.store_path.exists());
}

#[test]
fn config_default_store_is_relative() {
    let mut config = Config::default();
    config.normalize().unwrap();
    assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    assert!(config.store_path.is_relative());
}

#[test]
fn config_absolute_path_is_kept() {
    let temp = setup_temp_store().unwrap();
    let mut config = test_config(&temp.store_path);
    config.normalize().unwrap();
    assert_eq!(config.store_path, temp.store_path);
}
