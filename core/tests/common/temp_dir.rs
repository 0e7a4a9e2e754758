// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary store files for integration tests.

use std::fs;
use std::path::PathBuf;

use agenda_core::Store;
use tempfile::TempDir;

/// A store file inside a temporary directory.
///
/// The directory and everything in it is removed when dropped.
#[derive(Debug)]
pub struct TempStore {
    dir: TempDir,
    /// Path of the store file, which is not created up front.
    pub store_path: PathBuf,
}

impl TempStore {
    /// Creates a new temporary directory holding no store file yet.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store_path = dir.path().join("schedule_data.txt");
        Ok(Self { dir, store_path })
    }

    /// The temporary directory.
    #[allow(dead_code)]
    pub fn base(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// A store backed by the temporary file.
    pub fn store(&self) -> Store {
        Store::new(&self.store_path)
    }

    /// Writes raw content to the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    #[allow(dead_code)]
    pub fn write(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(&self.store_path, content)?;
        Ok(())
    }

    /// Reads the raw content of the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if file reading fails.
    #[allow(dead_code)]
    pub fn read(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(&self.store_path)?)
    }
}

/// Sets up a temporary store for integration tests.
///
/// This is a convenience wrapper around [`TempStore::new`].
///
/// # Example
///
/// ```ignore
/// let temp = setup_temp_store()?;
/// let outcome = temp.store().load()?;
/// ```
pub fn setup_temp_store() -> Result<TempStore, Box<dyn std::error::Error>> {
    TempStore::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_store_starts_without_a_file() {
        let temp = TempStore::new().unwrap();
        assert!(temp.base().is_dir());
        assert!(!temp.store_path.exists());
    }

    #[test]
    fn temp_store_cleanup_on_drop() {
        let base = {
            let temp = TempStore::new().unwrap();
            temp.write("").unwrap();
            temp.base()
        };
        assert!(!base.exists());
    }
}
