//! ファイルバックエンド
//!
//! ブラウザのlocalStorageと同じく キー → 文字列 を保持する。
//! 1キー1ファイル (`<dir>/<key>.json`) で、書き込みは常に全体上書き。

use microspotter_common::{KeyValueStore, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        assert!(storage.get_item("uploadedImages").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let nested = dir.path().join("a").join("b");
        let mut storage = FileStorage::new(&nested);

        storage.set_item("uploadedImages", "{}").unwrap();
        assert!(nested.join("uploadedImages.json").exists());
        assert_eq!(storage.get_item("uploadedImages").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut storage = FileStorage::new(dir.path());
        storage.set_item("k", "first").unwrap();
        storage.set_item("k", "second").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
    }
}
