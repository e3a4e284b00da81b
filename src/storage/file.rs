//! File-based storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use super::backend::{Result, StorageBackend};

/// File-based implementation of `StorageBackend`.
///
/// Each key maps to `{base_dir}/{key}.json`. Writes go through a temp
/// file and an atomic rename so a crash mid-write can never leave a
/// half-written record for the next session to load.
#[derive(Debug)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a new file backend rooted at `base_dir`.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("saved {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        tracing::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Some(bytes))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("deleted {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.load("game_data").unwrap(), None);

        storage.save("game_data", b"{\"points\":10}").unwrap();
        assert_eq!(
            storage.load("game_data").unwrap(),
            Some(b"{\"points\":10}".to_vec())
        );
        assert!(dir.path().join("game_data.json").exists());

        storage.delete("game_data").unwrap();
        assert_eq!(storage.load("game_data").unwrap(), None);
        assert!(!dir.path().join("game_data.json").exists());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.save("k", b"old").unwrap();
        storage.save("k", b"new").unwrap();

        assert_eq!(storage.load("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.save("k", b"value").unwrap();
        assert!(!dir.path().join("k.json.tmp").exists());
    }

    #[test]
    fn test_nested_base_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("saves").join("default");
        let storage = FileStorage::new(&nested).unwrap();

        storage.save("k", b"value").unwrap();
        assert!(nested.join("k.json").exists());
    }
}
