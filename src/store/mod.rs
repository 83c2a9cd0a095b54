pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::prefs::KeyValueStore;
use anyhow::Result;
use disk::DiskStore;

/// Opens the on-disk preference store under the configured data path.
pub fn open_store(config: &AppConfig) -> Result<Box<dyn KeyValueStore>> {
    let path = config.data_path()?.join("preferences");
    Ok(Box::new(DiskStore::open(&path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_open_store_under_data_path() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().to_string()),
            ..AppConfig::default()
        };
        let store = open_store(&config).unwrap();
        store.set("theme", "dark").unwrap();
        assert!(dir.path().join("preferences").is_dir());
    }

    #[test]
    fn test_open_store_fails_when_data_path_is_a_file() {
        let file = NamedTempFile::new().unwrap();
        let config = AppConfig {
            data_path: Some(file.path().to_string_lossy().to_string()),
            ..AppConfig::default()
        };
        let err = open_store(&config).err().expect("Opening should fail");
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
