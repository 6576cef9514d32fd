// src/storage/mod.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::utils::error::StorageError;

/// Reads and writes markdown documents and the settings file on local disk.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Reads the document, or `None` if the file does not exist.
    pub fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                tracing::debug!("Read {} bytes from {}", content.len(), self.path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    pub fn write(&self, content: &str) -> Result<(), StorageError> {
        fs::write(&self.path, content).map_err(StorageError::IoError)?;
        tracing::info!("Saved document to {}", self.path.display());
        Ok(())
    }
}

/// Writes `settings` as TOML to `path`. An existing file is only replaced when `force` is set.
pub fn save_settings(path: &Path, settings: &Settings, force: bool) -> Result<PathBuf, StorageError> {
    if path.exists() && !force {
        return Err(StorageError::FileExists(path.display().to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(StorageError::IoError)?;
    }

    let contents = settings
        .to_toml()
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(path, contents).map_err(StorageError::IoError)?;

    tracing::info!("Saved settings to {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("note.md"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("note.md"));
        store.write("# Summary\nText").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("# Summary\nText"));
    }

    #[test]
    fn test_save_settings_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("settings.toml");
        let settings = Settings { api_key: Some("sk-test".to_string()), ..Settings::default() };

        save_settings(&path, &settings, false).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), settings);

        assert!(matches!(
            save_settings(&path, &Settings::default(), false),
            Err(StorageError::FileExists(_))
        ));

        save_settings(&path, &Settings::default(), true).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), Settings::default());
    }
}
