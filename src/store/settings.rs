use std::fs;
use std::path::PathBuf;

use crate::error::ConfsyncError;

/// Opaque named-record accessor backing the bundle catalogue.
///
/// Records are raw strings; interpretation belongs to the caller. Absence is
/// a normal outcome, not an error.
pub trait SettingsStore {
    fn get(&self, record: &str) -> Option<String>;
    fn update(&mut self, record: &str, value: &str) -> Result<(), ConfsyncError>;
}

/// File-backed settings store: one JSON file per record under a settings
/// directory.
pub struct FileSettings {
    root: PathBuf,
}

impl FileSettings {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ConfsyncError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| ConfsyncError::DirCreate {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    fn record_path(&self, record: &str) -> PathBuf {
        self.root.join(format!("{record}.json"))
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, record: &str) -> Option<String> {
        fs::read_to_string(self.record_path(record)).ok()
    }

    fn update(&mut self, record: &str, value: &str) -> Result<(), ConfsyncError> {
        let path = self.record_path(record);
        fs::write(&path, value).map_err(|source| ConfsyncError::FileWrite { path, source })
    }
}
