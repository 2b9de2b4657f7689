use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ConfsyncError;
use crate::model::ConfigItem;

/// The external key-value registry of configuration items.
///
/// `set_value` is the flat-namespace write used by the default value writer;
/// items written this way are created on first write.
pub trait ConfigItemRegistry {
    fn items(&self) -> Result<BTreeMap<String, ConfigItem>, ConfsyncError>;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfsyncError>;
}

/// Registry backed by a single JSON file. A missing file is an empty
/// registry; every write persists the whole file.
pub struct JsonRegistry {
    path: PathBuf,
    items: BTreeMap<String, ConfigItem>,
}

impl JsonRegistry {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfsyncError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| ConfsyncError::RegistryParse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(_) => BTreeMap::new(),
        };
        Ok(Self { path, items })
    }

    fn persist(&self) -> Result<(), ConfsyncError> {
        let contents = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, contents + "\n").map_err(|source| ConfsyncError::FileWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigItemRegistry for JsonRegistry {
    fn items(&self) -> Result<BTreeMap<String, ConfigItem>, ConfsyncError> {
        Ok(self.items.clone())
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfsyncError> {
        match self.items.get_mut(key) {
            Some(item) => item.value = value,
            None => {
                self.items.insert(key.to_string(), ConfigItem::new(value));
            }
        }
        self.persist()
    }
}
