use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;

use crate::error::ConfsyncError;
use crate::model::item::DEFAULT_GROUP;
use crate::model::ConfigItem;
use crate::store::registry::ConfigItemRegistry;

/// Parameters handed to a value writer for a single key.
#[derive(Debug, Clone)]
pub struct WriteParams {
    pub key: String,
    pub group: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// How a single configuration value is persisted. Implementations report
/// success as a boolean; they never abort the surrounding write loop.
pub trait ValueWriter {
    fn write(&self, registry: &mut dyn ConfigItemRegistry, params: &WriteParams) -> bool;
}

/// Default writer: put the value straight into the registry's flat
/// key-value namespace.
pub struct DirectWrite;

impl ValueWriter for DirectWrite {
    fn write(&self, registry: &mut dyn ConfigItemRegistry, params: &WriteParams) -> bool {
        registry
            .set_value(&params.key, params.new_value.clone())
            .is_ok()
    }
}

/// Override point for writer selection: receives the statically resolved
/// writer and the call parameters, returns the writer to use.
pub type WriterHook = Box<dyn Fn(Arc<dyn ValueWriter>, &WriteParams) -> Arc<dyn ValueWriter>>;

/// Reads and writes configuration values through the external registry.
///
/// Writes dispatch through a per-item `ValueWriter`: the item's named writer
/// when registered, otherwise `DirectWrite`. The resolution can be overridden
/// with a hook. Each key is processed independently; the aggregate result is
/// a single boolean per batch.
pub struct RegistryBridge {
    registry: Box<dyn ConfigItemRegistry>,
    writers: HashMap<String, Arc<dyn ValueWriter>>,
    hook: Option<WriterHook>,
    default_writer: Arc<dyn ValueWriter>,
}

impl RegistryBridge {
    pub fn new(registry: Box<dyn ConfigItemRegistry>) -> Self {
        Self {
            registry,
            writers: HashMap::new(),
            hook: None,
            default_writer: Arc::new(DirectWrite),
        }
    }

    /// Register a named writer that items can declare via their `writer`
    /// field. An undeclared or unregistered name falls back to the default.
    pub fn register_writer(&mut self, name: impl Into<String>, writer: Arc<dyn ValueWriter>) {
        self.writers.insert(name.into(), writer);
    }

    pub fn set_writer_hook(&mut self, hook: WriterHook) {
        self.hook = Some(hook);
    }

    pub fn items(&self) -> Result<BTreeMap<String, ConfigItem>, ConfsyncError> {
        self.registry.items()
    }

    /// Current values for exactly the given keys; unknown keys are omitted.
    pub fn read_values(&self, keys: &[String]) -> Result<BTreeMap<String, Value>, ConfsyncError> {
        let items = self.registry.items()?;
        Ok(keys
            .iter()
            .filter_map(|key| items.get(key).map(|item| (key.clone(), item.value.clone())))
            .collect())
    }

    /// Write every value through its resolved writer. Returns true only when
    /// every key succeeded; a failing key never stops the remaining writes.
    pub fn write_values(&mut self, values: &BTreeMap<String, Value>) -> Result<bool, ConfsyncError> {
        let items = self.registry.items()?;
        let mut all_ok = true;

        for (key, new_value) in values {
            let item = items.get(key);
            let params = WriteParams {
                key: key.clone(),
                group: item
                    .map(|i| i.group.clone())
                    .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
                old_value: item.map(|i| i.value.clone()).unwrap_or(Value::Null),
                new_value: new_value.clone(),
            };

            let mut writer = item
                .and_then(|i| i.writer.as_deref())
                .and_then(|name| self.writers.get(name))
                .cloned()
                .unwrap_or_else(|| self.default_writer.clone());
            if let Some(hook) = &self.hook {
                writer = hook(writer, &params);
            }

            if !writer.write(self.registry.as_mut(), &params) {
                tracing::debug!(key = %key, "value writer reported failure");
                all_ok = false;
            }
        }
        Ok(all_ok)
    }
}
