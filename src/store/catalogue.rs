use std::collections::BTreeMap;

use crate::error::ConfsyncError;
use crate::model::{BundleDefinition, CatalogueRecord};
use crate::store::settings::SettingsStore;

/// Name of the settings record holding the catalogue.
pub const CATALOGUE_RECORD: &str = "bundles";

/// The persisted list of bundle definitions, read and written as one
/// settings record. Name uniqueness is enforced by the sync engine before
/// `save`, not here.
pub struct BundleCatalogue {
    settings: Box<dyn SettingsStore>,
}

impl BundleCatalogue {
    pub fn new(settings: Box<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Load every definition. An absent or malformed record is an empty
    /// catalogue; parse errors never reach callers.
    pub fn load(&self) -> Vec<BundleDefinition> {
        let Some(raw) = self.settings.get(CATALOGUE_RECORD) else {
            return Vec::new();
        };
        match serde_json::from_str::<CatalogueRecord>(&raw) {
            Ok(record) => record.bundles,
            Err(err) => {
                tracing::warn!(error = %err, "malformed catalogue record, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole record with the given definitions.
    pub fn save(&mut self, bundles: Vec<BundleDefinition>) -> Result<(), ConfsyncError> {
        let record = CatalogueRecord { bundles };
        let raw = serde_json::to_string_pretty(&record)?;
        self.settings.update(CATALOGUE_RECORD, &raw)
    }

    /// Custom paths keyed by bundle name, for bundles that declare one.
    pub fn paths_by_bundle_name(&self) -> BTreeMap<String, String> {
        self.load()
            .into_iter()
            .filter_map(|bundle| bundle.path.map(|path| (bundle.name, path)))
            .collect()
    }
}
