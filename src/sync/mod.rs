pub mod bridge;
pub mod diff;
pub mod resolve;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ConfsyncError;
use crate::model::{Bundle, BundleDefinition, BundleDocument, ConfigItem};
use crate::store::{BundleCatalogue, FileStore};

pub use bridge::RegistryBridge;
pub use diff::{BundleDiff, ChangedValue, DiffReport};

/// Scope of a sync operation: one named bundle, or every known one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    All,
    Bundle(String),
}

impl SyncScope {
    /// `"all"` is the literal batch token; anything else is a bundle name.
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Bundle(raw.to_string())
        }
    }
}

/// Per-bundle result of a batch operation. Failures are scoped to the
/// bundle; they never abort the rest of the batch.
#[derive(Debug)]
pub struct BundleOutcome {
    pub bundle: String,
    pub result: Result<(), ConfsyncError>,
}

/// The synchronization engine. Owns its collaborators outright; there is no
/// ambient lookup.
///
/// Operations are one-shot and non-resumable. Catalogue persistence is a
/// single whole-record write at the end of each operation, so two concurrent
/// operations can lose each other's catalogue updates (last write wins).
pub struct SyncEngine {
    catalogue: BundleCatalogue,
    files: FileStore,
    bridge: RegistryBridge,
}

impl SyncEngine {
    pub fn new(catalogue: BundleCatalogue, files: FileStore, bridge: RegistryBridge) -> Self {
        Self {
            catalogue,
            files,
            bridge,
        }
    }

    /// The merged resolved view of both stores.
    pub fn bundles(&self) -> BTreeMap<String, Bundle> {
        resolve::resolve(&self.catalogue, &self.files)
    }

    /// Known bundle names. With an overridden working folder only the
    /// folder's own files count; otherwise the resolved view's names.
    pub fn bundle_names(&self) -> Vec<String> {
        if self.files.is_default() {
            self.bundles().into_keys().collect()
        } else {
            self.files.discover().into_keys().collect()
        }
    }

    pub fn bundle_by_name(&self, name: &str) -> Option<Bundle> {
        self.bundles().remove(name)
    }

    /// Registry items, for display grouping.
    pub fn items(&self) -> Result<BTreeMap<String, ConfigItem>, ConfsyncError> {
        self.bridge.items()
    }

    /// A bundle's file-side values, `.label` excluded. Absent file reads as
    /// empty.
    pub fn file_values(&self, name: &str) -> BTreeMap<String, Value> {
        let paths = self.catalogue.paths_by_bundle_name();
        self.files
            .read(name, paths.get(name).map(String::as_str))
            .map(|document| document.values)
            .unwrap_or_default()
    }

    /// A bundle's registry-side values: the catalogue definition's member
    /// keys looked up in the registry. No definition reads as empty.
    pub fn registry_values(&self, name: &str) -> Result<BTreeMap<String, Value>, ConfsyncError> {
        let definitions = self.catalogue.load();
        let Some(def) = definitions.iter().find(|d| d.name == name) else {
            return Ok(BTreeMap::new());
        };
        self.bridge.read_values(&def.config)
    }

    /// Import bundle files into the registry. `All` expands to the file
    /// store's discovery; files are the source of truth here.
    pub fn pull(&mut self, scope: &SyncScope) -> Result<Vec<BundleOutcome>, ConfsyncError> {
        let paths = self.catalogue.paths_by_bundle_name();
        let names: Vec<String> = match scope {
            SyncScope::All => {
                let mut discovered = self.files.discover();
                discovered.extend(self.files.discover_at_custom_paths(&paths));
                discovered.into_keys().collect()
            }
            SyncScope::Bundle(name) => vec![name.clone()],
        };

        let mut definitions = self.catalogue.load();
        let mut outcomes = Vec::new();

        for name in names {
            let custom = paths.get(&name).map(String::as_str);
            let Some(document) = self.files.read(&name, custom) else {
                outcomes.push(BundleOutcome {
                    bundle: name.clone(),
                    result: Err(ConfsyncError::BundleNotFound { name }),
                });
                continue;
            };

            let clean = self.bridge.write_values(&document.values)?;
            self.upsert_definition(&mut definitions, &name, &document);
            tracing::debug!(bundle = %name, keys = document.values.len(), "pulled bundle");

            outcomes.push(BundleOutcome {
                bundle: name.clone(),
                result: if clean {
                    Ok(())
                } else {
                    Err(ConfsyncError::PartialWrite { name })
                },
            });
        }

        self.catalogue.save(definitions)?;
        Ok(outcomes)
    }

    /// Export registry values to bundle files. `All` expands to the
    /// resolved view; the registry/catalogue side is the source of truth.
    pub fn push(&mut self, scope: &SyncScope) -> Result<Vec<BundleOutcome>, ConfsyncError> {
        let resolved = self.bundles();
        let stored_paths = self.catalogue.paths_by_bundle_name();
        let names: Vec<String> = match scope {
            SyncScope::All => resolved.keys().cloned().collect(),
            SyncScope::Bundle(name) => vec![name.clone()],
        };

        let mut definitions = self.catalogue.load();
        let mut outcomes = Vec::new();

        for name in names {
            let Some(bundle) = resolved.get(&name) else {
                outcomes.push(BundleOutcome {
                    bundle: name.clone(),
                    result: Err(ConfsyncError::BundleNotFound { name }),
                });
                continue;
            };

            // The definition is re-added below with fresh metadata.
            definitions.retain(|d| d.name != name);

            let values = self.bridge.read_values(&bundle.config)?;
            let document = BundleDocument::new(bundle.label.clone(), values);
            let path = if !self.files.is_default() {
                Some(self.files.working_rel())
            } else {
                stored_paths.get(&name).cloned()
            };

            let written = self.files.write(&name, path.as_deref(), &document);
            tracing::debug!(bundle = %name, written, "pushed bundle");
            definitions.push(BundleDefinition {
                name: name.clone(),
                label: bundle.label.clone(),
                config: bundle.config.clone(),
                path: path.clone(),
            });

            outcomes.push(BundleOutcome {
                bundle: name.clone(),
                result: if written {
                    Ok(())
                } else {
                    Err(ConfsyncError::TargetNotWritable {
                        path: self.files.resolve_filename(&name, path.as_deref()),
                        name,
                    })
                },
            });
        }

        self.catalogue.save(definitions)?;
        Ok(outcomes)
    }

    /// Compare the file and registry representations. `All` flattens every
    /// known bundle into one map per side, later bundles overwriting earlier
    /// keys.
    pub fn diff(&self, scope: &SyncScope) -> Result<DiffReport, ConfsyncError> {
        let names: Vec<String> = match scope {
            SyncScope::All => self.bundle_names(),
            SyncScope::Bundle(name) => vec![name.clone()],
        };

        let mut file_map = BTreeMap::new();
        let mut registry_map = BTreeMap::new();
        for name in &names {
            file_map.extend(self.file_values(name));
            registry_map.extend(self.registry_values(name)?);
        }

        Ok(diff::compare(&file_map, &registry_map))
    }

    fn upsert_definition(
        &self,
        definitions: &mut Vec<BundleDefinition>,
        name: &str,
        document: &BundleDocument,
    ) {
        let path = (!self.files.is_default()).then(|| self.files.working_rel());
        match definitions.iter_mut().find(|d| d.name == name) {
            Some(def) => {
                def.label = document.label.clone();
                def.config = document.keys();
                def.path = path;
            }
            None => definitions.push(BundleDefinition {
                name: name.to_string(),
                label: document.label.clone(),
                config: document.keys(),
                path,
            }),
        }
    }
}
