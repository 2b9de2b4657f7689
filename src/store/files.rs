use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::model::{BundleDocument, DiscoveredBundle, TenantScope};

/// Reads and writes bundle documents under the deployment's working folder.
///
/// The folder is created at construction if missing and its writability is
/// checked once and cached; a folder that cannot be created or written
/// degrades to absent reads and failed writes rather than erroring.
pub struct FileStore {
    base: PathBuf,
    folder: PathBuf,
    folder_rel: String,
    default_folder: PathBuf,
    scope: TenantScope,
    public_url: String,
    folder_writable: bool,
}

impl FileStore {
    pub fn open(
        base: &Path,
        config_folder: &str,
        folder_override: Option<&str>,
        scope: TenantScope,
        config_url: Option<String>,
    ) -> Self {
        let folder_rel = folder_override.unwrap_or(config_folder).to_string();
        let folder = base.join(&folder_rel);
        let default_folder = base.join(config_folder);

        if !folder.is_dir() {
            if let Err(err) = fs::create_dir_all(&folder) {
                tracing::warn!(folder = %folder.display(), error = %err, "cannot create working folder");
            }
        }
        let folder_writable = is_writable(&folder);
        if !folder_writable {
            tracing::warn!(folder = %folder.display(), "working folder is not writable");
        }

        Self {
            base: base.to_path_buf(),
            folder,
            folder_rel,
            default_folder,
            scope,
            public_url: config_url.unwrap_or_else(|| config_folder.to_string()),
            folder_writable,
        }
    }

    /// Whether the active working folder is the deployment default.
    pub fn is_default(&self) -> bool {
        self.folder == self.default_folder
    }

    /// The active working folder, relative to the base directory.
    pub fn working_rel(&self) -> String {
        self.folder_rel.clone()
    }

    /// Compute the on-disk path for a bundle. The tenant prefix takes
    /// precedence over custom-path logic; a custom path is only honored
    /// while the active folder is the default one.
    pub fn resolve_filename(&self, name: &str, custom_path: Option<&str>) -> PathBuf {
        if self.scope.is_multi_tenant() {
            let prefix = self.scope.filename_prefix();
            return self.folder.join(format!("{prefix}{name}.json"));
        }
        match custom_path {
            Some(path) if self.is_default() => self.base.join(path).join(format!("{name}.json")),
            _ => self.folder.join(format!("{name}.json")),
        }
    }

    /// Display URL for a resolved bundle file.
    pub fn url_for(&self, name: &str, custom_path: Option<&str>) -> String {
        let filename = self.resolve_filename(name, custom_path);
        let basename = filename
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        match custom_path {
            Some(path) => format!("{path}/{basename}"),
            None => format!("{}/{}", self.public_url, basename),
        }
    }

    /// Read a bundle document. Missing, unreadable, invalid, or label-less
    /// files are all absent.
    pub fn read(&self, name: &str, custom_path: Option<&str>) -> Option<BundleDocument> {
        let path = self.resolve_filename(name, custom_path);
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "not a bundle document");
                None
            }
        }
    }

    /// Write a bundle document, returning false when the target cannot be
    /// written: an existing file must itself be writable, a new file needs a
    /// writable containing folder.
    pub fn write(&self, name: &str, custom_path: Option<&str>, document: &BundleDocument) -> bool {
        let path = self.resolve_filename(name, custom_path);
        if path.exists() {
            if !is_writable(&path) {
                return false;
            }
        } else {
            let writable = match path.parent() {
                Some(dir) if dir == self.folder => self.folder_writable,
                Some(dir) => is_writable(dir),
                None => false,
            };
            if !writable {
                return false;
            }
        }

        let data = match serde_json::to_string_pretty(document) {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!(bundle = name, error = %err, "cannot serialize bundle document");
                return false;
            }
        };
        match fs::write(&path, data + "\n") {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "bundle write failed");
                false
            }
        }
    }

    /// Delete a bundle file if it is writable.
    pub fn delete(&self, name: &str, custom_path: Option<&str>) -> bool {
        let path = self.resolve_filename(name, custom_path);
        if !is_writable(&path) {
            return false;
        }
        fs::remove_file(&path).is_ok()
    }

    /// Scan the active folder for bundle documents. In multi-tenant mode
    /// only filenames carrying the current scope's prefix are accepted; the
    /// bundle name is the filename with prefix and extension stripped.
    pub fn discover(&self) -> BTreeMap<String, DiscoveredBundle> {
        let mut output = BTreeMap::new();
        let prefix = self.scope.filename_prefix();

        for entry in WalkDir::new(&self.folder).min_depth(1).max_depth(1) {
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            let Some(stem) = filename.strip_suffix(".json") else {
                continue;
            };
            let name = if self.scope.is_multi_tenant() {
                match stem.strip_prefix(&prefix) {
                    Some(rest) if !rest.is_empty() => rest,
                    _ => continue,
                }
            } else {
                stem
            };
            if let Some(document) = self.read(name, None) {
                output.insert(
                    name.to_string(),
                    DiscoveredBundle {
                        label: document.label.clone(),
                        config: document.keys(),
                    },
                );
            }
        }
        output
    }

    /// Direct reads at catalogue-declared custom paths; no directory scan.
    pub fn discover_at_custom_paths(
        &self,
        paths: &BTreeMap<String, String>,
    ) -> BTreeMap<String, DiscoveredBundle> {
        let mut output = BTreeMap::new();
        for (name, path) in paths {
            if let Some(document) = self.read(name, Some(path)) {
                output.insert(
                    name.clone(),
                    DiscoveredBundle {
                        label: document.label.clone(),
                        config: document.keys(),
                    },
                );
            }
        }
        output
    }
}

fn is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => !meta.permissions().readonly(),
        Err(_) => false,
    }
}
