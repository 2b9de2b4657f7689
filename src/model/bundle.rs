use serde::{Deserialize, Serialize};

/// A bundle definition as persisted in the catalogue settings record.
///
/// `config` lists the member item keys as of the last sync. `path`, when
/// set, overrides the default file-store location and is relative to the
/// deployment base directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDefinition {
    pub name: String,
    pub label: String,
    pub config: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The catalogue settings record, stored whole as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueRecord {
    #[serde(default)]
    pub bundles: Vec<BundleDefinition>,
}

/// A bundle discovered in the file store: its label and member keys, as
/// read from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredBundle {
    pub label: String,
    pub config: Vec<String>,
}

/// The merged, read-only view of a bundle across both backing stores.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub name: String,
    pub label: String,
    pub config: Vec<String>,
    pub path: Option<String>,
    pub in_db: bool,
    pub in_file: bool,
    pub url: Option<String>,
}
