use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bundle's file representation: a flat key/value map plus the reserved
/// `.label` key. A JSON document without `.label` is not a bundle document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDocument {
    #[serde(rename = ".label")]
    pub label: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl BundleDocument {
    pub fn new(label: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Member keys in stable order.
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
