use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Group assigned to items the registry knows nothing extra about.
pub const DEFAULT_GROUP: &str = "options";

/// A configuration item as stored in the registry, keyed externally by its
/// item key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigItem {
    pub value: Value,
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

impl ConfigItem {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            group: default_group(),
            writer: None,
        }
    }
}

/// Group items by their `group` field, preserving stable key order inside
/// each group.
pub fn group_items(
    items: &BTreeMap<String, ConfigItem>,
) -> BTreeMap<String, BTreeMap<String, ConfigItem>> {
    let mut output: BTreeMap<String, BTreeMap<String, ConfigItem>> = BTreeMap::new();
    for (key, item) in items {
        output
            .entry(item.group.clone())
            .or_default()
            .insert(key.clone(), item.clone());
    }
    output
}
