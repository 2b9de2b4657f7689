use std::collections::BTreeMap;

use serde_json::Value;

/// Result of comparing a bundle's file and registry representations.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffReport {
    Identical,
    Differences(BundleDiff),
}

/// The three diff partitions. Rendering is the front end's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleDiff {
    pub only_in_registry: BTreeMap<String, Value>,
    pub only_in_file: BTreeMap<String, Value>,
    pub changed: BTreeMap<String, ChangedValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangedValue {
    pub file: Value,
    pub registry: Value,
}

/// Partition the two flattened maps. `.label` must already be stripped from
/// the file side.
pub fn compare(
    file: &BTreeMap<String, Value>,
    registry: &BTreeMap<String, Value>,
) -> DiffReport {
    if file == registry {
        return DiffReport::Identical;
    }

    let mut diff = BundleDiff::default();
    for (key, value) in registry {
        match file.get(key) {
            None => {
                diff.only_in_registry.insert(key.clone(), value.clone());
            }
            Some(file_value) if file_value != value => {
                diff.changed.insert(
                    key.clone(),
                    ChangedValue {
                        file: file_value.clone(),
                        registry: value.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }
    for (key, value) in file {
        if !registry.contains_key(key) {
            diff.only_in_file.insert(key.clone(), value.clone());
        }
    }

    DiffReport::Differences(diff)
}
