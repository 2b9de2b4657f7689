use std::collections::BTreeMap;

use crate::model::Bundle;
use crate::store::{BundleCatalogue, FileStore};

/// Merge catalogue definitions with file-store discovery into the unified
/// bundle view, keyed by name.
///
/// Catalogue entries are authoritative for label and member keys; file
/// presence only flips `in_file` and attaches a URL. Custom-path discoveries
/// win name collisions with the folder scan.
pub fn resolve(catalogue: &BundleCatalogue, files: &FileStore) -> BTreeMap<String, Bundle> {
    let mut output = BTreeMap::new();

    for def in catalogue.load() {
        output.insert(
            def.name.clone(),
            Bundle {
                name: def.name,
                label: def.label,
                config: def.config,
                path: def.path,
                in_db: true,
                in_file: false,
                url: None,
            },
        );
    }

    let paths = catalogue.paths_by_bundle_name();
    let mut discovered = files.discover();
    discovered.extend(files.discover_at_custom_paths(&paths));

    for (name, found) in discovered {
        let custom = paths.get(&name).map(String::as_str);
        let url = files.url_for(&name, custom);
        match output.get_mut(&name) {
            Some(bundle) => {
                bundle.in_file = true;
                bundle.url = Some(url);
            }
            None => {
                output.insert(
                    name.clone(),
                    Bundle {
                        name,
                        label: found.label,
                        config: found.config,
                        path: None,
                        in_db: false,
                        in_file: true,
                        url: Some(url),
                    },
                );
            }
        }
    }

    output
}
