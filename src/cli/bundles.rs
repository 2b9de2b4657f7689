use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{open_engine, EngineOptions};

pub fn run(data_dir: Option<&PathBuf>, network: bool, tenant: Option<u64>) -> Result<()> {
    let engine = open_engine(EngineOptions {
        data_dir,
        folder: None,
        network,
        tenant,
    })?;

    let bundles = engine.bundles();
    if bundles.is_empty() {
        println!("No bundles found.");
        return Ok(());
    }

    for bundle in bundles.values() {
        let provenance = match (bundle.in_db, bundle.in_file) {
            (true, true) => "db+file",
            (true, false) => "db",
            (false, true) => "file",
            (false, false) => "-",
        };
        let path = bundle
            .path
            .as_ref()
            .map(|p| format!(" path={p}"))
            .unwrap_or_default();
        let url = bundle
            .url
            .as_ref()
            .map(|u| format!(" url={u}"))
            .unwrap_or_default();
        println!(
            "  {} ({}) [{provenance}]{path}{url} keys: {}",
            bundle.name,
            bundle.label,
            bundle.config.join(", ")
        );
    }
    Ok(())
}
