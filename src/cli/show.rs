use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{open_engine, EngineOptions};

pub fn run(
    data_dir: Option<&PathBuf>,
    bundle: String,
    network: bool,
    tenant: Option<u64>,
) -> Result<()> {
    let engine = open_engine(EngineOptions {
        data_dir,
        folder: None,
        network,
        tenant,
    })?;

    let file = engine.file_values(&bundle);
    let registry = engine
        .registry_values(&bundle)
        .context("failed to read registry values")?;

    if file.is_empty() && registry.is_empty() {
        anyhow::bail!("bundle '{bundle}' not found");
    }

    if let Some(resolved) = engine.bundle_by_name(&bundle) {
        println!("{} ({})", resolved.name, resolved.label);
    }

    let keys: BTreeSet<&String> = file.keys().chain(registry.keys()).collect();
    for key in keys {
        let file_value = file
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let registry_value = registry
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        println!("  {key}: file={file_value}, registry={registry_value}");
    }
    Ok(())
}
