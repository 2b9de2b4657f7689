use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{open_engine, EngineOptions};
use crate::sync::{DiffReport, SyncScope};

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

    let report = engine
        .diff(&SyncScope::parse(&bundle))
        .context("diff failed")?;

    match report {
        DiffReport::Identical => println!("Both versions are identical."),
        DiffReport::Differences(diff) => {
            if !diff.only_in_file.is_empty() {
                println!("Options only in files (pull to load):");
                for (key, value) in &diff.only_in_file {
                    println!("  {key} = {value}");
                }
            }
            if !diff.only_in_registry.is_empty() {
                println!("Options only in the registry (push to write to file):");
                for (key, value) in &diff.only_in_registry {
                    println!("  {key} = {value}");
                }
            }
            if !diff.changed.is_empty() {
                println!("Options that differ:");
                for (key, change) in &diff.changed {
                    println!("  {key}: file={}, registry={}", change.file, change.registry);
                }
            }
        }
    }
    Ok(())
}
