use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{open_engine, EngineOptions};
use crate::model::group_items;

pub fn run(data_dir: Option<&PathBuf>, network: bool, tenant: Option<u64>) -> Result<()> {
    let engine = open_engine(EngineOptions {
        data_dir,
        folder: None,
        network,
        tenant,
    })?;

    let items = engine.items().context("failed to read registry items")?;
    if items.is_empty() {
        println!("No items in the registry.");
        return Ok(());
    }

    for (group, members) in group_items(&items) {
        println!("{group}:");
        for (key, item) in members {
            println!("  {key} = {}", item.value);
        }
    }
    Ok(())
}
