use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{open_engine, report_outcomes, EngineOptions};
use crate::sync::SyncScope;

pub fn run(
    data_dir: Option<&PathBuf>,
    bundle: String,
    destination: Option<String>,
    network: bool,
    tenant: Option<u64>,
) -> Result<()> {
    let mut engine = open_engine(EngineOptions {
        data_dir,
        folder: destination.as_deref(),
        network,
        tenant,
    })?;

    let outcomes = engine
        .push(&SyncScope::parse(&bundle))
        .context("push failed")?;
    report_outcomes(&outcomes, "written to file")
}
