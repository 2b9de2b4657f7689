pub mod bundles;
pub mod config;
pub mod diff;
pub mod items;
pub mod pull;
pub mod push;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::error::ConfsyncError;
use crate::model::{GlobalConfig, TenantScope};
use crate::store::{BundleCatalogue, FileSettings, FileStore, JsonRegistry};
use crate::sync::{BundleOutcome, RegistryBridge, SyncEngine};

#[derive(Debug, Parser)]
#[command(
    name = "confsync",
    about = "Synchronize configuration bundles between JSON files and a key-value registry",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Override the data directory (default: ~/.local/share/confsync)
    #[arg(long, env = "CONFSYNC_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import bundle files into the registry
    Pull {
        /// The bundle name to import (or "all")
        bundle: String,

        /// Read bundles from this folder instead of the default one,
        /// relative to the base directory
        #[arg(long)]
        source: Option<String>,

        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// Export registry values to bundle files
    Push {
        /// The bundle name to export (or "all")
        bundle: String,

        /// Write bundles to this folder instead of the default one,
        /// relative to the base directory
        #[arg(long)]
        destination: Option<String>,

        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// Compare the file and registry versions of a bundle
    Diff {
        /// The bundle name to compare (or "all")
        bundle: String,

        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// List every bundle across both stores
    Bundles {
        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// Show a bundle's file and registry values side by side
    Show {
        /// The bundle name to inspect
        bundle: String,

        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// List registry items by group
    Items {
        /// Operate at network scope
        #[arg(long)]
        network: bool,

        /// Operate as this tenant
        #[arg(long, conflicts_with = "network")]
        tenant: Option<u64>,
    },

    /// Manage global configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., config_folder, multi_tenant)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

pub(crate) struct EngineOptions<'a> {
    pub data_dir: Option<&'a PathBuf>,
    pub folder: Option<&'a str>,
    pub network: bool,
    pub tenant: Option<u64>,
}

pub(crate) fn resolve_data_dir(data_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let root = match data_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_dir()
            .map(|d| d.join("confsync"))
            .ok_or(ConfsyncError::DataDirNotFound)?,
    };
    std::fs::create_dir_all(&root)
        .with_context(|| format!("failed to create {}", root.display()))?;
    Ok(root)
}

pub(crate) fn open_engine(opts: EngineOptions<'_>) -> Result<SyncEngine> {
    let data_dir = resolve_data_dir(opts.data_dir)?;
    let config = GlobalConfig::load(&data_dir).context("failed to load configuration")?;

    if let Some(folder) = opts.folder {
        if Path::new(folder).is_absolute() {
            anyhow::bail!("path must be relative to the base directory");
        }
    }

    let scope = tenant_scope(&config, opts.network, opts.tenant)?;
    let base = match &config.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let settings = FileSettings::open(data_dir.join("settings"))?;
    let registry = JsonRegistry::open(data_dir.join("registry.json"))?;
    let files = FileStore::open(
        &base,
        &config.config_folder,
        opts.folder,
        scope,
        config.config_url.clone(),
    );

    Ok(SyncEngine::new(
        BundleCatalogue::new(Box::new(settings)),
        files,
        RegistryBridge::new(Box::new(registry)),
    ))
}

fn tenant_scope(
    config: &GlobalConfig,
    network: bool,
    tenant: Option<u64>,
) -> Result<TenantScope> {
    if !config.multi_tenant {
        return Ok(TenantScope::Single);
    }
    if network {
        return Ok(TenantScope::Network);
    }
    let id = tenant
        .or(config.tenant_id)
        .ok_or(ConfsyncError::TenantRequired)?;
    Ok(TenantScope::Tenant(id))
}

/// Print per-bundle results and fail the process when any bundle failed.
pub(crate) fn report_outcomes(outcomes: &[BundleOutcome], verb: &str) -> Result<()> {
    if outcomes.is_empty() {
        println!("No bundles to process.");
        return Ok(());
    }

    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => println!("  {}: {verb}", outcome.bundle),
            Err(err) => {
                eprintln!("  {}: FAILED - {err}", outcome.bundle);
                failed += 1;
            }
        }
    }

    let done = outcomes.len() - failed;
    println!("\nComplete: {done} {verb}, {failed} failed");
    if failed > 0 {
        anyhow::bail!("{failed} of {} bundles failed", outcomes.len());
    }
    Ok(())
}
