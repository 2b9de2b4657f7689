use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{resolve_data_dir, ConfigSubcommand};
use crate::model::GlobalConfig;

pub fn run(data_dir: Option<&PathBuf>, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(data_dir),
        ConfigSubcommand::Set { key, value } => run_set(data_dir, key, value),
        ConfigSubcommand::Get { key } => run_get(data_dir, key),
    }
}

fn run_show(data_dir: Option<&PathBuf>) -> Result<()> {
    let root = resolve_data_dir(data_dir)?;
    let config = GlobalConfig::load(&root).context("failed to load configuration")?;

    println!("Data directory: {}", root.display());
    println!("Config folder:  {}", config.config_folder);
    println!("Multi-tenant:   {}", config.multi_tenant);
    if let Some(base) = &config.base_dir {
        println!("Base directory: {}", base.display());
    }
    if let Some(url) = &config.config_url {
        println!("Config URL:     {url}");
    }
    if let Some(id) = config.tenant_id {
        println!("Tenant id:      {id}");
    }
    Ok(())
}

fn run_set(data_dir: Option<&PathBuf>, key: String, value: String) -> Result<()> {
    let root = resolve_data_dir(data_dir)?;
    let mut config = GlobalConfig::load(&root).context("failed to load configuration")?;

    match key.as_str() {
        "base_dir" => {
            config.base_dir = if value.is_empty() || value == "none" {
                None
            } else {
                Some(PathBuf::from(&value))
            };
        }
        "config_folder" => {
            config.config_folder = value.clone();
        }
        "config_url" => {
            config.config_url = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        "multi_tenant" => {
            config.multi_tenant = value
                .parse::<bool>()
                .with_context(|| format!("invalid multi_tenant value: {value} (expected true or false)"))?;
        }
        "tenant_id" => {
            config.tenant_id = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.parse::<u64>().with_context(|| {
                    format!("invalid tenant_id value: {value} (expected a number)")
                })?)
            };
        }
        _ => anyhow::bail!(
            "unknown config key: {key}\nValid keys: base_dir, config_folder, config_url, multi_tenant, tenant_id"
        ),
    }

    config.save(&root).context("failed to save configuration")?;
    println!("Set {key} = {value}");
    Ok(())
}

fn run_get(data_dir: Option<&PathBuf>, key: String) -> Result<()> {
    let root = resolve_data_dir(data_dir)?;
    let config = GlobalConfig::load(&root).context("failed to load configuration")?;

    match key.as_str() {
        "base_dir" => println!(
            "{}",
            config
                .base_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        ),
        "config_folder" => println!("{}", config.config_folder),
        "config_url" => println!("{}", config.config_url.as_deref().unwrap_or("(not set)")),
        "multi_tenant" => println!("{}", config.multi_tenant),
        "tenant_id" => match config.tenant_id {
            Some(id) => println!("{id}"),
            None => println!("(not set)"),
        },
        _ => anyhow::bail!("unknown config key: {key}"),
    }
    Ok(())
}
