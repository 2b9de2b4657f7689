use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod model;
mod store;
mod sync;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if cli.verbose {
                "confsync=debug"
            } else {
                "confsync=info"
            }
            .parse()
            .unwrap()
        }))
        .init();

    match cli.command {
        cli::Command::Pull {
            bundle,
            source,
            network,
            tenant,
        } => cli::pull::run(cli.data_dir.as_ref(), bundle, source, network, tenant),
        cli::Command::Push {
            bundle,
            destination,
            network,
            tenant,
        } => cli::push::run(cli.data_dir.as_ref(), bundle, destination, network, tenant),
        cli::Command::Diff {
            bundle,
            network,
            tenant,
        } => cli::diff::run(cli.data_dir.as_ref(), bundle, network, tenant),
        cli::Command::Bundles { network, tenant } => {
            cli::bundles::run(cli.data_dir.as_ref(), network, tenant)
        }
        cli::Command::Show {
            bundle,
            network,
            tenant,
        } => cli::show::run(cli.data_dir.as_ref(), bundle, network, tenant),
        cli::Command::Items { network, tenant } => {
            cli::items::run(cli.data_dir.as_ref(), network, tenant)
        }
        cli::Command::Config(cmd) => cli::config::run(cli.data_dir.as_ref(), cmd),
    }
}
