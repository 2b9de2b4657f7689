mod cli_bundles;
mod cli_pull;
mod cli_push;
mod cli_tenant;
