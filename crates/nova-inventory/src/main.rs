mod commands;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nova_inventory_config::InventoryConfig;
use nova_inventory_openstack::{Credentials, OpenStackClient, OpenStackError};

#[derive(Parser)]
#[command(name = "nova-inventory", version)]
#[command(
    about = "Ansible dynamic inventory built from OpenStack instance metadata",
    long_about = "Lists the instances of an OpenStack tenant and prints an Ansible \
                  dynamic inventory. Hosts are identified by their floating address on \
                  the configured network; groups come from the `ansible_host_groups` \
                  metadata attribute and host variables from `ansible_host_vars`.\n\n\
                  Requires OS_USERNAME, OS_PASSWORD, OS_TENANT_NAME and OS_AUTH_URL."
)]
struct Cli {
    /// Print the whole inventory (default)
    #[arg(long, conflicts_with = "host")]
    list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Network whose floating address identifies a host
    #[arg(long, env = "OS_NETWORK_NAME")]
    network: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the inventory JSON, logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e @ (OpenStackError::MissingCredential(_) | OpenStackError::InvalidCredential(_))) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let (config, config_path) =
        InventoryConfig::load().context("Failed to load nova-inventory configuration")?;
    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "Using config file");
    }
    let config = config.with_network_override(cli.network);

    let client = OpenStackClient::new(credentials);

    match (cli.list, cli.host) {
        (false, Some(host)) => commands::host::handle(&client, &config, &host).await?,
        _ => commands::list::handle(&client, &config).await?,
    }

    Ok(())
}
