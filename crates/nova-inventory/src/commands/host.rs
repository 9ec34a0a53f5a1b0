use nova_inventory_cloud::ComputeClient;
use nova_inventory_config::InventoryConfig;
use nova_inventory_core::HostVars;

/// `--host <HOST>`: print one host's variables, `{}` when unknown
pub async fn handle(
    client: &dyn ComputeClient,
    config: &InventoryConfig,
    host: &str,
) -> anyhow::Result<()> {
    let inventory = super::build(client, config).await?;

    let vars = inventory.host_vars(host).cloned().unwrap_or_else(|| {
        tracing::debug!(host, "Host not in inventory");
        HostVars::new()
    });

    println!("{}", serde_json::to_string_pretty(&vars)?);
    Ok(())
}
