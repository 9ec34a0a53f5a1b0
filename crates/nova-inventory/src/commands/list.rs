use nova_inventory_cloud::ComputeClient;
use nova_inventory_config::InventoryConfig;

/// `--list`: print groups and `_meta.hostvars`
pub async fn handle(client: &dyn ComputeClient, config: &InventoryConfig) -> anyhow::Result<()> {
    let inventory = super::build(client, config).await?;

    println!("{}", inventory.to_json_pretty()?);
    Ok(())
}
