pub mod host;
pub mod list;

use nova_inventory_cloud::ComputeClient;
use nova_inventory_config::InventoryConfig;
use nova_inventory_core::{AddressResolver, Inventory, MetadataKeys};

/// Build the full inventory from the compute client
pub async fn build(
    client: &dyn ComputeClient,
    config: &InventoryConfig,
) -> anyhow::Result<Inventory> {
    let resolver = AddressResolver::new(&config.network_name);
    let keys = MetadataKeys::default().with_overrides(
        config.host_groups_key.as_deref(),
        config.host_vars_key.as_deref(),
    );

    let inventory = nova_inventory_core::build_inventory(client, resolver, keys).await?;
    Ok(inventory)
}
