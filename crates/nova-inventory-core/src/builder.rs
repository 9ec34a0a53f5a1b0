//! Instance-by-instance inventory assembly

use crate::error::{InventoryError, Result};
use crate::inventory::Inventory;
use crate::metadata::{MetadataKeys, parse_host_groups, parse_host_vars};
use crate::resolver::AddressResolver;
use nova_inventory_cloud::{ComputeClient, Instance};
use tracing::{debug, info, instrument};

/// Accumulates instances into an `Inventory`
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    resolver: AddressResolver,
    keys: MetadataKeys,
    inventory: Inventory,
    included: usize,
    skipped: usize,
}

impl InventoryBuilder {
    pub fn new(resolver: AddressResolver, keys: MetadataKeys) -> Self {
        Self {
            resolver,
            keys,
            inventory: Inventory::new(),
            included: 0,
            skipped: 0,
        }
    }

    /// Add one instance
    ///
    /// Returns `Ok(false)` when the instance has no floating address on the
    /// configured network and therefore contributes nothing. Metadata is
    /// fully decoded before the inventory is touched.
    pub fn ingest(&mut self, instance: &Instance) -> Result<bool> {
        let Some(address) = self.resolver.resolve(instance) else {
            debug!(
                instance = %instance.id,
                network = self.resolver.network_name(),
                "No floating address, skipping"
            );
            self.skipped += 1;
            return Ok(false);
        };

        let groups = parse_host_groups(self.keys.host_groups_of(instance)).unwrap_or_default();
        let host_vars = parse_host_vars(self.keys.host_vars_of(instance)).map_err(|source| {
            InventoryError::Metadata {
                instance_id: instance.id.clone(),
                source,
            }
        })?;

        for group in &groups {
            self.inventory.add_host(group, address);
        }

        // Present-but-empty vars are a no-op, same as absent
        if let Some(vars) = host_vars.filter(|v| !v.is_empty()) {
            self.inventory.merge_host_vars(address, vars);
        }

        debug!(
            instance = %instance.id,
            address,
            groups = groups.len(),
            "Added instance"
        );
        self.included += 1;
        Ok(true)
    }

    pub fn included(&self) -> usize {
        self.included
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> Inventory {
        self.inventory
    }
}

/// List every instance from `client` and build the inventory in listing order
#[instrument(skip_all, fields(provider = client.name(), network = resolver.network_name()))]
pub async fn build_inventory<C>(
    client: &C,
    resolver: AddressResolver,
    keys: MetadataKeys,
) -> Result<Inventory>
where
    C: ComputeClient + ?Sized,
{
    let instances = client.list_instances().await?;

    let mut builder = InventoryBuilder::new(resolver, keys);
    for instance in &instances {
        builder.ingest(instance)?;
    }

    info!(
        instances = instances.len(),
        included = builder.included(),
        skipped = builder.skipped(),
        "Inventory built"
    );

    Ok(builder.build())
}
