//! OpenStack compute client
//!
//! Authenticates once against Keystone, resolves the compute endpoint from
//! the service catalog and lists servers through Nova.

use crate::compute::Nova;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::identity::Keystone;
use async_trait::async_trait;
use nova_inventory_cloud::{ComputeClient, Instance};

const COMPUTE_SERVICE_TYPE: &str = "compute";

/// OpenStack client
pub struct OpenStackClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl OpenStackClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    /// Authenticate and bind a Nova client to the catalog's compute endpoint
    pub async fn connect(&self) -> Result<Nova> {
        let token = Keystone::new(self.client.clone())
            .authenticate(&self.credentials)
            .await?;

        let endpoint = token
            .catalog
            .require_endpoint(
                COMPUTE_SERVICE_TYPE,
                self.credentials.endpoint_type,
                self.credentials.region_name.as_deref(),
            )?;

        let nova = Nova::new(self.client.clone(), endpoint, token.id);
        tracing::debug!("Using compute endpoint {}", nova.endpoint());
        Ok(nova)
    }
}

#[async_trait]
impl ComputeClient for OpenStackClient {
    fn name(&self) -> &str {
        "openstack"
    }

    async fn list_instances(&self) -> nova_inventory_cloud::Result<Vec<Instance>> {
        let nova = self.connect().await?;
        let instances = nova.list_servers_detail().await?;

        tracing::info!(
            "Listed {} instances in tenant {}",
            instances.len(),
            self.credentials.tenant_name
        );

        Ok(instances)
    }
}
