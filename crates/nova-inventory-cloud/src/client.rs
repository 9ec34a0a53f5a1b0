//! Compute client trait definition

use crate::error::Result;
use crate::instance::Instance;
use async_trait::async_trait;

/// Compute client abstraction trait
///
/// A compute client authenticates against its provider and returns the
/// instances of one tenant. Each returned instance already carries its
/// metadata, so callers never need a second lookup per instance.
#[async_trait]
pub trait ComputeClient: Send + Sync {
    /// Returns the provider name (e.g., "openstack")
    fn name(&self) -> &str;

    /// List every instance visible to the configured tenant, in provider order
    async fn list_instances(&self) -> Result<Vec<Instance>>;
}
