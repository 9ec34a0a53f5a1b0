use nova_inventory_cloud::CloudError;
use thiserror::Error;

/// Metadata decode errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Malformed host variable entry '{entry}': expected exactly one '->' separator")]
    MalformedHostVar { entry: String },
}

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Instance {instance_id}: {source}")]
    Metadata {
        instance_id: String,
        #[source]
        source: MetadataError,
    },

    #[error("Compute client error: {0}")]
    Cloud(#[from] CloudError),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
