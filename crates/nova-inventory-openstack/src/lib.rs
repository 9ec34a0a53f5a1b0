//! OpenStack compute client for nova-inventory
//!
//! This crate implements the `ComputeClient` trait for OpenStack,
//! authenticating against Keystone and listing servers through Nova.
//!
//! # Requirements
//!
//! - `OS_USERNAME`, `OS_PASSWORD`, `OS_TENANT_NAME`, `OS_AUTH_URL` env vars
//! - Optional: `OS_REGION_NAME`, `OS_ENDPOINT_TYPE`, `OS_USER_DOMAIN_NAME`,
//!   `OS_PROJECT_DOMAIN_NAME` (v3 only)
//!
//! # Example
//!
//! ```ignore
//! use nova_inventory_cloud::ComputeClient;
//! use nova_inventory_openstack::{Credentials, OpenStackClient};
//!
//! let credentials = Credentials::from_env()?;
//! let client = OpenStackClient::new(credentials);
//!
//! for instance in client.list_instances().await? {
//!     println!("{} {}", instance.id, instance.name);
//! }
//! ```

pub mod client;
pub mod compute;
pub mod credentials;
pub mod error;
pub mod identity;

pub use client::OpenStackClient;
pub use compute::Nova;
pub use credentials::{Credentials, REQUIRED_VARS};
pub use error::{OpenStackError, Result};
pub use identity::{AuthToken, EndpointInterface, Keystone, ServiceCatalog};
