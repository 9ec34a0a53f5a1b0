//! nova-inventory compute abstraction
//!
//! This crate defines the instance object model shared by every compute
//! provider and the `ComputeClient` trait the inventory builder consumes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 nova-inventory                   │
//! │              (--list / --host)                   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │              nova-inventory-core                 │
//! │   AddressResolver · metadata · InventoryBuilder  │
//! └─────────────────┬───────────────────────────────┘
//!                   │ trait ComputeClient
//! ┌─────────────────▼───────────────────────────────┐
//! │            nova-inventory-cloud                  │
//! │        Instance · AddressRecord · CloudError     │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼────────┐
//!           │   openstack    │
//!           │ (keystone+nova)│
//!           └────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod instance;

// Re-exports
pub use client::ComputeClient;
pub use error::{CloudError, Result};
pub use instance::{AddressKind, AddressRecord, Instance};
