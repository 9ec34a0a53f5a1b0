//! nova-inventory core
//!
//! Turns compute instances into an Ansible dynamic inventory:
//!
//! 1. `AddressResolver` picks the floating address on the configured network
//! 2. `metadata` decodes the host-group and host-variable attributes
//! 3. `InventoryBuilder` accumulates groups and `_meta.hostvars`
//! 4. `Inventory` serializes to the JSON document Ansible reads

pub mod builder;
pub mod error;
pub mod inventory;
pub mod metadata;
pub mod resolver;

pub use builder::{InventoryBuilder, build_inventory};
pub use error::{InventoryError, MetadataError, Result};
pub use inventory::{HostGroup, Inventory, META_KEY, Meta};
pub use metadata::{HOST_GROUPS_KEY, HOST_VARS_KEY, HostVars, MetadataKeys, parse_host_groups, parse_host_vars};
pub use resolver::AddressResolver;
