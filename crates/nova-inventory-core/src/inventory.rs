//! Ansible dynamic inventory document
//!
//! Serializes to the shape Ansible expects from an inventory script:
//!
//! ```json
//! {
//!   "web": {"hosts": ["10.0.0.5"]},
//!   "_meta": {"hostvars": {"10.0.0.5": {"role": ["primary"]}}}
//! }
//! ```

use crate::metadata::HostVars;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Reserved top-level key holding per-host variables
pub const META_KEY: &str = "_meta";

/// Named set of host addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostGroup {
    pub hosts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// Groups plus `_meta.hostvars`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    groups: BTreeMap<String, HostGroup>,
    meta: Meta,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `address` to `group`, creating the group on first use
    ///
    /// Hosts are not deduplicated. The reserved `_meta` name is refused and
    /// `false` is returned.
    pub fn add_host(&mut self, group: &str, address: &str) -> bool {
        if group == META_KEY {
            tracing::warn!(group, address, "Skipping reserved group name");
            return false;
        }

        self.groups
            .entry(group.to_string())
            .or_default()
            .hosts
            .push(address.to_string());
        true
    }

    /// Set or overwrite each key of `vars` for `address`; other keys are kept
    pub fn merge_host_vars(&mut self, address: &str, vars: HostVars) {
        self.meta
            .hostvars
            .entry(address.to_string())
            .or_default()
            .extend(vars);
    }

    pub fn group(&self, name: &str) -> Option<&HostGroup> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> &BTreeMap<String, HostGroup> {
        &self.groups
    }

    pub fn host_vars(&self, address: &str) -> Option<&HostVars> {
        self.meta.hostvars.get(address)
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.meta.hostvars.is_empty()
    }

    /// Indented JSON document
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.serialize_entry(META_KEY, &self.meta)?;
        map.end()
    }
}
