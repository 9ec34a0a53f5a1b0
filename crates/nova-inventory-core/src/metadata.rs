//! Instance metadata decoding
//!
//! Two conventions are understood:
//!
//! - host groups: `web,db` (comma-separated group names)
//! - host variables: `dns_for->domain1,domain2;role->primary`
//!   (`;`-separated entries, `->` between key and a comma-separated value list)
//!
//! Tokens are neither trimmed nor unescaped. An absent attribute decodes to
//! `None` and a present but empty one to an empty collection, so callers can
//! tell "not set" from "set to nothing".

use crate::error::MetadataError;
use nova_inventory_cloud::Instance;
use std::collections::BTreeMap;

pub const HOST_GROUPS_KEY: &str = "ansible_host_groups";
pub const HOST_VARS_KEY: &str = "ansible_host_vars";

const GROUP_SEPARATOR: char = ',';
const ENTRY_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: &str = "->";
const VALUE_SEPARATOR: char = ',';

/// Variable name to value list
pub type HostVars = BTreeMap<String, Vec<String>>;

/// Metadata attribute names to read from each instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataKeys {
    pub host_groups: String,
    pub host_vars: String,
}

impl MetadataKeys {
    pub fn new(host_groups: impl Into<String>, host_vars: impl Into<String>) -> Self {
        Self {
            host_groups: host_groups.into(),
            host_vars: host_vars.into(),
        }
    }

    /// Replace the attribute names that are given, keep the others
    pub fn with_overrides(mut self, host_groups: Option<&str>, host_vars: Option<&str>) -> Self {
        if let Some(key) = host_groups {
            self.host_groups = key.to_string();
        }
        if let Some(key) = host_vars {
            self.host_vars = key.to_string();
        }
        self
    }

    pub fn host_groups_of<'a>(&self, instance: &'a Instance) -> Option<&'a str> {
        instance.metadata_value(&self.host_groups)
    }

    pub fn host_vars_of<'a>(&self, instance: &'a Instance) -> Option<&'a str> {
        instance.metadata_value(&self.host_vars)
    }
}

impl Default for MetadataKeys {
    fn default() -> Self {
        Self::new(HOST_GROUPS_KEY, HOST_VARS_KEY)
    }
}

/// Decode a comma-separated group list
pub fn parse_host_groups(value: Option<&str>) -> Option<Vec<String>> {
    let value = value?;
    if value.is_empty() {
        return Some(Vec::new());
    }
    Some(value.split(GROUP_SEPARATOR).map(str::to_string).collect())
}

/// Decode a `key->v1,v2;key2->v3` variable map
///
/// An entry with zero or several `->` separators is rejected. A key that
/// appears twice keeps its last value list.
pub fn parse_host_vars(value: Option<&str>) -> Result<Option<HostVars>, MetadataError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut vars = HostVars::new();
    if value.is_empty() {
        return Ok(Some(vars));
    }

    for entry in value.split(ENTRY_SEPARATOR) {
        let mut parts = entry.split(KEY_VALUE_SEPARATOR);
        let (Some(key), Some(values), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MetadataError::MalformedHostVar {
                entry: entry.to_string(),
            });
        };

        let values = values.split(VALUE_SEPARATOR).map(str::to_string).collect();
        vars.insert(key.to_string(), values);
    }

    Ok(Some(vars))
}
