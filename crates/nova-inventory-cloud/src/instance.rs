//! Instance object model
//!
//! Mirrors the subset of a Nova `servers/detail` entry that the inventory
//! needs: identity, addresses grouped by network, and the metadata map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Address type tag carried by each address entry (`OS-EXT-IPS:type`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressKind {
    Fixed,
    Floating,
    /// Any other tag, including a missing one
    Other(String),
}

impl AddressKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed => "fixed",
            Self::Floating => "floating",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating)
    }
}

impl Default for AddressKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for AddressKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "fixed" => Self::Fixed,
            "floating" => Self::Floating,
            _ => Self::Other(s),
        }
    }
}

impl From<AddressKind> for String {
    fn from(kind: AddressKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One address attached to an instance on a given network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub addr: String,

    #[serde(rename = "OS-EXT-IPS:type", default)]
    pub kind: AddressKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
}

impl AddressRecord {
    pub fn new(addr: impl Into<String>, kind: AddressKind) -> Self {
        Self {
            addr: addr.into(),
            kind,
            version: None,
        }
    }

    pub fn fixed(addr: impl Into<String>) -> Self {
        Self::new(addr, AddressKind::Fixed)
    }

    pub fn floating(addr: impl Into<String>) -> Self {
        Self::new(addr, AddressKind::Floating)
    }
}

/// Compute instance snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Addresses indexed by network name, in provider order
    #[serde(default)]
    pub addresses: HashMap<String, Vec<AddressRecord>>,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Instance {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append an address to the given network
    pub fn with_address(mut self, network: impl Into<String>, record: AddressRecord) -> Self {
        self.addresses.entry(network.into()).or_default().push(record);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Addresses on a network, `None` when the instance is not attached to it
    pub fn addresses_on(&self, network: &str) -> Option<&[AddressRecord]> {
        self.addresses.get(network).map(Vec::as_slice)
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nova_server() {
        let json = r#"{
            "id": "4f1c6a8e",
            "name": "web-01",
            "status": "ACTIVE",
            "addresses": {
                "virtual_infrastructure_network": [
                    {"addr": "192.168.0.12", "version": 4, "OS-EXT-IPS:type": "fixed"},
                    {"addr": "10.0.0.5", "version": 4, "OS-EXT-IPS:type": "floating"}
                ]
            },
            "metadata": {"ansible_host_groups": "web,db"}
        }"#;

        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.id, "4f1c6a8e");
        assert_eq!(instance.name, "web-01");

        let addrs = instance
            .addresses_on("virtual_infrastructure_network")
            .unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[0].kind, AddressKind::Fixed);
        assert_eq!(addrs[1].kind, AddressKind::Floating);
        assert_eq!(addrs[1].addr, "10.0.0.5");
        assert_eq!(addrs[1].version, Some(4));
        assert_eq!(instance.metadata_value("ansible_host_groups"), Some("web,db"));
    }

    #[test]
    fn test_deserialize_address_without_type() {
        let record: AddressRecord = serde_json::from_str(r#"{"addr": "172.16.0.3"}"#).unwrap();
        assert_eq!(record.kind, AddressKind::Other(String::new()));
        assert!(!record.kind.is_floating());
    }

    #[test]
    fn test_unknown_address_kind_is_kept() {
        let kind = AddressKind::from("provider".to_string());
        assert_eq!(kind, AddressKind::Other("provider".to_string()));
        assert_eq!(kind.as_str(), "provider");
    }

    #[test]
    fn test_serialize_uses_provider_field_name() {
        let value = serde_json::to_value(AddressRecord::floating("10.0.0.9")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"addr": "10.0.0.9", "OS-EXT-IPS:type": "floating"})
        );
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let instance: Instance = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(instance.addresses.is_empty());
        assert!(instance.metadata.is_empty());
        assert_eq!(instance.addresses_on("any"), None);
    }

    #[test]
    fn test_builder_appends_in_order() {
        let instance = Instance::new("i-1")
            .with_name("db-01")
            .with_address("net", AddressRecord::fixed("192.168.0.2"))
            .with_address("net", AddressRecord::floating("10.0.0.2"))
            .with_metadata("ansible_host_vars", "role->primary");

        let addrs = instance.addresses_on("net").unwrap();
        assert_eq!(addrs[0].addr, "192.168.0.2");
        assert_eq!(addrs[1].addr, "10.0.0.2");
        assert_eq!(
            instance.metadata_value("ansible_host_vars"),
            Some("role->primary")
        );
    }
}
