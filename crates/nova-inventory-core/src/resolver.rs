//! Floating address resolution

use nova_inventory_cloud::Instance;

/// Picks the externally routable address of an instance on one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResolver {
    network_name: String,
}

impl AddressResolver {
    pub fn new(network_name: impl Into<String>) -> Self {
        Self {
            network_name: network_name.into(),
        }
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// First floating address on the configured network, in provider order
    ///
    /// `None` when the instance is not attached to the network or has no
    /// floating address there.
    pub fn resolve<'a>(&self, instance: &'a Instance) -> Option<&'a str> {
        instance
            .addresses_on(&self.network_name)?
            .iter()
            .find(|record| record.kind.is_floating())
            .map(|record| record.addr.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_inventory_cloud::{AddressKind, AddressRecord};

    const NET: &str = "virtual_infrastructure_network";

    #[test]
    fn test_resolves_floating_address() {
        let instance = Instance::new("i-1")
            .with_address(NET, AddressRecord::fixed("192.168.0.5"))
            .with_address(NET, AddressRecord::floating("10.0.0.5"));

        assert_eq!(AddressResolver::new(NET).resolve(&instance), Some("10.0.0.5"));
    }

    #[test]
    fn test_first_floating_address_wins() {
        let instance = Instance::new("i-1")
            .with_address(NET, AddressRecord::floating("10.0.0.7"))
            .with_address(NET, AddressRecord::floating("10.0.0.8"));

        assert_eq!(AddressResolver::new(NET).resolve(&instance), Some("10.0.0.7"));
    }

    #[test]
    fn test_no_floating_address() {
        let instance = Instance::new("i-1")
            .with_address(NET, AddressRecord::fixed("192.168.0.5"))
            .with_address(NET, AddressRecord::new("192.168.0.6", AddressKind::default()));

        assert_eq!(AddressResolver::new(NET).resolve(&instance), None);
    }

    #[test]
    fn test_network_absent() {
        let instance = Instance::new("i-1").with_address("other", AddressRecord::floating("10.0.0.5"));

        assert_eq!(AddressResolver::new(NET).resolve(&instance), None);
    }

    #[test]
    fn test_network_name_is_configurable() {
        let instance = Instance::new("i-1")
            .with_address(NET, AddressRecord::floating("10.0.0.5"))
            .with_address("public", AddressRecord::floating("203.0.113.9"));

        let resolver = AddressResolver::new("public");
        assert_eq!(resolver.network_name(), "public");
        assert_eq!(resolver.resolve(&instance), Some("203.0.113.9"));
    }
}
