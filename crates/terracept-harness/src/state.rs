use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::HarnessError;

/// Flattened attributes of a single resource instance.
///
/// Nested values use the dotted key convention: list elements by index
/// (`subnet.0.id`), list lengths under `#` (`subnet.#`), map sizes under `%`
/// (`tags.%`).
#[derive(Debug, Clone, Default)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed `terraform show -json` output.
#[derive(Debug)]
pub struct StateSnapshot {
    resources: BTreeMap<String, Attributes>,
}

impl StateSnapshot {
    pub fn from_show_json(raw: &str) -> Result<Self, HarnessError> {
        let doc: Value = serde_json::from_str(raw.trim()).map_err(|e| HarnessError::Terraform {
            operation: "show".into(),
            message: format!("unparseable state JSON: {}", e),
        })?;

        let mut resources = BTreeMap::new();
        if let Some(root) = doc.pointer("/values/root_module") {
            collect_module(root, &mut resources);
        }
        Ok(Self { resources })
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Look up a resource by its Terraform address
    /// (e.g. `azurerm_virtual_network.test`).
    pub fn resource(&self, address: &str) -> Result<&Attributes, HarnessError> {
        self.resources.get(address).ok_or_else(|| HarnessError::StateLookup {
            address: address.to_string(),
            message: "not found in state".into(),
        })
    }

    /// Fetch a single attribute, erroring with the address and key on a miss.
    pub fn attribute(&self, address: &str, key: &str) -> Result<&str, HarnessError> {
        self.resource(address)?
            .get(key)
            .ok_or_else(|| HarnessError::StateLookup {
                address: address.to_string(),
                message: format!("attribute '{}' not set", key),
            })
    }

    /// The resource's Azure ID — every azurerm resource exposes `id`.
    pub fn resource_id(&self, address: &str) -> Result<&str, HarnessError> {
        self.attribute(address, "id")
    }
}

fn collect_module(module: &Value, out: &mut BTreeMap<String, Attributes>) {
    if let Some(resources) = module["resources"].as_array() {
        for res in resources {
            let Some(address) = res["address"].as_str() else { continue };
            let mut attrs = BTreeMap::new();
            if let Some(values) = res["values"].as_object() {
                for (key, value) in values {
                    flatten(key, value, &mut attrs);
                }
            }
            out.insert(address.to_string(), Attributes(attrs));
        }
    }
    if let Some(children) = module["child_modules"].as_array() {
        for child in children {
            collect_module(child, out);
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Array(items) => {
            out.insert(format!("{}.#", prefix), items.len().to_string());
            for (i, item) in items.iter().enumerate() {
                flatten(&format!("{}.{}", prefix, i), item, out);
            }
        }
        Value::Object(map) => {
            out.insert(format!("{}.%", prefix), map.len().to_string());
            for (key, item) in map {
                flatten(&format!("{}.{}", prefix, key), item, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> StateSnapshot {
        let doc = json!({
            "format_version": "1.0",
            "values": {
                "root_module": {
                    "resources": [
                        {
                            "address": "azurerm_virtual_network.test",
                            "type": "azurerm_virtual_network",
                            "name": "test",
                            "values": {
                                "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vn",
                                "name": "acctestvirtnet12345678",
                                "address_space": ["10.0.0.0/16"],
                                "subnet": [
                                    { "name": "subnet1", "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vn/subnets/subnet1" }
                                ],
                                "tags": { "environment": "Production" },
                                "dns_servers": [],
                                "ddos_protection_plan": null
                            }
                        }
                    ]
                }
            }
        });
        StateSnapshot::from_show_json(&doc.to_string()).unwrap()
    }

    #[test]
    fn lookup_by_address() {
        let state = snapshot();
        let attrs = state.resource("azurerm_virtual_network.test").unwrap();
        assert_eq!(attrs.get("name"), Some("acctestvirtnet12345678"));
    }

    #[test]
    fn missing_address_names_it_in_the_error() {
        let err = snapshot().resource("azurerm_subnet.test").unwrap_err();
        assert!(err.to_string().contains("azurerm_subnet.test"));
    }

    #[test]
    fn lists_flatten_with_index_and_count() {
        let state = snapshot();
        assert_eq!(state.attribute("azurerm_virtual_network.test", "address_space.#").unwrap(), "1");
        assert_eq!(
            state.attribute("azurerm_virtual_network.test", "address_space.0").unwrap(),
            "10.0.0.0/16"
        );
        assert_eq!(state.attribute("azurerm_virtual_network.test", "subnet.0.name").unwrap(), "subnet1");
        assert_eq!(state.attribute("azurerm_virtual_network.test", "dns_servers.#").unwrap(), "0");
    }

    #[test]
    fn maps_flatten_with_size_marker() {
        let state = snapshot();
        assert_eq!(state.attribute("azurerm_virtual_network.test", "tags.%").unwrap(), "1");
        assert_eq!(
            state.attribute("azurerm_virtual_network.test", "tags.environment").unwrap(),
            "Production"
        );
    }

    #[test]
    fn null_attributes_are_absent() {
        let state = snapshot();
        let err = state
            .attribute("azurerm_virtual_network.test", "ddos_protection_plan")
            .unwrap_err();
        assert!(err.to_string().contains("ddos_protection_plan"));
    }

    #[test]
    fn resource_id_reads_the_id_attribute() {
        let state = snapshot();
        assert!(state.resource_id("azurerm_virtual_network.test").unwrap().ends_with("/vn"));
    }

    #[test]
    fn empty_state_parses() {
        let state = StateSnapshot::from_show_json(r#"{"format_version":"1.0"}"#).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn garbage_is_a_terraform_error() {
        let err = StateSnapshot::from_show_json("not json").unwrap_err();
        assert!(matches!(err, HarnessError::Terraform { .. }));
    }
}
