use terracept_domain::TestData;

use crate::hcl::preamble;

fn template(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_subnet" "test" {{
  name                 = "acctestsubnet{rand}"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn service_endpoints(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_subnet" "test" {{
  name                 = "acctestsubnet{rand}"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]
  service_endpoints    = ["Microsoft.Sql", "Microsoft.Storage"]
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

/// Subnet delegated to a container-instance group.
pub fn delegation(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_subnet" "test" {{
  name                 = "acctestsubnet{rand}"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]

  delegation {{
    name = "acctestdelegation"

    service_delegation {{
      name    = "Microsoft.ContainerInstance/containerGroups"
      actions = ["Microsoft.Network/virtualNetworks/subnets/action"]
    }}
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_subnet" "import" {{
  name                 = azurerm_subnet.test.name
  resource_group_name  = azurerm_subnet.test.resource_group_name
  virtual_network_name = azurerm_subnet.test.virtual_network_name
  address_prefixes     = ["10.0.2.0/24"]
}}
"#,
        base = basic(data),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use terracept_domain::TestData;
    use uuid::Uuid;

    fn data() -> TestData {
        TestData::with_seed("azurerm_subnet", "test", Uuid::nil())
    }

    #[test]
    fn basic_nests_under_virtual_network() {
        let text = basic(&data());
        assert!(text.contains("virtual_network_name = azurerm_virtual_network.test.name"));
        assert!(text.contains(r#"address_prefixes     = ["10.0.2.0/24"]"#));
    }

    #[test]
    fn service_endpoints_lists_sql_and_storage() {
        let text = service_endpoints(&data());
        assert!(text.contains(r#"["Microsoft.Sql", "Microsoft.Storage"]"#));
    }

    #[test]
    fn delegation_declares_service_delegation() {
        let text = delegation(&data());
        assert!(text.contains("Microsoft.ContainerInstance/containerGroups"));
        assert!(text.contains("delegation {"));
    }

    #[test]
    fn requires_import_references_existing_subnet() {
        let text = requires_import(&data());
        assert!(text.contains(r#""azurerm_subnet" "import""#));
        assert!(text.contains("name                 = azurerm_subnet.test.name"));
    }
}
