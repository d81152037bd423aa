use terracept_domain::TestData;

use crate::hcl::preamble;

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_network_ddos_protection_plan" "test" {{
  name                = "acctestddospplan-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn with_tags(data: &TestData, environment: &str) -> String {
    format!(
        r#"{preamble}
resource "azurerm_network_ddos_protection_plan" "test" {{
  name                = "acctestddospplan-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  tags = {{
    environment = "{environment}"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
        environment = crate::hcl::escape(environment),
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_network_ddos_protection_plan" "import" {{
  name                = azurerm_network_ddos_protection_plan.test.name
  location            = azurerm_network_ddos_protection_plan.test.location
  resource_group_name = azurerm_network_ddos_protection_plan.test.resource_group_name
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
        TestData::with_seed("azurerm_network_ddos_protection_plan", "test", Uuid::nil())
    }

    #[test]
    fn basic_names_the_plan_with_the_random_suffix() {
        assert!(basic(&data()).contains(&format!("acctestddospplan-{}", data().random_integer)));
    }

    #[test]
    fn requires_import_redeclares_by_reference() {
        assert!(requires_import(&data())
            .contains("name                = azurerm_network_ddos_protection_plan.test.name"));
    }
}
