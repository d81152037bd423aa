#[cfg(test)]
mod tests {
    use crate::id::ResourceId;
    use crate::types::TestData;
    use uuid::Uuid;

    const VNET_ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000\
                           /resourceGroups/acctestRG-1234/providers/Microsoft.Network\
                           /virtualNetworks/acctestvn-1234";

    fn vnet_id() -> String {
        VNET_ID.to_string()
    }

    #[test]
    fn parse_top_level_resource() {
        let id = ResourceId::parse(&vnet_id()).unwrap();
        assert_eq!(id.subscription_id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.resource_group, "acctestRG-1234");
        assert_eq!(id.namespace, "Microsoft.Network");
        assert_eq!(id.resource_type, "virtualNetworks");
        assert_eq!(id.name, "acctestvn-1234");
        assert!(id.child.is_none());
    }

    #[test]
    fn parse_nested_resource() {
        let raw = format!("{}/subnets/internal", vnet_id());
        let id = ResourceId::parse(&raw).unwrap();
        assert_eq!(id.name, "acctestvn-1234");
        assert_eq!(id.child, Some(("subnets".into(), "internal".into())));
    }

    #[test]
    fn parse_tolerates_lowercase_resourcegroups() {
        let raw = vnet_id().replace("resourceGroups", "resourcegroups");
        let id = ResourceId::parse(&raw).unwrap();
        assert_eq!(id.resource_group, "acctestRG-1234");
    }

    #[test]
    fn parse_tolerates_trailing_slash() {
        let raw = format!("{}/", vnet_id());
        assert!(ResourceId::parse(&raw).is_ok());
    }

    #[test]
    fn parse_format_round_trip() {
        let raw = vnet_id();
        let id = ResourceId::parse(&raw).unwrap();
        assert_eq!(id.to_arm_path(), raw);
    }

    #[test]
    fn parse_rejects_truncated_id() {
        let err = ResourceId::parse("/subscriptions/abc/resourceGroups/rg").unwrap_err();
        assert!(err.to_string().contains("invalid resource id"));
    }

    #[test]
    fn parse_rejects_dangling_child_type() {
        let raw = format!("{}/subnets", vnet_id());
        assert!(ResourceId::parse(&raw).is_err());
    }

    #[test]
    fn parse_rejects_non_arm_path() {
        assert!(ResourceId::parse("not-an-id").is_err());
    }

    #[test]
    fn builder_matches_parsed() {
        let built = ResourceId::network(
            "00000000-0000-0000-0000-000000000000",
            "acctestRG-1234",
            "virtualNetworks",
            "acctestvn-1234",
        );
        assert_eq!(built, ResourceId::parse(&vnet_id()).unwrap());
    }

    #[test]
    fn test_data_suffix_is_eight_digits() {
        let data = TestData::new("azurerm_virtual_network", "test");
        assert!(data.random_integer >= 10_000_000);
        assert!(data.random_integer <= 99_999_999);
    }

    #[test]
    fn test_data_is_deterministic_with_seed() {
        let seed = Uuid::nil();
        let a = TestData::with_seed("azurerm_subnet", "test", seed);
        let b = TestData::with_seed("azurerm_subnet", "test", seed);
        assert_eq!(a.random_integer, b.random_integer);
        assert_eq!(a.random_string, b.random_string);
    }

    #[test]
    fn resource_address_joins_type_and_label() {
        let data = TestData::new("azurerm_route_table", "test");
        assert_eq!(data.resource_address(), "azurerm_route_table.test");
    }
}
