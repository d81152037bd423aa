use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::local_network_gateway as fixture;
use terracept_harness::{attr, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/localNetworkGateways`
pub struct LocalNetworkGateway;

impl TestResource for LocalNetworkGateway {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(LocalNetworkGateway)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_local_network_gateway", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("local_network_gateway_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("gateway_address", "127.0.0.1"))
                .with_check(attr("address_space.0", "127.0.0.0/8")),
        )
        .step(TestStep::import_check(config))
}

pub fn bgp_settings(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("local_network_gateway_bgp_settings", data.clone(), resource()).step(
        TestStep::apply(fixture::bgp_settings(&data))
            .with_check(exists(resource()))
            .with_check(attr("bgp_settings.0.asn", "2468"))
            .with_check(attr("bgp_settings.0.bgp_peering_address", "10.104.1.1")),
    )
}

pub fn update_tags(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("local_network_gateway_update_tags", data.clone(), resource())
        .step(
            TestStep::apply(fixture::with_tags(&data, "acctest"))
                .with_check(exists(resource()))
                .with_check(attr("tags.environment", "acctest")),
        )
        .step(
            TestStep::apply(fixture::with_tags(&data, "staging"))
                .with_check(attr("tags.environment", "staging")),
        )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("local_network_gateway_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("local_network_gateway_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), bgp_settings(locations), update_tags(locations), requires_import(locations), disappears(locations)]
}
