use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::virtual_network_gateway as fixture;
use terracept_harness::{attr, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/virtualNetworkGateways` — by far the slowest resource
/// under test; provisioning regularly takes 20+ minutes.
pub struct VirtualNetworkGateway;

impl TestResource for VirtualNetworkGateway {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(VirtualNetworkGateway)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_virtual_network_gateway", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("virtual_network_gateway_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("type", "Vpn"))
                .with_check(attr("vpn_type", "RouteBased"))
                .with_check(attr("sku", "Basic")),
        )
        .step(TestStep::import_check(config))
}

pub fn sku_vpngw1(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_gateway_sku_vpngw1", data.clone(), resource()).step(
        TestStep::apply(fixture::sku(&data, "VpnGw1"))
            .with_check(exists(resource()))
            .with_check(attr("sku", "VpnGw1")),
    )
}

pub fn enable_bgp(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_gateway_enable_bgp", data.clone(), resource()).step(
        TestStep::apply(fixture::enable_bgp(&data))
            .with_check(exists(resource()))
            .with_check(attr("enable_bgp", "true"))
            .with_check(attr("bgp_settings.0.asn", "65515")),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_gateway_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), sku_vpngw1(locations), enable_bgp(locations), requires_import(locations)]
}
