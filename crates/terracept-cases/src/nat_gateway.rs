use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::nat_gateway as fixture;
use terracept_harness::{attr, attr_set_of, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/natGateways`
pub struct NatGateway;

impl TestResource for NatGateway {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(NatGateway)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_nat_gateway", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("nat_gateway_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("sku_name", "Standard")),
        )
        .step(TestStep::import_check(config))
}

pub fn complete(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("nat_gateway_complete", data.clone(), resource()).step(
        TestStep::apply(fixture::complete(&data))
            .with_check(exists(resource()))
            .with_check(attr("idle_timeout_in_minutes", "10"))
            .with_check(attr("zones.0", "1"))
            .with_check(attr_set_of("azurerm_nat_gateway_public_ip_association.test", "id")),
    )
}

pub fn subnet_association(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("nat_gateway_subnet_association", data.clone(), resource()).step(
        TestStep::apply(fixture::subnet_association(&data))
            .with_check(exists(resource()))
            .with_check(attr_set_of("azurerm_subnet_nat_gateway_association.test", "id")),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("nat_gateway_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("nat_gateway_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), complete(locations), subnet_association(locations), requires_import(locations), disappears(locations)]
}
