use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::public_ip as fixture;
use terracept_harness::{attr, attr_set, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/publicIPAddresses`
pub struct PublicIp;

impl TestResource for PublicIp {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(PublicIp)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_public_ip", "test").with_locations(locations.clone())
}

pub fn static_basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data, "Static");
    TestCase::new("public_ip_static_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("allocation_method", "Static"))
                .with_check(attr_set("ip_address")),
        )
        .step(TestStep::import_check(config))
}

pub fn dynamic_basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("public_ip_dynamic_basic", data.clone(), resource()).step(
        TestStep::apply(fixture::basic(&data, "Dynamic"))
            .with_check(exists(resource()))
            .with_check(attr("allocation_method", "Dynamic")),
    )
}

pub fn standard_sku(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("public_ip_standard_sku", data.clone(), resource()).step(
        TestStep::apply(fixture::standard_sku(&data))
            .with_check(exists(resource()))
            .with_check(attr("sku", "Standard"))
            .with_check(attr_set("ip_address")),
    )
}

pub fn update_tags(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("public_ip_update_tags", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data, "Static")).with_check(exists(resource())))
        .step(
            TestStep::apply(fixture::with_tags(&data))
                .with_check(attr("tags.environment", "Production")),
        )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("public_ip_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data, "Static")).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("public_ip_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data, "Static")).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![
        static_basic(locations),
        dynamic_basic(locations),
        standard_sku(locations),
        update_tags(locations),
        requires_import(locations),
        disappears(locations),
    ]
}
