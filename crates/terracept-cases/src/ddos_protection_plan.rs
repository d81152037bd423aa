use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::ddos_protection_plan as fixture;
use terracept_harness::{attr, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/ddosProtectionPlans` — Azure allows one plan per
/// region per subscription, so every case here (and the virtual network
/// case that attaches a plan) shares the `ddos-plan` quota group.
pub struct DdosProtectionPlan;

impl TestResource for DdosProtectionPlan {}

const QUOTA_GROUP: &str = "ddos-plan";

fn resource() -> Arc<dyn TestResource> {
    Arc::new(DdosProtectionPlan)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_network_ddos_protection_plan", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("ddos_protection_plan_basic", data, resource())
        .step(TestStep::apply(config.clone()).with_check(exists(resource())))
        .step(TestStep::import_check(config))
        .quota_group(QUOTA_GROUP)
}

pub fn update_tags(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("ddos_protection_plan_update_tags", data.clone(), resource())
        .step(
            TestStep::apply(fixture::with_tags(&data, "Production"))
                .with_check(exists(resource()))
                .with_check(attr("tags.environment", "Production")),
        )
        .step(
            TestStep::apply(fixture::with_tags(&data, "staging"))
                .with_check(attr("tags.environment", "staging")),
        )
        .quota_group(QUOTA_GROUP)
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("ddos_protection_plan_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
        .quota_group(QUOTA_GROUP)
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("ddos_protection_plan_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
        .quota_group(QUOTA_GROUP)
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), update_tags(locations), requires_import(locations), disappears(locations)]
}
