use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::network_watcher as fixture;
use terracept_harness::{attr_of, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/networkWatchers` — Azure allows one watcher per region
/// per subscription, so every case here shares a quota group.
pub struct NetworkWatcher;

impl TestResource for NetworkWatcher {}

const QUOTA_GROUP: &str = "network-watcher";

fn resource() -> Arc<dyn TestResource> {
    Arc::new(NetworkWatcher)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_network_watcher", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("network_watcher_basic", data, resource())
        .step(TestStep::apply(config.clone()).with_check(exists(resource())))
        .step(TestStep::import_check(config))
        .quota_group(QUOTA_GROUP)
}

pub fn flow_log(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_watcher_flow_log", data.clone(), resource())
        .step(
            TestStep::apply(fixture::flow_log(&data, 7))
                .with_check(exists(resource()))
                .with_check(attr_of("azurerm_network_watcher_flow_log.test", "enabled", "true"))
                .with_check(attr_of(
                    "azurerm_network_watcher_flow_log.test",
                    "retention_policy.0.enabled",
                    "true",
                ))
                .with_check(attr_of(
                    "azurerm_network_watcher_flow_log.test",
                    "retention_policy.0.days",
                    "7",
                )),
        )
        .quota_group(QUOTA_GROUP)
}

pub fn packet_capture_local_disk(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_watcher_packet_capture_local_disk", data.clone(), resource())
        .step(
            TestStep::apply(fixture::packet_capture_local_disk(&data))
                .with_check(exists(resource()))
                .with_check(attr_of(
                    "azurerm_network_packet_capture.test",
                    "storage_location.0.file_path",
                    "/var/captures/packet.cap",
                )),
        )
        .quota_group(QUOTA_GROUP)
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_watcher_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
        .quota_group(QUOTA_GROUP)
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), flow_log(locations), packet_capture_local_disk(locations), disappears(locations)]
}
