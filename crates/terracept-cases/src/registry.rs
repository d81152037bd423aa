use terracept_domain::Locations;
use terracept_harness::TestCase;

use crate::{
    ddos_protection_plan, local_network_gateway, nat_gateway, network_interface, network_watcher,
    private_link_service, public_ip, route_table, subnet, virtual_network, virtual_network_gateway,
};

/// Every registered case, in suite order.
pub fn all_cases(locations: &Locations) -> Vec<TestCase> {
    let mut cases = Vec::new();
    cases.extend(virtual_network::all(locations));
    cases.extend(subnet::all(locations));
    cases.extend(public_ip::all(locations));
    cases.extend(route_table::all(locations));
    cases.extend(nat_gateway::all(locations));
    cases.extend(network_interface::all(locations));
    cases.extend(virtual_network_gateway::all(locations));
    cases.extend(local_network_gateway::all(locations));
    cases.extend(network_watcher::all(locations));
    cases.extend(private_link_service::all(locations));
    cases.extend(ddos_protection_plan::all(locations));
    cases
}

/// Partition cases into buckets the runner may execute concurrently.
///
/// Cases sharing a quota group land in one bucket (run serially within it);
/// every ungrouped case gets a bucket of its own.
pub fn schedule(cases: Vec<TestCase>) -> Vec<Vec<TestCase>> {
    let mut grouped: Vec<(String, Vec<TestCase>)> = Vec::new();
    let mut buckets = Vec::new();

    for case in cases {
        match &case.quota_group {
            Some(group) => {
                if let Some((_, bucket)) = grouped.iter_mut().find(|(g, _)| g == group) {
                    bucket.push(case);
                } else {
                    grouped.push((group.clone(), vec![case]));
                }
            }
            None => buckets.push(vec![case]),
        }
    }

    buckets.extend(grouped.into_iter().map(|(_, bucket)| bucket));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_cases() -> Vec<TestCase> {
        super::all_cases(&Locations::default())
    }

    #[test]
    fn case_names_are_unique() {
        let cases = all_cases();
        let names: HashSet<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn every_case_has_steps_and_config() {
        for case in all_cases() {
            assert!(!case.steps.is_empty(), "{} has no steps", case.name);
            for step in &case.steps {
                assert!(step.config.contains("provider \"azurerm\""), "{}", case.name);
                assert!(step.config.contains(&case.data.resource_type), "{}", case.name);
            }
        }
    }

    #[test]
    fn ddos_cases_share_one_quota_group() {
        let groups: HashSet<Option<String>> = all_cases()
            .into_iter()
            .filter(|c| c.name.starts_with("ddos_protection_plan_"))
            .map(|c| c.quota_group)
            .collect();
        assert_eq!(groups.len(), 1);
        assert!(groups.contains(&Some("ddos-plan".to_string())));
    }

    #[test]
    fn ddos_vnet_case_is_in_the_plan_quota_group() {
        let case = all_cases()
            .into_iter()
            .find(|c| c.name == "virtual_network_ddos_protection_plan")
            .unwrap();
        assert_eq!(case.quota_group.as_deref(), Some("ddos-plan"));
    }

    #[test]
    fn schedule_serializes_quota_groups() {
        let cases = all_cases();
        let total = cases.len();
        let buckets = schedule(cases);

        assert_eq!(buckets.iter().map(Vec::len).sum::<usize>(), total);
        let ddos_bucket = buckets
            .iter()
            .find(|b| b.iter().any(|c| c.name == "ddos_protection_plan_basic"))
            .unwrap();
        // all ddos-plan cases, including the vnet one, share the bucket
        assert_eq!(ddos_bucket.len(), 5);
        for bucket in &buckets {
            if bucket.len() > 1 {
                let group = bucket[0].quota_group.as_deref();
                assert!(bucket.iter().all(|c| c.quota_group.as_deref() == group));
            }
        }
    }
}
