use terracept_harness::{RunReport, TestCase};

/// Render the case table for `terracept list`.
pub fn render_case_table(cases: &[TestCase]) -> String {
    let name_width = cases
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max("NAME".len());

    let mut out = format!("{:<name_width$}  {:>5}  {}\n", "NAME", "STEPS", "QUOTA GROUP");
    for case in cases {
        out.push_str(&format!(
            "{:<name_width$}  {:>5}  {}\n",
            case.name,
            case.steps.len(),
            case.quota_group.as_deref().unwrap_or("-"),
        ));
    }
    out
}

/// Render the end-of-run totals.
pub fn render_run_summary(reports: &[RunReport]) -> String {
    let passed = reports.iter().filter(|r| r.passed()).count();
    let failed = reports.len() - passed;

    let mut out = format!("\n{} passed, {} failed, {} total\n", passed, failed, reports.len());
    for report in reports.iter().filter(|r| !r.passed()) {
        if let Some(failure) = report.first_failure() {
            out.push_str(&format!("  {}: {}\n", report.case, failure));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;
    use terracept_domain::TestData;
    use terracept_harness::{StepOutcome, StepReport, TestResource};
    use uuid::Uuid;

    struct Plain;
    impl TestResource for Plain {}

    #[test]
    fn case_table_lists_name_steps_and_group() {
        let data = TestData::with_seed("azurerm_virtual_network", "test", Uuid::nil());
        let case = terracept_harness::TestCase::new("virtual_network_basic", data, Arc::new(Plain))
            .step(terracept_harness::TestStep::apply("x"))
            .quota_group("ddos-plan");

        let table = render_case_table(&[case]);
        assert!(table.contains("virtual_network_basic"));
        assert!(table.contains("ddos-plan"));
        assert!(table.starts_with("NAME"));
    }

    #[test]
    fn run_summary_counts_and_names_failures() {
        let now = Utc::now();
        let pass = RunReport {
            id: Uuid::nil(),
            case: "a".into(),
            started_at: now,
            finished_at: now,
            steps: vec![],
            destroy_error: None,
            destroy_check_error: None,
        };
        let mut fail = pass.clone();
        fail.case = "b".into();
        fail.steps = vec![StepReport {
            index: 1,
            kind: "apply".into(),
            outcome: StepOutcome::Failed("boom".into()),
            log: String::new(),
        }];

        let summary = render_run_summary(&[pass, fail]);
        assert!(summary.contains("1 passed, 1 failed, 2 total"));
        assert!(summary.contains("b: step 1 apply: boom"));
    }
}
