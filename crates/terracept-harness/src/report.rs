use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Failed(String),
    /// Not reached because an earlier step failed.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub kind: String,
    pub outcome: StepOutcome,
    /// Combined terraform stdout+stderr for the step.
    pub log: String,
}

/// Outcome of a full case run: every step, the final destroy, and the
/// destruction check.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub id: Uuid,
    pub case: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub steps: Vec<StepReport>,
    pub destroy_error: Option<String>,
    pub destroy_check_error: Option<String>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.outcome == StepOutcome::Passed)
            && self.destroy_error.is_none()
            && self.destroy_check_error.is_none()
    }

    /// One-line terminal summary, e.g.
    /// `FAIL virtual_network_basic (2 steps, 12.3s): step 1 apply: ...`
    pub fn summary(&self) -> String {
        let elapsed = (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0;
        let head = format!(
            "{} {} ({} steps, {:.1}s)",
            if self.passed() { "PASS" } else { "FAIL" },
            self.case,
            self.steps.len(),
            elapsed,
        );

        if let Some(failure) = self.first_failure() {
            format!("{}: {}", head, failure)
        } else {
            head
        }
    }

    pub fn first_failure(&self) -> Option<String> {
        for step in &self.steps {
            if let StepOutcome::Failed(msg) = &step.outcome {
                return Some(format!("step {} {}: {}", step.index, step.kind, msg));
            }
        }
        if let Some(e) = &self.destroy_error {
            return Some(format!("destroy: {}", e));
        }
        self.destroy_check_error.as_ref().map(|e| format!("destroy check: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(steps: Vec<StepReport>) -> RunReport {
        let now = Utc::now();
        RunReport {
            id: Uuid::nil(),
            case: "virtual_network_basic".into(),
            started_at: now,
            finished_at: now,
            steps,
            destroy_error: None,
            destroy_check_error: None,
        }
    }

    #[test]
    fn all_passed_is_pass() {
        let r = report(vec![StepReport {
            index: 1,
            kind: "apply".into(),
            outcome: StepOutcome::Passed,
            log: String::new(),
        }]);
        assert!(r.passed());
        assert!(r.summary().starts_with("PASS virtual_network_basic"));
    }

    #[test]
    fn failed_step_names_itself_in_the_summary() {
        let r = report(vec![StepReport {
            index: 1,
            kind: "apply".into(),
            outcome: StepOutcome::Failed("apply exited with code 1".into()),
            log: String::new(),
        }]);
        assert!(!r.passed());
        assert!(r.summary().contains("step 1 apply: apply exited with code 1"));
    }

    #[test]
    fn destroy_check_failure_fails_the_run() {
        let mut r = report(vec![]);
        r.destroy_check_error = Some("still exists".into());
        assert!(!r.passed());
        assert!(r.first_failure().unwrap().contains("destroy check"));
    }
}
