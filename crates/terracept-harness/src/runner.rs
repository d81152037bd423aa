use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use terracept_arm::ArmClient;
use terracept_config::Settings;
use terracept_domain::ResourceId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::case::{StepKind, TestCase, TestStep};
use crate::check::CheckContext;
use crate::error::HarnessError;
use crate::report::{RunReport, StepOutcome, StepReport};
use crate::state::StateSnapshot;

/// Executes test cases by driving the `terraform` binary.
///
/// Each case gets its own workspace directory under the settings'
/// `workspace_root`; the step's fixture is written as `main.tf` there. Steps
/// run strictly in order, and the workspace is always destroyed at the end,
/// whether the steps passed or not.
pub struct Runner {
    settings: Settings,
    client: Arc<ArmClient>,
    timeout: Duration,
}

/// Exit code `terraform plan -detailed-exitcode` uses for "changes pending".
const PLAN_DIRTY: i32 = 2;

/// Hard cap per terraform invocation. Gateways are the slowest resources
/// under test and still finish well inside this.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

impl Runner {
    pub fn new(settings: Settings, client: Arc<ArmClient>) -> Self {
        Self { settings, client, timeout: DEFAULT_TIMEOUT }
    }

    /// Override the per-invocation terraform timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one case to completion. Never returns an error: every failure
    /// mode is captured in the report so the destroy still happens and the
    /// caller can aggregate outcomes.
    pub async fn run_case(&self, case: &TestCase) -> RunReport {
        let started_at = Utc::now();
        info!(case = %case.name, "running test case");

        let workspace = self.workspace_dir(case);
        let mut steps = Vec::with_capacity(case.steps.len());
        let mut ctx = RunCtx::default();

        for (i, step) in case.steps.iter().enumerate() {
            let index = i + 1;
            let kind = step_label(&step.kind);

            if ctx.failed {
                steps.push(StepReport {
                    index,
                    kind,
                    outcome: StepOutcome::Skipped,
                    log: String::new(),
                });
                continue;
            }

            let mut log = String::new();
            let outcome = match self.execute_step(case, step, &workspace, &mut ctx, &mut log).await {
                Ok(()) => StepOutcome::Passed,
                Err(e) => {
                    warn!(case = %case.name, step = index, error = %e, "step failed");
                    ctx.failed = true;
                    StepOutcome::Failed(e.to_string())
                }
            };
            steps.push(StepReport { index, kind, outcome, log });
        }

        // Always tear down, even after a failed step, so acceptance runs
        // never leak resources.
        let destroy_error = if ctx.applied {
            match self.run_tf(&workspace, &["destroy", "-auto-approve", "-no-color"]).await {
                Ok((0, _)) => None,
                Ok((code, log)) => Some(format!("destroy exited with code {}\n{}", code, tail(&log))),
                Err(e) => Some(e.to_string()),
            }
        } else {
            None
        };

        let mut destroy_check_error = None;
        if case.check_destroy && destroy_error.is_none() {
            if let Some(id) = &ctx.last_id {
                destroy_check_error = match case.resource.exists(&self.client, id).await {
                    Ok(false) => None,
                    Ok(true) => Some(format!(
                        "{} '{}' still exists in resource group '{}'",
                        case.data.resource_type, id.name, id.resource_group
                    )),
                    Err(e) => Some(e.to_string()),
                };
            }
        }

        RunReport {
            id: Uuid::new_v4(),
            case: case.name.clone(),
            started_at,
            finished_at: Utc::now(),
            steps,
            destroy_error,
            destroy_check_error,
        }
    }

    async fn execute_step(
        &self,
        case: &TestCase,
        step: &TestStep,
        workspace: &Path,
        ctx: &mut RunCtx,
        log: &mut String,
    ) -> Result<(), HarnessError> {
        tokio::fs::create_dir_all(workspace)
            .await
            .map_err(|e| HarnessError::Workspace(format!("create {}: {}", workspace.display(), e)))?;
        tokio::fs::write(workspace.join("main.tf"), &step.config)
            .await
            .map_err(|e| HarnessError::Workspace(format!("write main.tf: {}", e)))?;

        if !ctx.initialized {
            self.run_expect_ok(workspace, &["init", "-no-color"], log).await?;
            ctx.initialized = true;
        }

        match &step.kind {
            StepKind::Apply => {
                ctx.applied = true;
                self.run_expect_ok(workspace, &["apply", "-auto-approve", "-no-color"], log)
                    .await?;
                let state = self.show_state(workspace, log).await?;
                self.capture_root_id(case, &state, ctx);
                self.run_checks(case, step, &state).await
            }
            StepKind::ImportCheck => {
                let (exit, out) = self
                    .run_tf(workspace, &["plan", "-detailed-exitcode", "-no-color"])
                    .await?;
                log.push_str(&out);
                match exit {
                    0 => Ok(()),
                    PLAN_DIRTY => Err(HarnessError::PostCondition(format!(
                        "{}: plan is not empty after import step",
                        case.data.resource_address()
                    ))),
                    code => Err(HarnessError::Terraform {
                        operation: "plan".into(),
                        message: format!("exited with code {}\n{}", code, tail(&out)),
                    }),
                }
            }
            StepKind::ExpectError { contains } => {
                ctx.applied = true;
                let (exit, out) = self
                    .run_tf(workspace, &["apply", "-auto-approve", "-no-color"])
                    .await?;
                log.push_str(&out);
                if exit == 0 {
                    return Err(HarnessError::PostCondition(format!(
                        "apply succeeded, expected an error containing '{}'",
                        contains
                    )));
                }
                if !out.contains(contains.as_str()) {
                    return Err(HarnessError::PostCondition(format!(
                        "apply failed but output did not contain '{}'",
                        contains
                    )));
                }
                Ok(())
            }
            StepKind::Disappears => {
                ctx.applied = true;
                self.run_expect_ok(workspace, &["apply", "-auto-approve", "-no-color"], log)
                    .await?;
                let state = self.show_state(workspace, log).await?;
                self.capture_root_id(case, &state, ctx);
                self.run_checks(case, step, &state).await?;

                let address = case.data.resource_address();
                let id = ctx.last_id.clone().ok_or_else(|| HarnessError::StateLookup {
                    address: address.clone(),
                    message: "no resource ID captured for out-of-band delete".into(),
                })?;
                info!(%id, "deleting resource out-of-band");
                case.resource.destroy(&self.client, &id).await?;

                let (exit, out) = self
                    .run_tf(workspace, &["plan", "-detailed-exitcode", "-no-color"])
                    .await?;
                log.push_str(&out);
                match exit {
                    PLAN_DIRTY => Ok(()),
                    0 => Err(HarnessError::PostCondition(format!(
                        "{}: plan is empty after out-of-band delete",
                        address
                    ))),
                    code => Err(HarnessError::Terraform {
                        operation: "plan".into(),
                        message: format!("exited with code {}\n{}", code, tail(&out)),
                    }),
                }
            }
        }
    }

    async fn run_checks(
        &self,
        case: &TestCase,
        step: &TestStep,
        state: &StateSnapshot,
    ) -> Result<(), HarnessError> {
        let ctx = CheckContext { state, client: &self.client, data: &case.data };
        for check in &step.checks {
            debug!(case = %case.name, check = %check.describe(), "running check");
            check.check(&ctx).await?;
        }
        Ok(())
    }

    fn capture_root_id(&self, case: &TestCase, state: &StateSnapshot, ctx: &mut RunCtx) {
        // Best effort: some fixtures (associations) have a root address whose
        // ID is not an ARM resource path.
        if let Ok(raw) = state.resource_id(&case.data.resource_address()) {
            if let Ok(id) = ResourceId::parse(raw) {
                ctx.last_id = Some(id);
            }
        }
    }

    async fn show_state(&self, workspace: &Path, log: &mut String) -> Result<StateSnapshot, HarnessError> {
        let (exit, out) = self.run_tf(workspace, &["show", "-json", "-no-color"]).await?;
        if exit != 0 {
            log.push_str(&out);
            return Err(HarnessError::Terraform {
                operation: "show".into(),
                message: format!("exited with code {}\n{}", exit, tail(&out)),
            });
        }
        StateSnapshot::from_show_json(&out)
    }

    async fn run_expect_ok(
        &self,
        workspace: &Path,
        args: &[&str],
        log: &mut String,
    ) -> Result<(), HarnessError> {
        let (exit, out) = self.run_tf(workspace, args).await?;
        log.push_str(&out);
        if exit != 0 {
            return Err(HarnessError::Terraform {
                operation: args[0].to_string(),
                message: format!("exited with code {}\n{}", exit, tail(&out)),
            });
        }
        Ok(())
    }

    fn workspace_dir(&self, case: &TestCase) -> PathBuf {
        // random_integer keeps concurrent runs of the same case apart
        self.settings
            .workspace_root
            .join(format!("{}-{}", case.name, case.data.random_integer))
    }

    // ── Process execution ─────────────────────────────────────────────────────

    /// Run a terraform sub-command, capturing combined stdout+stderr.
    /// Returns (exit_code, combined_log).
    async fn run_tf(&self, workspace: &Path, args: &[&str]) -> Result<(i32, String), HarnessError> {
        let binary = &self.settings.terraform_binary;
        info!(binary, ?args, workspace = %workspace.display(), "running terraform");

        let mut cmd = Command::new(binary);
        cmd.args(args)
            .current_dir(workspace)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            // Disable interactive prompts; ARM_* credentials pass through
            // from the parent environment for provider auth.
            .env("TF_IN_AUTOMATION", "1")
            .env("TF_INPUT", "0");

        let mut child = cmd
            .spawn()
            .map_err(|e| HarnessError::Terraform {
                operation: args[0].to_string(),
                message: format!("spawn {}: {}", binary, e),
            })?;

        let stdout = child.stdout.take().ok_or_else(|| HarnessError::Terraform {
            operation: args[0].to_string(),
            message: "stdout not piped".into(),
        })?;
        let stderr = child.stderr.take().ok_or_else(|| HarnessError::Terraform {
            operation: args[0].to_string(),
            message: "stderr not piped".into(),
        })?;

        // Merge stdout and stderr by reading them concurrently into a shared
        // log buffer; each line is mirrored to tracing.
        let mut log = String::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();

        let tx1 = tx.clone();
        let stdout_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let _ = tx1.send(line);
            }
        });

        let tx2 = tx.clone();
        let stderr_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let _ = tx2.send(line);
            }
        });

        drop(tx); // close our own sender so rx finishes when both tasks finish

        let collect = async {
            while let Some(line) = rx.recv().await {
                debug!(target: "terracept::tf", "{}", line);
                log.push_str(&line);
                log.push('\n');
            }
        };
        let timed_out = tokio::time::timeout(self.timeout, collect).await.is_err();

        // The reader tasks only finish once the child's pipes close, so a
        // hung process must be killed before they are awaited.
        if timed_out {
            let _ = child.kill().await;
        }

        stdout_task.await.ok();
        stderr_task.await.ok();

        if timed_out {
            return Err(HarnessError::Terraform {
                operation: args[0].to_string(),
                message: format!("timed out after {}s", self.timeout.as_secs()),
            });
        }

        let status = child.wait().await.map_err(|e| HarnessError::Terraform {
            operation: args[0].to_string(),
            message: format!("wait {}: {}", binary, e),
        })?;

        let code = status.code().unwrap_or(-1);
        if code != 0 {
            warn!(binary, code, "terraform exited non-zero");
        }
        Ok((code, log))
    }
}

#[derive(Default)]
struct RunCtx {
    initialized: bool,
    applied: bool,
    failed: bool,
    last_id: Option<ResourceId>,
}

fn step_label(kind: &StepKind) -> String {
    match kind {
        StepKind::Apply => "apply".into(),
        StepKind::ImportCheck => "import-check".into(),
        StepKind::ExpectError { .. } => "expect-error".into(),
        StepKind::Disappears => "disappears".into(),
    }
}

/// Last few lines of a terraform log, for error messages.
fn tail(log: &str) -> String {
    let lines: Vec<&str> = log.lines().collect();
    let start = lines.len().saturating_sub(10);
    lines[start..].join("\n")
}
