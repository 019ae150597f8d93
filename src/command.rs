use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{CommandError, RunError};
use crate::judgment::DataJudgment;
use crate::policy::Policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Accepts a successful exit, or any exit code in the accepted set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCodeJudgment {
    accepted: Vec<i32>,
}

impl ExitCodeJudgment {
    pub fn new(accepted: Vec<i32>) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> &[i32] {
        &self.accepted
    }
}

impl DataJudgment<Option<i32>, CommandError> for ExitCodeJudgment {
    fn judge(&self, code: &Option<i32>, outcome: &Result<(), CommandError>) -> bool {
        outcome.is_ok() || code.is_some_and(|code| self.accepted.contains(&code))
    }
}

/// Runs `spec` under `policy`, returning the last exit code seen.
pub async fn run_command(
    policy: &Policy<ExitCodeJudgment>,
    spec: &CommandSpec,
) -> (Option<i32>, Result<(), RunError<CommandError>>) {
    policy.run_with_data_async(|| run_once(spec)).await
}

pub async fn run_once(spec: &CommandSpec) -> (Option<i32>, Result<(), CommandError>) {
    info!(program = %spec.program, args = ?spec.args, "running command");

    let status = Command::new(&spec.program).args(&spec.args).status().await;

    match status {
        Ok(status) if status.success() => (status.code(), Ok(())),
        Ok(status) => {
            debug!(%status, "command failed");
            let code = status.code();
            (code, Err(CommandError::ExitCode { code }))
        }
        Err(source) => (
            None,
            Err(CommandError::Spawn {
                program: spec.program.clone(),
                source,
            }),
        ),
    }
}
