use std::time::Duration;

use clap::Parser;

use crate::command::{CommandSpec, ExitCodeJudgment};
use crate::error::{ConfigError, Rejected};
use crate::policy::Policy;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "reattempt",
    version,
    about = "Run a command until it succeeds or the attempt limit is reached"
)]
pub struct CliArgs {
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub attempts: i64,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub backoff: i64,

    #[arg(long, default_value_t = 1000)]
    pub time_unit_ms: u64,

    #[arg(long = "accept-exit-code", value_name = "CODE")]
    pub accept_exit_codes: Vec<i32>,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub policy: Policy<ExitCodeJudgment>,
    pub command: CommandSpec,
    pub verbose: bool,
}

impl CliArgs {
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        validate_range("time-unit-ms", self.time_unit_ms, 1, 3_600_000)?;

        let policy = Policy::new()
            .with_attempt_limit(self.attempts)
            .map_err(invalid("attempts"))?
            .with_backoff(self.backoff)
            .map_err(invalid("backoff"))?
            .with_time_unit(Duration::from_millis(self.time_unit_ms))
            .with_judgment(ExitCodeJudgment::new(self.accept_exit_codes));

        let mut words = self.command.into_iter();
        let program = words.next().ok_or(ConfigError::MissingCommand)?;

        Ok(AppConfig {
            policy,
            command: CommandSpec {
                program,
                args: words.collect(),
            },
            verbose: self.verbose,
        })
    }
}

fn invalid<P>(field: &'static str) -> impl Fn(Rejected<P>) -> ConfigError {
    move |rejected| ConfigError::InvalidPolicy {
        field,
        reason: rejected.error(),
    }
}

fn validate_range(field: &'static str, actual: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if actual < min || actual > max {
        return Err(ConfigError::OutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}
