use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use reattempt::RunError;
use reattempt::cli::CliArgs;
use reattempt::command::run_command;
use reattempt::error::CommandError;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = args.into_config()?;
    info!(
        attempts = config.policy.attempt_limit(),
        delay_ms = config.policy.delay().as_millis(),
        "starting retry loop"
    );

    let (code, result) = run_command(&config.policy, &config.command).await;

    match result {
        Ok(()) => Ok(()),
        Err(RunError::Operation(CommandError::ExitCode { code: Some(code) })) => {
            info!(code, "accepted exit code");
            std::process::exit(code)
        }
        Err(RunError::Operation(err)) => Err(err.into()),
        Err(err @ RunError::Retry(_)) => {
            let last = code.map_or_else(|| "none".to_string(), |c| c.to_string());
            bail!(
                "`{}` {err} ({} attempt(s), last exit code {last})",
                config.command.program,
                config.policy.attempt_limit()
            )
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("info,reattempt=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
