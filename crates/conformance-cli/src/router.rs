//! Command routing and the single top-level failure handler

use crate::args::{Cli, Commands};
use crate::commands;
use conformance_core::workflow;
use conformance_core::{Console, ExecutionError, StdoutConsole};
use std::process::ExitCode;

/// Route CLI commands to their handlers and map the outcome to an exit code
pub async fn route(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Some(Commands::Check) => return commands::check::check().await,
        Some(Commands::Run(args)) => commands::run::run(args).await,
        None => commands::run::run(cli.run).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let failed = err.execution();
            tracing::error!(
                code = err.error_code(),
                program = failed.map(ExecutionError::program),
                exit_code = failed.and_then(ExecutionError::exit_code),
                "action failed"
            );
            let console = StdoutConsole;
            workflow::report_failure(&console as &dyn Console, &err);
            ExitCode::FAILURE
        }
    }
}
