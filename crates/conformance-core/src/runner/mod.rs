//! Command runner
//!
//! Runs one external process to completion and turns failure into an
//! [`ExecutionError`]. On failure the client's diagnostic files are dumped to the
//! console, strictly after the process exit has been observed.

mod diagnostics;

pub use diagnostics::{DIAGNOSTIC_FILES, DiagnosticRead, dump_diagnostics};

use crate::command::{CommandOutput, Invocation};
use crate::console::Console;
use crate::error::ExecutionError;
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;
use tokio::process::Command;
use tracing::instrument;

/// Executes invocations one at a time
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the invocation and wait for it to exit
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ExecutionError>;
}

/// Runner backed by real OS processes
///
/// No shell is involved: the program is executed directly with its argument
/// vector, in the invocation's working directory.
pub struct ProcessRunner {
    console: Arc<dyn Console>,
}

impl ProcessRunner {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    async fn execute(&self, invocation: &Invocation) -> Result<CommandOutput, ExecutionError> {
        let output = Command::new(invocation.program())
            .args(invocation.arguments())
            .current_dir(invocation.working_directory())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // Captured output is echoed whether or not the process succeeded.
        self.echo(&stdout);
        self.echo(&stderr);

        if output.status.success() {
            Ok(CommandOutput {
                exit_code: output.status.code(),
                stdout,
                stderr,
            })
        } else {
            Err(ExecutionError::NonZeroExit {
                program: invocation.program().to_string(),
                code: output.status.code(),
                stderr,
            })
        }
    }

    fn echo(&self, text: &str) {
        for line in text.lines() {
            self.console.line(line);
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, invocation), fields(program = %invocation.program(), cwd = %invocation.working_directory().display()))]
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ExecutionError> {
        self.console.line(&format!("RUNNING: \"{invocation}\""));
        tracing::debug!(args = ?invocation.arguments(), "spawning process");

        let start = Instant::now();
        let result = self.execute(invocation).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(output) => {
                tracing::info!(elapsed_ms, "process completed successfully");
                Ok(output)
            }
            Err(err) => {
                tracing::warn!(elapsed_ms, error = %err, "process failed, dumping diagnostics");
                dump_diagnostics(self.console.as_ref(), invocation.working_directory()).await;
                Err(err)
            }
        }
    }
}
