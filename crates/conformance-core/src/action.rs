//! Action orchestration: install the client, then run it once

use crate::command::Invocation;
use crate::config::{ClientSource, ConformanceConfig};
use crate::console::Console;
use crate::error::{ActionError, ActionResult};
use crate::install::ClientInstaller;
use crate::runner::CommandRunner;
use crate::workflow::LogGroup;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

/// One run of the conformance action
///
/// Steps run strictly in sequence and the first failure ends the run. An
/// install failure never reaches the client.
pub struct ConformanceAction {
    config: ConformanceConfig,
    runner: Arc<dyn CommandRunner>,
    console: Arc<dyn Console>,
}

impl ConformanceAction {
    pub fn new(
        config: ConformanceConfig,
        runner: Arc<dyn CommandRunner>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            config,
            runner,
            console,
        }
    }

    /// Install the client and run it against the function under test
    #[instrument(skip(self), fields(base_dir = %self.config.base_dir().display()))]
    pub async fn run(&self) -> ActionResult<()> {
        let client = self.client_binary().await?;
        self.run_client(client).await
    }

    async fn client_binary(&self) -> ActionResult<PathBuf> {
        match self.config.client() {
            ClientSource::Prebuilt(path) => {
                let path = self.config.base_dir().join(path);
                tracing::info!(client = %path.display(), "using prebuilt conformance client");
                Ok(path)
            }
            ClientSource::Build { output } => {
                let _group = LogGroup::start(self.console.as_ref(), "Install conformance client");
                ClientInstaller::new(self.runner.as_ref(), self.config.base_dir(), output)
                    .with_version(self.config.version())
                    .install()
                    .await
            }
        }
    }

    async fn run_client(&self, client: PathBuf) -> ActionResult<()> {
        let invocation = Invocation::new(client.display().to_string(), self.config.run_directory())
            .args(self.config.client_args());

        let _group = LogGroup::start(self.console.as_ref(), "Run conformance client");
        self.runner
            .run(&invocation)
            .await
            .map_err(ActionError::client)?;

        tracing::info!("conformance tests passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandOutput;
    use crate::console::MemoryConsole;
    use crate::error::ExecutionError;
    use crate::inputs::{ActionInputs, InputName};
    use crate::install::CONFORMANCE_REPO_DIR;
    use crate::runner::MockCommandRunner;
    use tempfile::TempDir;

    fn http_inputs() -> ActionInputs {
        ActionInputs::new()
            .with(InputName::FunctionType, "http")
            .with(InputName::ValidateMapping, "true")
            .with(InputName::Source, "/src")
            .with(InputName::Target, "/deploy")
    }

    fn build_action(
        config: ConformanceConfig,
        runner: MockCommandRunner,
    ) -> (ConformanceAction, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let action = ConformanceAction::new(config, Arc::new(runner), console.clone());
        (action, console)
    }

    #[tokio::test]
    async fn test_prebuilt_client_invoked_with_flags() {
        let base = TempDir::new().unwrap();
        let config = ConformanceConfig::new(http_inputs(), base.path())
            .unwrap()
            .with_prebuilt_client("/opt/client");

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv| {
                inv.program() == "/opt/client"
                    && inv.arguments()
                        == [
                            "-type=http",
                            "-validate-mapping=true",
                            "-builder-source=/src",
                            "-builder-target=/deploy",
                        ]
            })
            .times(1)
            .returning(|_| Ok(CommandOutput::success("ok")));

        let (action, _console) = build_action(config, runner);
        action.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_client_runs_in_working_directory() {
        let base = TempDir::new().unwrap();
        std::fs::create_dir(base.path().join("functions")).unwrap();
        let expected_dir = base.path().join("functions");
        let inputs = http_inputs().with(InputName::WorkingDirectory, "functions");
        let config = ConformanceConfig::new(inputs, base.path())
            .unwrap()
            .with_prebuilt_client("/opt/client");

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(move |inv| inv.working_directory() == expected_dir.as_path())
            .times(1)
            .returning(|_| Ok(CommandOutput::success("")));

        let (action, _console) = build_action(config, runner);
        action.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_client_failure_is_reported_as_client_error() {
        let base = TempDir::new().unwrap();
        let config = ConformanceConfig::new(http_inputs(), base.path())
            .unwrap()
            .with_prebuilt_client("/opt/client");

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(ExecutionError::NonZeroExit {
                program: "/opt/client".to_string(),
                code: Some(1),
                stderr: "Validation failure".to_string(),
            })
        });

        let (action, _console) = build_action(config, runner);
        let err = action.run().await.unwrap_err();

        assert_eq!(err.error_code(), "CONFORMANCE_CLIENT_EXIT");
        assert!(err.to_string().contains("Validation failure"));
    }

    #[tokio::test]
    async fn test_install_failure_skips_client_run() {
        let base = TempDir::new().unwrap();
        std::fs::create_dir_all(base.path().join(CONFORMANCE_REPO_DIR)).unwrap();
        let inputs = http_inputs().with(InputName::Version, "v1.0.0");
        let config = ConformanceConfig::new(inputs, base.path())
            .unwrap()
            .with_build_output(base.path().join("client"));

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv| inv.program() == "git")
            .times(1)
            .returning(|_| {
                Err(ExecutionError::Spawn {
                    program: "git".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
            });

        let (action, console) = build_action(config, runner);
        let err = action.run().await.unwrap_err();

        assert_eq!(err.error_code(), "CONFORMANCE_INSTALL_SPAWN");
        assert!(!console.contains("Run conformance client"));
    }

    #[tokio::test]
    async fn test_built_client_is_run_after_install() {
        let base = TempDir::new().unwrap();
        std::fs::create_dir_all(base.path().join(CONFORMANCE_REPO_DIR)).unwrap();
        let output = base.path().join("client");
        let output_str = output.display().to_string();
        let inputs = http_inputs().with(InputName::Version, "v1.0.0");
        let config = ConformanceConfig::new(inputs, base.path())
            .unwrap()
            .with_build_output(&output);

        let mut runner = MockCommandRunner::new();
        let mut seq = mockall::Sequence::new();
        runner
            .expect_run()
            .withf(|inv| inv.program() == "git" || inv.program() == "go")
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutput::success("")));
        runner
            .expect_run()
            .withf(move |inv| inv.program() == output_str)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutput::success("")));

        let (action, console) = build_action(config, runner);
        action.run().await.unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "::group::Install conformance client",
                "::endgroup::",
                "::group::Run conformance client",
                "::endgroup::",
            ]
        );
    }
}
