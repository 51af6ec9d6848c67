//! Conformance client installation
//!
//! Clones the conformance repository (once), checks out the requested tag or the
//! latest release, and builds the client with `go build`. Every step is a
//! separate runner invocation; the first failure stops the installation.

use crate::command::{CommandOutput, Invocation};
use crate::error::{ActionError, ActionResult, ExecutionError};
use crate::runner::CommandRunner;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Upstream repository of the conformance client
pub const CONFORMANCE_REPO_URL: &str =
    "https://github.com/GoogleCloudPlatform/functions-framework-conformance.git";

/// Directory the repository is cloned into, relative to the base directory
pub const CONFORMANCE_REPO_DIR: &str = "functions-framework-conformance";

/// Builds the conformance client from source
pub struct ClientInstaller<'a> {
    runner: &'a dyn CommandRunner,
    base_dir: &'a Path,
    version: Option<&'a str>,
    output: &'a Path,
}

impl<'a> ClientInstaller<'a> {
    pub fn new(runner: &'a dyn CommandRunner, base_dir: &'a Path, output: &'a Path) -> Self {
        Self {
            runner,
            base_dir,
            version: None,
            output,
        }
    }

    /// Check out this tag instead of the latest release
    pub fn with_version(mut self, version: Option<&'a str>) -> Self {
        self.version = version;
        self
    }

    fn repo_dir(&self) -> PathBuf {
        self.base_dir.join(CONFORMANCE_REPO_DIR)
    }

    fn client_dir(&self) -> PathBuf {
        self.repo_dir().join("client")
    }

    /// Install the client, returning the path of the built binary
    #[instrument(skip(self), fields(version = self.version.unwrap_or("latest"), output = %self.output.display()))]
    pub async fn install(&self) -> ActionResult<PathBuf> {
        self.clone_repo().await?;
        self.checkout().await?;

        let client_dir = self.client_dir();
        let build = Invocation::new("go", &client_dir)
            .arg("build")
            .arg("-o")
            .arg(self.output.display().to_string());
        self.step("go build", &build).await?;

        tracing::info!("conformance client installed");
        Ok(self.output.to_path_buf())
    }

    async fn clone_repo(&self) -> ActionResult<()> {
        if tokio::fs::metadata(self.repo_dir()).await.is_ok() {
            tracing::debug!(
                repo = %self.repo_dir().display(),
                "repository already present, skipping clone"
            );
            return Ok(());
        }
        let clone = Invocation::new("git", self.base_dir)
            .arg("clone")
            .arg(CONFORMANCE_REPO_URL);
        self.step("git clone", &clone).await?;
        Ok(())
    }

    async fn checkout(&self) -> ActionResult<()> {
        let client_dir = self.client_dir();
        let tag = match self.version {
            Some(version) => {
                let fetch = Invocation::new("git", &client_dir)
                    .arg("fetch")
                    .arg("origin")
                    .arg(format!("refs/tags/{version}"));
                self.step("git fetch", &fetch).await?;
                version.to_string()
            }
            None => self.latest_release_tag(&client_dir).await?,
        };

        let checkout = Invocation::new("git", &client_dir).arg("checkout").arg(&tag);
        self.step("git checkout", &checkout).await?;
        tracing::debug!(%tag, "checked out conformance client");
        Ok(())
    }

    /// Most recent tag reachable from any tag ref
    async fn latest_release_tag(&self, client_dir: &Path) -> ActionResult<String> {
        let fetch = Invocation::new("git", client_dir).arg("fetch").arg("--tags");
        self.step("git fetch", &fetch).await?;

        let rev_list = Invocation::new("git", client_dir)
            .arg("rev-list")
            .arg("--tags")
            .arg("--max-count=1");
        let commit = self.captured_line("git rev-list", &rev_list).await?;

        let describe = Invocation::new("git", client_dir)
            .arg("describe")
            .arg("--tags")
            .arg(commit);
        self.captured_line("git describe", &describe).await
    }

    async fn captured_line(&self, step: &str, invocation: &Invocation) -> ActionResult<String> {
        let output = self.step(step, invocation).await?;
        output.first_line().map(str::to_string).ok_or_else(|| {
            ActionError::install(
                step,
                ExecutionError::EmptyOutput {
                    program: invocation.program().to_string(),
                },
            )
        })
    }

    async fn step(&self, step: &str, invocation: &Invocation) -> ActionResult<CommandOutput> {
        self.runner
            .run(invocation)
            .await
            .map_err(|e| ActionError::install(step, e))
    }
}
