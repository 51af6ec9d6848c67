//! Typed, validated view of the action inputs

mod validation;

pub use validation::{ConfigValidator, FUNCTION_TYPES};

use crate::command::client_flags;
use crate::error::ActionResult;
use crate::inputs::{ActionInputs, InputName};
use std::path::{Path, PathBuf};

/// Where the conformance client binary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSource {
    /// Clone the conformance repository and `go build` the client to this path
    Build { output: PathBuf },
    /// Use an already built binary, skipping installation
    Prebuilt(PathBuf),
}

/// Validated action configuration
///
/// Built once at startup from [`ActionInputs`]. Construction fails with a
/// configuration error before any subprocess has been spawned.
#[derive(Debug, Clone)]
pub struct ConformanceConfig {
    inputs: ActionInputs,
    base_dir: PathBuf,
    client: ClientSource,
}

impl ConformanceConfig {
    /// Validate inputs and resolve paths against `base_dir`
    pub fn new(inputs: ActionInputs, base_dir: impl Into<PathBuf>) -> ActionResult<Self> {
        let base_dir = base_dir.into();
        ConfigValidator::new(&base_dir).validate(&inputs)?;

        let output = dirs::home_dir()
            .unwrap_or_else(|| base_dir.clone())
            .join("client");

        Ok(Self {
            inputs,
            base_dir,
            client: ClientSource::Build { output },
        })
    }

    /// Use a prebuilt client binary instead of building one
    pub fn with_prebuilt_client(mut self, path: impl Into<PathBuf>) -> Self {
        self.client = ClientSource::Prebuilt(path.into());
        self
    }

    /// Build the client to a custom output path
    pub fn with_build_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.client = ClientSource::Build {
            output: path.into(),
        };
        self
    }

    pub fn inputs(&self) -> &ActionInputs {
        &self.inputs
    }

    /// Directory the conformance repository is cloned into
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn client(&self) -> &ClientSource {
        &self.client
    }

    /// Git tag of the client to build; latest release when `None`
    pub fn version(&self) -> Option<&str> {
        self.inputs.get(InputName::Version)
    }

    /// Working directory of the client run, which is also where diagnostics are read
    pub fn run_directory(&self) -> PathBuf {
        match self.inputs.get(InputName::WorkingDirectory) {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        }
    }

    /// Arguments passed to the conformance client
    pub fn client_args(&self) -> Vec<String> {
        client_flags(&self.inputs)
    }
}
