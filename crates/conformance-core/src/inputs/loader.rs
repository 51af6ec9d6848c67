//! Layered input loading

use super::{ActionInputs, InputName, env_loader, file_loader};
use crate::error::{ActionError, ActionResult};
use std::path::{Path, PathBuf};

/// Source of input values
#[derive(Debug, Clone)]
pub enum InputSource {
    /// `INPUT_*` environment variables set by the Actions runner
    Environment,
    /// A JSON file of input name to value
    File(PathBuf),
    /// `name=value` pairs given on the command line
    CommandLine(Vec<String>),
}

/// Input loader; later sources override earlier ones
#[derive(Debug, Default)]
pub struct InputLoader {
    sources: Vec<InputSource>,
}

impl InputLoader {
    /// Create a new input loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input source
    pub fn add_source(mut self, source: InputSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(InputSource::Environment)
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(InputSource::File(path.as_ref().to_path_buf()))
    }

    /// Add command line `name=value` pairs
    pub fn with_args(self, pairs: Vec<String>) -> Self {
        self.add_source(InputSource::CommandLine(pairs))
    }

    /// Load inputs from all sources
    pub fn load(self) -> ActionResult<ActionInputs> {
        let mut inputs = ActionInputs::new();
        for source in &self.sources {
            let layer = Self::load_from_source(source)?;
            tracing::debug!(?source, count = layer.len(), "merging input source");
            inputs.merge(layer);
        }
        let names: Vec<_> = inputs.iter().map(|(name, _)| name.as_str()).collect();
        tracing::debug!(inputs = ?names, "loaded action inputs");
        Ok(inputs)
    }

    fn load_from_source(source: &InputSource) -> ActionResult<ActionInputs> {
        match source {
            InputSource::Environment => Ok(env_loader::load_from_env()),
            InputSource::File(path) => file_loader::load_from_file(path),
            InputSource::CommandLine(pairs) => parse_pairs(pairs),
        }
    }
}

/// Parse `name=value` pairs
///
/// Only the first `=` separates name from value, so values may contain `=`
/// (e.g. `runtimeEnvs=A=1`). An empty value leaves the input unset in this
/// layer, so earlier sources keep theirs.
fn parse_pairs(pairs: &[String]) -> ActionResult<ActionInputs> {
    let mut inputs = ActionInputs::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ActionError::config(format!("expected name=value, got '{pair}'"))
        })?;
        let name: InputName = key.trim().parse()?;
        inputs.set(name, value);
    }
    Ok(inputs)
}
