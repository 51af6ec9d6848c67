//! `run` command: load inputs, install the client, run it

use crate::args::RunArgs;
use conformance_core::{
    ActionError, ActionResult, ConformanceAction, ConformanceConfig, InputLoader, ProcessRunner,
    StdoutConsole,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Run the conformance action
pub async fn run(args: RunArgs) -> ActionResult<()> {
    let config = build_config(args)?;
    tracing::debug!(
        base_dir = %config.base_dir().display(),
        inputs = config.inputs().len(),
        "configuration loaded"
    );

    let console = Arc::new(StdoutConsole);
    let runner = Arc::new(ProcessRunner::new(console.clone()));
    ConformanceAction::new(config, runner, console).run().await
}

/// Build the validated configuration; nothing is spawned before this succeeds
fn build_config(args: RunArgs) -> ActionResult<ConformanceConfig> {
    let mut loader = InputLoader::new().with_env();
    if let Some(path) = &args.inputs_file {
        loader = loader.with_file(path);
    }
    let inputs = loader.with_args(args.inputs).load()?;

    let base_dir = resolve_base_dir(args.base_dir)?;
    let mut config = ConformanceConfig::new(inputs, base_dir)?;

    if let Some(binary) = args.client_binary {
        config = config.with_prebuilt_client(binary);
    } else if let Some(output) = args.client_output {
        let output = config.base_dir().join(output);
        config = config.with_build_output(output);
    }
    Ok(config)
}

fn resolve_base_dir(base_dir: Option<PathBuf>) -> ActionResult<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| ActionError::io(format!("cannot determine current directory: {e}")))?;
    let dir = match base_dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    if !dir.is_dir() {
        return Err(ActionError::config(format!(
            "base directory '{}' does not exist",
            dir.display()
        )));
    }
    Ok(dir)
}
