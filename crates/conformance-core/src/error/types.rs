//! Core error types

use thiserror::Error;

/// Result type alias for action operations
pub type ActionResult<T> = Result<T, ActionError>;

/// Failure of a single external process
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be started (binary missing, bad working directory, ...)
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("'{program}' exited with {}{}", exit_label(*code), stderr_suffix(stderr))]
    NonZeroExit {
        program: String,
        /// `None` when the process was terminated by a signal
        code: Option<i32>,
        stderr: String,
    },

    /// The process succeeded but printed nothing where output was required
    #[error("'{program}' produced no output")]
    EmptyOutput { program: String },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Main error type for the action
#[derive(Error, Debug)]
pub enum ActionError {
    /// Invalid or missing input, detected before any subprocess is spawned
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        input: Option<String>,
    },

    /// A git or go step of the client installation failed
    #[error("Install step '{step}' failed: {source}")]
    Install {
        step: String,
        #[source]
        source: ExecutionError,
    },

    /// The conformance client itself failed
    #[error("Conformance client failed: {source}")]
    Client {
        #[source]
        source: ExecutionError,
    },

    /// Filesystem errors outside of best-effort diagnostics
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}
