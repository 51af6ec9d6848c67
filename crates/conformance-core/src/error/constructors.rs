//! Constructor methods for ActionError

use super::types::{ActionError, ExecutionError};

impl ActionError {
    /// Create a configuration error not tied to a particular input
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            input: None,
        }
    }

    /// Create a configuration error for a named input
    pub fn invalid_input(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            input: Some(input.into()),
        }
    }

    /// Wrap a failed install step
    pub fn install(step: impl Into<String>, source: ExecutionError) -> Self {
        Self::Install {
            step: step.into(),
            source,
        }
    }

    /// Wrap a failed client run
    pub fn client(source: ExecutionError) -> Self {
        Self::Client { source }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error with the offending path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl ExecutionError {
    /// Name of the program that failed
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. } => program,
            Self::NonZeroExit { program, .. } => program,
            Self::EmptyOutput { program } => program,
        }
    }

    /// Exit code, if the process ran and reported one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Spawn { .. } => None,
            Self::NonZeroExit { code, .. } => *code,
            Self::EmptyOutput { .. } => Some(0),
        }
    }
}
