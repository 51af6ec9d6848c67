//! Stable error codes and accessors

use super::types::{ActionError, ExecutionError};

impl ActionError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CONFORMANCE_CONFIG",
            Self::Install { source, .. } => match source {
                ExecutionError::Spawn { .. } => "CONFORMANCE_INSTALL_SPAWN",
                ExecutionError::NonZeroExit { .. } => "CONFORMANCE_INSTALL_EXIT",
                ExecutionError::EmptyOutput { .. } => "CONFORMANCE_INSTALL_OUTPUT",
            },
            Self::Client { source } => match source {
                ExecutionError::Spawn { .. } => "CONFORMANCE_CLIENT_SPAWN",
                ExecutionError::NonZeroExit { .. } => "CONFORMANCE_CLIENT_EXIT",
                ExecutionError::EmptyOutput { .. } => "CONFORMANCE_CLIENT_OUTPUT",
            },
            Self::Io { .. } => "CONFORMANCE_IO",
        }
    }

    /// The input that caused a configuration error, if any
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Configuration { input, .. } => input.as_deref(),
            _ => None,
        }
    }

    /// The underlying process failure, if this error came from a subprocess
    pub fn execution(&self) -> Option<&ExecutionError> {
        match self {
            Self::Install { source, .. } | Self::Client { source } => Some(source),
            _ => None,
        }
    }
}
