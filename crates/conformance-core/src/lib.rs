//! Functions Framework Conformance Action core library
//!
//! Reads the action inputs, builds the conformance client from source and runs
//! it against the function under test. When a run fails, the client's log files
//! are echoed to the CI log before the failure is reported.

pub mod action;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod inputs;
pub mod install;
pub mod runner;
pub mod workflow;

// Re-export commonly used types
pub use action::ConformanceAction;
pub use command::{CommandOutput, Invocation};
pub use config::{ClientSource, ConformanceConfig};
pub use console::{Console, MemoryConsole, StdoutConsole};
pub use error::{ActionError, ActionResult, ExecutionError};
pub use inputs::{ActionInputs, InputLoader, InputName, InputSource};
pub use install::ClientInstaller;
pub use runner::{CommandRunner, DIAGNOSTIC_FILES, ProcessRunner};
