//! Error types for the conformance action
//!
//! Two layers:
//! - [`ExecutionError`]: a single subprocess could not be started or exited non-zero
//! - [`ActionError`]: what the action as a whole reports, wrapping execution errors
//!   with the phase they happened in (install or client run)
//!
//! Every [`ActionError`] carries a stable error code through [`ActionError::error_code`].

mod constructors;
mod types;
mod unified_error;

pub use types::{ActionError, ActionResult, ExecutionError};
