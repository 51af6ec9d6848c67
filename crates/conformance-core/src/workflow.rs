//! GitHub Actions workflow commands
//!
//! The runner scans step output for `::command::message` lines. Only what the
//! action needs is implemented: error annotations and log groups.

use crate::console::Console;
use crate::error::ActionError;

/// Escape a message for use as workflow command data
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format an `::error::` annotation
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report the action's terminal failure
///
/// Writes the full error chain as a single annotation so it shows up on the
/// workflow summary.
pub fn report_failure(console: &dyn Console, error: &ActionError) {
    console.line(&error_command(&error_chain(error)));
}

/// Render an error and its sources as `outer: inner: ...`
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Collapsible log group; the closing marker is written on drop
pub struct LogGroup<'a> {
    console: &'a dyn Console,
}

impl<'a> LogGroup<'a> {
    pub fn start(console: &'a dyn Console, title: &str) -> Self {
        console.line(&format!("::group::{}", escape_data(title)));
        Self { console }
    }
}

impl Drop for LogGroup<'_> {
    fn drop(&mut self) {
        self.console.line("::endgroup::");
    }
}
