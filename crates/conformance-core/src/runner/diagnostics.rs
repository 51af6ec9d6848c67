//! Best-effort dump of the conformance client's log files

use crate::console::Console;
use std::path::Path;

/// Files the conformance client writes next to the function under test.
///
/// Read in this order after a failed run.
pub const DIAGNOSTIC_FILES: [&str; 3] = [
    "serverlog_stdout.txt",
    "serverlog_stderr.txt",
    "function_output.json",
];

/// Outcome of reading one diagnostic file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticRead {
    Found { name: String, content: String },
    Skipped { name: String, reason: String },
}

impl DiagnosticRead {
    pub fn name(&self) -> &str {
        match self {
            Self::Found { name, .. } | Self::Skipped { name, .. } => name,
        }
    }

    fn console_line(&self) -> String {
        match self {
            Self::Found { name, content } => format!("{name}: {content}"),
            Self::Skipped { name, reason } => format!("unable to read {name}, skipping: {reason}"),
        }
    }
}

/// Read each diagnostic file in `dir` exactly once and echo it to the console
///
/// Unreadable files are reported as skipped, never as errors.
pub async fn dump_diagnostics(console: &dyn Console, dir: &Path) -> Vec<DiagnosticRead> {
    let mut reads = Vec::with_capacity(DIAGNOSTIC_FILES.len());
    for name in DIAGNOSTIC_FILES {
        let read = match tokio::fs::read(dir.join(name)).await {
            Ok(bytes) => DiagnosticRead::Found {
                name: name.to_string(),
                content: String::from_utf8_lossy(&bytes).into_owned(),
            },
            Err(e) => {
                tracing::debug!(file = name, error = %e, "diagnostic file unavailable");
                DiagnosticRead::Skipped {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            }
        };
        console.line(&read.console_line());
        reads.push(read);
    }
    reads
}
