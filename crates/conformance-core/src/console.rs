//! Console output
//!
//! Everything the action prints for the CI log goes through a [`Console`], so the
//! runner's output can be asserted on in tests. Tracing output is separate and
//! goes to stderr.

use parking_lot::Mutex;
use std::io::Write;

/// Line-oriented sink for CI log output
pub trait Console: Send + Sync {
    /// Write one line of output
    fn line(&self, text: &str);
}

/// Console backed by the process stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort the action mid-report.
        let _ = writeln!(stdout, "{text}");
        let _ = stdout.flush();
    }
}

/// Console that records lines in memory
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn line(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}
