//! `check` command: verify the toolchain needed to build the client

use anyhow::{Context, bail};
use colored::*;
use std::process::ExitCode;
use tokio::process::Command;

/// Status of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Result of checking one tool
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            message: message.into(),
            hint: None,
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    fn icon(&self) -> ColoredString {
        match self.status {
            CheckStatus::Pass => "✓".green().bold(),
            CheckStatus::Fail => "✗".red().bold(),
        }
    }

    fn print(&self) {
        println!("{} {}: {}", self.icon(), self.name.bold(), self.message);
        if let Some(hint) = &self.hint {
            println!("    {} {}", "hint:".dimmed(), hint);
        }
    }
}

/// Tools the installer shells out to, with the argument that prints a version
const REQUIRED_TOOLS: [(&str, &str, &str); 2] = [
    ("git", "--version", "Install git to clone the conformance repository"),
    ("go", "version", "Install Go (e.g. actions/setup-go) to build the conformance client"),
];

/// Run all checks, printing one line per tool
pub async fn check() -> ExitCode {
    let mut failed = false;
    for (tool, version_arg, hint) in REQUIRED_TOOLS {
        let result = match tool_version(tool, version_arg).await {
            Ok(version) => CheckResult::pass(tool, format!("Installed ({version})")),
            Err(e) => {
                tracing::debug!(tool, error = %e, "tool check failed");
                CheckResult::fail(tool, format!("{e:#}")).with_hint(hint)
            }
        };
        failed |= result.status == CheckStatus::Fail;
        result.print();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn tool_version(tool: &str, version_arg: &str) -> anyhow::Result<String> {
    let output = Command::new(tool)
        .arg(version_arg)
        .output()
        .await
        .with_context(|| format!("{tool} not found"))?;

    if !output.status.success() {
        bail!("{tool} {version_arg} exited with {}", output.status);
    }

    let version = String::from_utf8_lossy(&output.stdout);
    Ok(first_line(&version).to_string())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}
