//! CLI argument definitions using clap
//!
//! - conformance-action                 # Run with inputs from INPUT_* variables
//! - conformance-action run --input k=v # Override or supply inputs locally
//! - conformance-action check           # Verify git and go are available

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "conformance-action")]
#[command(about = "Build and run the Functions Framework conformance client")]
#[command(
    long_about = r#"Build and run the Functions Framework conformance client

Inside a GitHub Actions step, inputs are read from the INPUT_* environment
variables set by the runner. Outside of Actions they can be given with
--inputs-file or --input.

USAGE:
  conformance-action                                  # Run (default)
  conformance-action run --input functionType=http   # Run with an input override
  conformance-action check                            # Check git and go"#
)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the conformance client and run it (default)
    Run(RunArgs),

    /// Check that the tools needed to build the client are installed
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Set an input as name=value, overriding the environment (repeatable)
    #[arg(long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// JSON file of input name to value
    #[arg(long, value_name = "FILE")]
    pub inputs_file: Option<PathBuf>,

    /// Directory the conformance repository is cloned into [default: current directory]
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Use this client binary instead of building one
    #[arg(long, value_name = "PATH")]
    pub client_binary: Option<PathBuf>,

    /// Where to write the built client [default: ~/client]
    #[arg(long, value_name = "PATH", conflicts_with = "client_binary")]
    pub client_output: Option<PathBuf>,
}
