// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `procrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procrun",
    version,
    about = "Run a command, stream its merged output, and enforce an optional timeout.",
    long_about = None
)]
pub struct CliArgs {
    /// Wall-clock timeout in milliseconds. Zero or negative means no
    /// timeout.
    #[arg(long, value_name = "MS", default_value_t = -1, allow_negative_numbers = true)]
    pub timeout_ms: i64,

    /// How often to check the process against the timeout, in
    /// milliseconds. Defaults to 10% of the timeout.
    #[arg(long, value_name = "MS")]
    pub check_interval_ms: Option<i64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROCRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, followed by its arguments.
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
