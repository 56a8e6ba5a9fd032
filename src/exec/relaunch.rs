// src/exec/relaunch.rs

//! Relaunch the current executable as a supervised child.
//!
//! Composes a command from the running program's own executable path (via
//! `std::env::current_exe`), optional extra runtime options placed right
//! after the executable, and the caller's trailing arguments. A Rust
//! binary carries its dependencies inside the executable, so reinvoking
//! that path is already "same dependency resolution as the parent".

use std::env;

use tracing::debug;

use crate::errors::{ProcessError, Result};
use crate::exec::runner::{self, RunOutput};
use crate::output::LineSink;

/// Build the self-relaunch command: current executable, then `opts`, then
/// `trailing`.
pub fn self_command(opts: &[String], trailing: &[String]) -> Result<Vec<String>> {
    let exe = env::current_exe().map_err(|source| ProcessError::Launch {
        command: "<current executable>".to_string(),
        source,
    })?;

    let mut command = Vec::with_capacity(1 + opts.len() + trailing.len());
    command.push(exe.to_string_lossy().into_owned());
    command.extend(opts.iter().cloned());
    command.extend(trailing.iter().cloned());
    Ok(command)
}

/// Relaunch the current executable and feed its output lines to `sink`.
///
/// This is the primitive the collecting wrappers build on; it delegates
/// entirely to the blocking runner, so timeout semantics are identical to
/// [`runner::run`].
pub async fn run_self_with_sink(
    timeout_ms: i64,
    opts: &[String],
    trailing: &[String],
    sink: impl LineSink,
) -> Result<i32> {
    let command = self_command(opts, trailing)?;
    debug!(?command, "relaunching current executable");
    runner::run(timeout_ms, &command, sink).await
}

/// Relaunch the current executable with extra runtime options and collect
/// its output.
pub async fn run_self_with_opts(
    timeout_ms: i64,
    opts: &[String],
    trailing: &[String],
) -> Result<RunOutput> {
    let command = self_command(opts, trailing)?;
    runner::run_collect(timeout_ms, &command).await
}

/// Relaunch the current executable and collect its output.
pub async fn run_self(timeout_ms: i64, trailing: &[String]) -> Result<RunOutput> {
    run_self_with_opts(timeout_ms, &[], trailing).await
}
