// src/exec/runner.rs

//! Blocking execution with an optional wall-clock timeout.
//!
//! All entry points launch through [`spawn_background`] and then drive the
//! handle to completion on the caller's own task. A timeout of zero or
//! less means "wait forever"; a positive timeout is enforced by polling
//! the process at `check_interval_ms` and destroying it once the budget is
//! exceeded.

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::{ProcessError, Result};
use crate::exec::launch::spawn_background;
use crate::output::{LineCollector, LineSink};

/// Timeout value meaning "no timeout at all".
pub const NO_TIMEOUT: i64 = -1;

/// Exit code and captured output of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub exit_code: i32,
    pub lines: Vec<String>,
}

/// Run `command` to completion, feeding every output line to `sink`.
///
/// With `timeout_ms <= 0` this waits unconditionally. Otherwise the
/// process is checked every `check_interval_ms` until it finishes or the
/// budget runs out; on timeout the process is destroyed first and
/// [`ProcessError::Timeout`] is returned, carrying both the elapsed and the
/// configured time for diagnostics. Timeout detection is bounded by
/// `timeout_ms + check_interval_ms`, not exact. A `check_interval_ms <= 0`
/// degenerates to a tight poll loop.
pub async fn run_with_interval(
    timeout_ms: i64,
    check_interval_ms: i64,
    command: &[String],
    sink: impl LineSink,
) -> Result<i32> {
    let start = Instant::now();
    let mut process = spawn_background(command, sink)?;

    let exit_code = if timeout_ms > 0 {
        debug!(
            timeout_ms,
            check_interval_ms, "monitoring process with timeout budget"
        );
        let timeout = Duration::from_millis(timeout_ms as u64);
        let interval = Duration::from_millis(check_interval_ms.max(0) as u64);

        while start.elapsed() < timeout && !process.is_done() {
            sleep(interval).await;
        }

        if process.is_done() {
            let exit_code = process.exit_code()?;
            // The pipes are at EOF now; let the reader deliver what's left.
            process.drain_output().await;
            exit_code
        } else {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            process.destroy();
            debug!(elapsed_ms, timeout_ms, "process timed out");
            return Err(ProcessError::Timeout {
                elapsed_ms,
                timeout_ms: timeout_ms as u64,
            });
        }
    } else {
        let exit_code = process.wait_for_exit().await?;
        process.drain_output().await;
        exit_code
    };

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        exit_code, "process completed"
    );
    Ok(exit_code)
}

/// Like [`run_with_interval`], with the check interval derived as 10% of
/// the timeout. Pure convenience; nothing else changes.
pub async fn run(timeout_ms: i64, command: &[String], sink: impl LineSink) -> Result<i32> {
    run_with_interval(timeout_ms, timeout_ms / 10, command, sink).await
}

/// Run `command` and return only its exit code, discarding all output.
///
/// The output pipes are still drained so the child never blocks on a full
/// buffer.
pub async fn run_silent(timeout_ms: i64, command: &[String]) -> Result<i32> {
    run(timeout_ms, command, |_line: &str| {}).await
}

/// Run `command` and return its exit code together with every captured
/// output line, in arrival order.
pub async fn run_collect(timeout_ms: i64, command: &[String]) -> Result<RunOutput> {
    let collector = LineCollector::new();
    let exit_code = run(timeout_ms, command, collector.clone()).await?;
    let lines = collector.lines();
    debug!(line_count = lines.len(), "collected process output");
    Ok(RunOutput { exit_code, lines })
}
