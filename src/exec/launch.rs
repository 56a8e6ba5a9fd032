// src/exec/launch.rs

//! Non-blocking process launch and the per-launch output reader task.

use std::process::Stdio;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::process::Command;
use tracing::debug;

use crate::errors::{ProcessError, Result};
use crate::exec::process::BackgroundProcess;
use crate::output::LineSink;

/// Launch `command` without waiting for it.
///
/// Spawns the OS process with stdout and stderr piped, starts exactly one
/// reader task that merges both streams and feeds each line to `sink`, and
/// returns the [`BackgroundProcess`] handle immediately.
///
/// Every launch gets its own reader task; nothing caps how many launches
/// run concurrently. Throttling is the caller's job.
///
/// # Errors
///
/// [`ProcessError::EmptyCommand`] when `command` has no elements, and
/// [`ProcessError::Launch`] when the OS refuses to start the process. In
/// the latter case no process exists, so there is nothing to clean up.
pub fn spawn_background(command: &[String], sink: impl LineSink) -> Result<BackgroundProcess> {
    let (program, args) = command.split_first().ok_or(ProcessError::EmptyCommand)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProcessError::Launch {
            command: command.join(" "),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let reader = tokio::spawn(read_merged_lines(stdout, stderr, sink));

    let process = BackgroundProcess::new(command.to_vec(), child, reader);
    debug!(process = %process, "command started");
    Ok(process)
}

/// Read the child's stdout and stderr as one merged line stream.
///
/// Lines are delivered in whatever order the pipes make them available;
/// there is no interleaving guarantee beyond that. The sink is invoked
/// synchronously for each line before the next read. Read errors end the
/// stream quietly: a broken pipe means the process has died, and the only
/// user-visible effect is that no further lines arrive.
async fn read_merged_lines(
    stdout: Option<tokio::process::ChildStdout>,
    stderr: Option<tokio::process::ChildStderr>,
    mut sink: impl LineSink,
) {
    let mut out_lines = stdout.map(|s| BufReader::new(s).lines());
    let mut err_lines = stderr.map(|s| BufReader::new(s).lines());

    while out_lines.is_some() || err_lines.is_some() {
        // `next_line` is cancel-safe, so racing the two streams loses no
        // data, and aborting this task abandons the in-flight read cleanly.
        tokio::select! {
            line = pull(&mut out_lines), if out_lines.is_some() => match line {
                Some(line) => sink.on_line(&line),
                None => out_lines = None,
            },
            line = pull(&mut err_lines), if err_lines.is_some() => match line {
                Some(line) => sink.on_line(&line),
                None => err_lines = None,
            },
        }
    }

    debug!("output reader ended");
}

/// Next line from an optional stream; `None` on end-of-stream or read error.
async fn pull<R>(lines: &mut Option<Lines<R>>) -> Option<String>
where
    R: AsyncBufRead + Unpin,
{
    match lines {
        Some(lines) => lines.next_line().await.unwrap_or(None),
        // Guarded out by the `if` preconditions above; never polled.
        None => None,
    }
}
