// src/exec/process.rs

//! Handle for a launched background process.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::errors::{ProcessError, Result};

/// A launched child process plus its output reader task.
///
/// The handle is exclusively owned by whoever launched it. Dropping it
/// kills the child (the launcher sets `kill_on_drop`), so keep it alive for
/// as long as the process should run.
pub struct BackgroundProcess {
    command: Vec<String>,
    started_at: SystemTime,
    child: Child,
    reader: JoinHandle<()>,
    destroyed: bool,
}

impl BackgroundProcess {
    pub(crate) fn new(command: Vec<String>, child: Child, reader: JoinHandle<()>) -> Self {
        Self {
            command,
            started_at: SystemTime::now(),
            child,
            reader,
            destroyed: false,
        }
    }

    /// The command this process was launched with.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Wall-clock time the process was launched at.
    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }

    /// Whether [`destroy`](Self::destroy) has been called on this handle.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Non-blocking check for process termination.
    ///
    /// Returns `false` while the process is still running, and also when
    /// the status query itself fails (termination cannot be proven). Safe
    /// to call repeatedly, including after [`destroy`](Self::destroy) —
    /// though right after a destroy the OS may not have reaped the process
    /// yet, so `true` can lag by a moment.
    pub fn is_done(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(Some(_)))
    }

    /// Block until the process exits on its own and return its exit code.
    ///
    /// There is no timeout here; use the runner for bounded waits. A child
    /// killed by a signal reports exit code `-1`.
    ///
    /// # Errors
    ///
    /// [`ProcessError::Wait`] when the wait itself fails or is interrupted.
    pub async fn wait_for_exit(&mut self) -> Result<i32> {
        let status = self.child.wait().await.map_err(ProcessError::Wait)?;
        Ok(status.code().unwrap_or(-1))
    }

    /// Exit code of the terminated process.
    ///
    /// # Errors
    ///
    /// [`ProcessError::NotExited`] when the process has not terminated yet;
    /// check [`is_done`](Self::is_done) first.
    pub fn exit_code(&mut self) -> Result<i32> {
        match self.child.try_wait() {
            Ok(Some(status)) => Ok(status.code().unwrap_or(-1)),
            Ok(None) => Err(ProcessError::NotExited),
            Err(source) => Err(ProcessError::Wait(source)),
        }
    }

    /// Wait for the output reader task to finish.
    ///
    /// The reader ends once both output pipes hit end-of-stream, which
    /// happens when the process exits. Awaiting this after the process has
    /// terminated guarantees every line has been delivered to the sink.
    /// Returns immediately if the reader was already cancelled.
    pub async fn drain_output(&mut self) {
        let _ = (&mut self.reader).await;
    }

    /// Forcibly terminate the process and stop its output reader.
    ///
    /// Best effort: issues the kill without waiting for the OS to confirm
    /// reaping, so an immediate [`is_done`](Self::is_done) may still report
    /// `false` before converging to `true`. Calling this twice is harmless.
    pub fn destroy(&mut self) {
        debug!(process = %self, "destroying running process");
        self.reader.abort();
        if let Err(error) = self.child.start_kill() {
            // Typically the process already exited; nothing left to kill.
            debug!(process = %self, %error, "kill request failed");
        }
        self.destroyed = true;
        info!(process = %self, "process destroyed");
    }
}

impl fmt::Display for BackgroundProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let started_unix_ms = self
            .started_at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        write!(
            f,
            "Process[{:?}, started_unix_ms={}]",
            self.command, started_unix_ms
        )
    }
}
