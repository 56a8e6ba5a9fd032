// src/errors.rs

//! Crate-wide error types.
//!
//! Stream read errors never show up here: a broken output pipe is the
//! normal sign that the child has exited, so the output reader swallows it
//! and simply stops delivering lines.

use std::io;

use thiserror::Error;

/// Errors from launching or supervising a child process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command sequence was empty; there is nothing to launch.
    #[error("command must contain at least a program name")]
    EmptyCommand,

    /// The OS refused to start the process (bad path, permissions, ...).
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The process outlived its timeout budget and was destroyed.
    #[error("process timed out after {elapsed_ms}/{timeout_ms} ms")]
    Timeout { elapsed_ms: u64, timeout_ms: u64 },

    /// A blocking wait on the process failed or was interrupted.
    #[error("failed while waiting for process: {0}")]
    Wait(#[source] io::Error),

    /// `exit_code()` was called before the process terminated.
    #[error("exit code requested before the process terminated")]
    NotExited,
}

impl ProcessError {
    /// True for the timeout kind, so callers can branch without matching.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProcessError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProcessError>;
