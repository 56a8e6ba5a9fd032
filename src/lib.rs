// src/lib.rs

//! Run and supervise external child processes.
//!
//! `procrun` launches a command, captures its merged stdout/stderr line by
//! line, and either hands back a [`BackgroundProcess`] handle immediately
//! (non-blocking mode) or drives the process to completion with an optional
//! wall-clock timeout (blocking mode). A small relaunch helper composes a
//! command line that reinvokes the current executable, so a process can
//! supervise child instances of itself.

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod output;

pub use errors::{ProcessError, Result};
pub use exec::process::BackgroundProcess;
pub use exec::relaunch::{run_self, run_self_with_opts, run_self_with_sink};
pub use exec::runner::{run, run_collect, run_silent, run_with_interval, RunOutput, NO_TIMEOUT};
pub use exec::spawn_background;
pub use output::{LineCollector, LineSink};
