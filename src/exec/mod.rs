// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launch`] spawns the OS process and its output reader task.
//! - [`process`] is the [`process::BackgroundProcess`] handle returned to
//!   the caller.
//! - [`runner`] drives a launched process to completion, with or without a
//!   timeout budget.
//! - [`relaunch`] composes a command that reinvokes the current executable.

pub mod launch;
pub mod process;
pub mod relaunch;
pub mod runner;

pub use launch::spawn_background;
