// src/output.rs

//! Line sinks: where captured process output goes.
//!
//! The output reader hands each complete line to a [`LineSink`] before
//! reading the next one. Sinks run on the reader task, not on the caller's
//! task, so they must be `Send` and should stay cheap.

use std::sync::{Arc, Mutex};

/// Receives one text line at a time as the child process emits it.
pub trait LineSink: Send + 'static {
    fn on_line(&mut self, line: &str);
}

/// Any `FnMut(&str)` closure is a sink.
impl<F> LineSink for F
where
    F: FnMut(&str) + Send + 'static,
{
    fn on_line(&mut self, line: &str) {
        self(line)
    }
}

/// Sink that accumulates every line into an ordered list.
///
/// Cloning is cheap and shares the same storage: hand one clone to the
/// launcher and keep another to read the result afterwards.
#[derive(Debug, Clone, Default)]
pub struct LineCollector {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines collected so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("line collector lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().expect("line collector lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineSink for LineCollector {
    fn on_line(&mut self, line: &str) {
        self.lines
            .lock()
            .expect("line collector lock poisoned")
            .push(line.to_string());
    }
}
