// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

/// Mirrors pipeline progress into the viewer's status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(format!("{}… ({}/{})", msg, self.done + 1, self.total));
    }
    fn stage_done(&mut self, _stage: Stage) {
        self.done += 1;
    }
    fn finish(&mut self) {
        if self.done == self.total {
            self.set_status(s!("Refresh complete"));
        } else {
            self.set_status(format!("Refresh stopped ({}/{})", self.done, self.total));
        }
    }
}
