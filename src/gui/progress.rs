// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::fixture::BoxId;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    fixtures: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, fixtures: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn box_done(&mut self, box_id: BoxId, fixtures: usize) {
        self.done += 1;
        self.fixtures += fixtures;
        self.set_status(format!("Box {} ready ({}/{})", box_id, self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(format!("Generated {} fixture(s)", self.fixtures));
    }
}
