// src/progress.rs
use crate::fixture::BoxId;

/// Progress reporting for a generation run (one item per box).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of boxes.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one box has its fixtures.
    fn box_done(&mut self, _box_id: BoxId, _fixtures: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
