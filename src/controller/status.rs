//! Status outputs fed by the controller

use crate::animation::DisplayInfo;
use std::collections::VecDeque;

/// Longest activity log kept by [`StatusBoard`]
pub const LOG_CAPACITY: usize = 20;

/// Where the controller publishes step progress
///
/// Every method has a no-op default, so a host that lacks one of the outputs
/// simply doesn't override it.
pub trait StatusSink {
    fn show_step(&mut self, _step: usize, _max_steps: usize) {}

    fn show_info(&mut self, _info: &DisplayInfo) {}

    fn push_log(&mut self, _message: &str) {}

    fn clear_log(&mut self) {}
}

/// Discards everything
impl StatusSink for () {}

/// In-memory status widgets read by the TUI
#[derive(Debug, Clone)]
pub struct StatusBoard {
    pub step: usize,
    pub max_steps: usize,
    pub info: DisplayInfo,
    log: VecDeque<String>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        StatusBoard {
            step: 0,
            max_steps: 0,
            info: DisplayInfo::ready(),
            log: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log entries, newest first
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }
}

impl StatusSink for StatusBoard {
    fn show_step(&mut self, step: usize, max_steps: usize) {
        self.step = step;
        self.max_steps = max_steps;
    }

    fn show_info(&mut self, info: &DisplayInfo) {
        self.info = info.clone();
    }

    fn push_log(&mut self, message: &str) {
        self.log.push_front(message.to_string());
        self.log.truncate(LOG_CAPACITY);
    }

    fn clear_log(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_capped_newest_first() {
        let mut board = StatusBoard::new();
        for i in 0..25 {
            board.push_log(&format!("entry {}", i));
        }

        assert_eq!(board.log_len(), LOG_CAPACITY);
        assert_eq!(board.log().next(), Some("entry 24"));
        assert_eq!(board.log().last(), Some("entry 5"));
    }

    #[test]
    fn test_unit_sink_ignores_everything() {
        let sink: &mut dyn StatusSink = &mut ();
        sink.show_step(1, 2);
        sink.push_log("ignored");
        sink.clear_log();
    }
}
