#![allow(dead_code)]

use hourlog::{Output, Timestamp};
use std::sync::{Arc, Mutex};

pub const TS: Timestamp = Timestamp::new(2024, 3, 7, 9, 5, 2);

/// Console backend that records every `(level, line)` pair.
#[derive(Clone, Default)]
pub struct Captured(pub Arc<Mutex<Vec<(String, String)>>>);

impl Captured {
    pub fn lines(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }
}

impl Output for Captured {
    fn write(&self, level: &str, line: &str) -> Result<(), hourlog::Error> {
        self.0
            .lock()
            .unwrap()
            .push((level.to_string(), line.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<(), hourlog::Error> {
        Ok(())
    }
}
