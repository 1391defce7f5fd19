//! Wall Clock
//!
//! Notes carry their last edit time as a bare "HH:MM" string.

use chrono::{Local, Timelike};

/// Zero-padded 24-hour "HH:MM"
pub fn format_hhmm<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

pub trait Clock {
    fn now_hhmm(&self) -> String;
}

/// Local time of the host (the browser's, under wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now_hhmm(&self) -> String {
        format_hhmm(&Local::now())
    }
}

/// Always reports the same time
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn at(hhmm: &str) -> Self {
        Self(hhmm.to_string())
    }
}

impl Clock for FixedClock {
    fn now_hhmm(&self) -> String {
        self.0.clone()
    }
}
