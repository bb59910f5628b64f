//! Per-page render context; the static-site stand-in for a request
//! object.

use std::time::SystemTime;

pub struct PageContext {
    /// Site-relative output path of the page being rendered,
    /// e.g. "index.html".
    path: &'static str,
    /// Build clock, sampled once per site build.
    now: SystemTime,
}

impl PageContext {
    pub fn new(path: &'static str, now: SystemTime) -> PageContext {
        PageContext { path, now }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn now(&self) -> SystemTime {
        self.now
    }
}
