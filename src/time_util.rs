//! Utilities for handling time (interfacing with `std::time` and `chrono`).

use std::time::SystemTime;

use chrono::{DateTime, Datelike, TimeZone, Utc};

pub trait LocalYear {
    fn local_year(&self, zone: impl TimeZone) -> i32;
}

impl<AnyTz: TimeZone> LocalYear for DateTime<AnyTz> {
    fn local_year(&self, zone: impl TimeZone) -> i32 {
        self.with_timezone(&zone).naive_local().year()
    }
}

impl LocalYear for SystemTime {
    fn local_year(&self, zone: impl TimeZone) -> i32 {
        let dt: DateTime<Utc> = DateTime::from(*self);
        dt.local_year(zone)
    }
}
