use chrono::{DateTime, Datelike, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Calendar year (UTC) of the clock's current instant.
pub fn current_year(clock: &dyn ClockPort) -> i32 {
    DateTime::<Utc>::from_timestamp_millis(clock.now_ms())
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .year()
}
