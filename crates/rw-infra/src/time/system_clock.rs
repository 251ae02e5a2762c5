use chrono::Utc;
use rw_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to one instant, for replays and tests.
pub struct FixedClock {
    now_ms: i64,
}

impl FixedClock {
    pub fn new(now_ms: i64) -> Self {
        Self { now_ms }
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }
}
