use chrono::{DateTime, Utc};

use crate::infra::contracts::{Clock, IdGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Millisecond-timestamp ids. Two requests inside the same millisecond (or a
/// clock stepping backwards) still get distinct, increasing ids.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: Option<i64>,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let next = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(next);
        next.to_string()
    }
}
