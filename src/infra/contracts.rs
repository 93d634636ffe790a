use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of opaque ids for contacts and messages.
pub trait IdGenerator {
    /// Returns an id never handed out before by this generator.
    fn next_id(&mut self, now: DateTime<Utc>) -> String;
}
