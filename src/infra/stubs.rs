use std::{
    cell::Cell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

use crate::infra::{
    config::AppConfig,
    contracts::{Clock, ConfigAdapter},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn starting_at_millis(millis: i64) -> Self {
        let start = Utc
            .timestamp_millis_opt(millis)
            .single()
            .expect("start time should be a valid timestamp");
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance_ms(&self, millis: i64) {
        self.now.set(self.now.get() + Duration::milliseconds(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Collects the level of every event emitted inside [`LevelRecorder::record`].
#[derive(Debug, Clone, Default)]
pub struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelRecorder {
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn levels(&self) -> Vec<Level> {
        self.levels
            .lock()
            .map(|levels| levels.clone())
            .unwrap_or_default()
    }
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Ok(mut levels) = self.levels.lock() {
            levels.push(*event.metadata().level());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn level_recorder_sees_events_inside_the_scope_only() {
        let recorder = LevelRecorder::default();

        recorder.record(|| tracing::warn!("inside"));
        tracing::warn!("outside");

        assert_eq!(recorder.levels(), vec![Level::WARN]);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::starting_at_millis(1_000);
        let handle = clock.clone();

        handle.advance_ms(500);

        assert_eq!(clock.now().timestamp_millis(), 1_500);
    }
}
