//! Shared server state
//!
//! Holds the visit counter, start timestamps, and loaded configuration.
//! Constructed explicitly at startup and handed to the router via `Arc`
//! rather than living in module-level globals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::config::Config;

/// Process-wide server state
pub struct AppState {
    pub config: Config,
    started_at: DateTime<Local>,
    started_instant: Instant,
    visits: AtomicU64,
}

/// Wall-clock duration since server start, split into display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    /// Split a whole-second duration into hours, minutes, and seconds
    pub const fn from_secs(elapsed: u64) -> Self {
        Self {
            hours: elapsed / 3600,
            minutes: (elapsed % 3600) / 60,
            seconds: elapsed % 60,
        }
    }

    /// Total seconds represented by the split fields
    pub const fn total_secs(self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Local::now(),
            started_instant: Instant::now(),
            visits: AtomicU64::new(0),
        }
    }

    /// Count one received request and return the new total.
    ///
    /// Every request counts exactly once, including those that end in 404.
    pub fn record_visit(&self) -> u64 {
        self.visits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Total requests received since server start
    pub fn visit_count(&self) -> u64 {
        self.visits.load(Ordering::Relaxed)
    }

    pub const fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Whole-second uptime since the server started
    pub fn uptime(&self) -> Uptime {
        Uptime::from_secs(self.started_instant.elapsed().as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config() -> Config {
        Config::load_from("no_such_config_file").unwrap()
    }

    #[test]
    fn test_uptime_split() {
        let uptime = Uptime::from_secs(3661);
        assert_eq!(uptime.hours, 1);
        assert_eq!(uptime.minutes, 1);
        assert_eq!(uptime.seconds, 1);
    }

    #[test]
    fn test_uptime_field_bounds() {
        for elapsed in [0, 59, 60, 3599, 3600, 86_399, 86_400, 90_061] {
            let uptime = Uptime::from_secs(elapsed);
            assert!(uptime.seconds <= 59);
            assert!(uptime.minutes <= 59);
            assert_eq!(uptime.total_secs(), elapsed);
        }
    }

    #[test]
    fn test_visit_counter_monotonic() {
        let state = AppState::new(test_config());
        assert_eq!(state.visit_count(), 0);
        assert_eq!(state.record_visit(), 1);
        assert_eq!(state.record_visit(), 2);
        assert_eq!(state.record_visit(), 3);
        assert_eq!(state.visit_count(), 3);
    }

    #[test]
    fn test_fresh_state_uptime_is_zero() {
        let state = AppState::new(test_config());
        let uptime = state.uptime();
        assert_eq!(uptime.hours, 0);
        assert_eq!(uptime.minutes, 0);
    }
}
