//! Time source for `date`.

use chrono::{DateTime, FixedOffset, Local};

/// Provides the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant, for tests and screenshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Render a timestamp the way a browser's `Date#toString` does, minus the
/// zone name: `Fri Oct 16 2026 12:34:56 GMT+0000`.
pub(crate) fn format_timestamp(t: &DateTime<FixedOffset>) -> String {
    t.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
