//! Clock abstraction.
//!
//! The boot sequence schedules against [`TimeSource::now`] and the `date`
//! command reads [`TimeSource::wall_clock`]. Production uses the host
//! clock; tests use [`TestTimeSource`], whose time only moves when told to.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic and wall-clock time.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Monotonic instant used for scheduling.
    fn now(&self) -> Instant;

    /// Current wall-clock time, in UTC.
    fn wall_clock(&self) -> DateTime<Utc>;

    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_clock(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock with logical time.
///
/// - `now()` is a fixed base instant plus the logical elapsed time
/// - `wall_clock()` is a fixed base date-time plus the same elapsed time
/// - only `advance()` moves logical time
///
/// # Example
///
/// ```
/// use meta_landing::services::time_source::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
/// time.advance(Duration::from_millis(250));
/// assert_eq!(time.elapsed_since(start), Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    logical_nanos: AtomicU64,
    base_instant: Instant,
    base_wall: DateTime<Utc>,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    /// Wall clock starts at 2026-01-15 09:30:00 UTC.
    pub fn new() -> Self {
        let base_wall = Utc
            .with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self::with_wall_clock(base_wall)
    }

    pub fn with_wall_clock(base_wall: DateTime<Utc>) -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
            base_wall,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Move logical time forward.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn wall_clock(&self) -> DateTime<Utc> {
        let elapsed =
            chrono::Duration::from_std(self.elapsed()).unwrap_or(chrono::Duration::zero());
        self.base_wall + elapsed
    }
}
