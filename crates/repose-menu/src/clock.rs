use parking_lot::Mutex;
use web_time::{Duration, Instant};

/// Time source for deferred close evaluations.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically (tests, scripted demos).
pub struct ManualClock {
    t: Mutex<Instant>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut t = self.t.lock();
        *t += by;
    }

    pub fn set(&self, to: Instant) {
        *self.t.lock() = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}
