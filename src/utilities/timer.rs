use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Every timed suspension of the control loop goes through a `Timer`, so the
/// loop can run against a virtual clock.
pub trait Timer: Send + Sync {
    fn sleep(&self, duration: Duration);

    /// Time passed since the timer was created.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock timer.
#[derive(Debug)]
pub struct SystemTimer {
    start_time: Instant,
}

impl SystemTimer {
    pub fn new() -> Self {
        SystemTimer { start_time: Instant::now() }
    }
}

impl Default for SystemTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for SystemTimer {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }

    fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Advances a virtual clock instead of blocking.
#[derive(Debug, Default)]
pub struct VirtualTimer {
    now: Mutex<Duration>,
}

impl VirtualTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for VirtualTimer {
    fn sleep(&self, duration: Duration) {
        *self.now.lock() += duration;
        // keeps an idle loop on a virtual clock from starving other threads
        thread::yield_now();
    }

    fn elapsed(&self) -> Duration {
        *self.now.lock()
    }
}
