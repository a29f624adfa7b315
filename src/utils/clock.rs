use std::time::Instant;

/// Time source for cache expiry, injected so expiry is testable without
/// real waits.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
