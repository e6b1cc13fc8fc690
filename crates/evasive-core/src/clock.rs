#![forbid(unsafe_code)]

//! Wall-clock access for cache-busting query parameters.

use web_time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Real clock (`Date.now()` on wasm32, `SystemTime` elsewhere).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// Clock frozen at a host-chosen instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: u64,
}

impl FixedClock {
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self { millis }
    }

    /// Move the clock forward.
    pub fn advance(&mut self, millis: u64) {
        self.millis = self.millis.saturating_add(millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = FixedClock::new(1_700_000_000_000);
        clock.advance(250);
        assert_eq!(clock.now_millis(), 1_700_000_000_250);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
