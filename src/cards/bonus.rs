//! Face-up time bookkeeping for the matching bonus.
//!
//! A card accumulates time across every interval it spends face-up and
//! unmatched. Closed intervals are folded into `accumulated`; the open one (if
//! any) is measured from `since` to whatever instant the caller passes in.

use std::time::{Duration, Instant};

/// Accumulated face-up time plus the currently open interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BonusTimer {
    accumulated: Duration,
    since: Option<Instant>,
}

impl BonusTimer {
    /// A timer with no recorded time and no open interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            since: None,
        }
    }

    /// Open an interval at `now`. No-op if one is already open.
    pub fn start(&mut self, now: Instant) {
        if self.since.is_none() {
            self.since = Some(now);
        }
    }

    /// Close the open interval at `now`, folding it into the accumulated total.
    pub fn stop(&mut self, now: Instant) {
        self.accumulated = self.elapsed(now);
        self.since = None;
    }

    /// Total face-up time including the open interval up to `now`.
    ///
    /// An instant earlier than the interval start counts as zero.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// Time from closed intervals only.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Start of the open interval, if any.
    #[must_use]
    pub fn since(&self) -> Option<Instant> {
        self.since
    }

    /// Is an interval currently open?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.since.is_some()
    }
}

/// Bonus time left given a limit and elapsed face-up time.
#[must_use]
pub fn remaining(limit: Duration, elapsed: Duration) -> Duration {
    limit.saturating_sub(elapsed)
}

/// Remaining bonus as a fraction of the limit, in `[0, 1]`.
///
/// A zero limit means bonus is disabled and always yields 0.
#[must_use]
pub fn fraction(limit: Duration, elapsed: Duration) -> f64 {
    if limit.is_zero() {
        return 0.0;
    }
    (remaining(limit, elapsed).as_secs_f64() / limit.as_secs_f64()).clamp(0.0, 1.0)
}
