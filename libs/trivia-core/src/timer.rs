//! Event-driven round countdown.
//!
//! The timer never spawns threads or sleeps; the embedding application
//! calls [`RoundTimer::tick`] with elapsed wall time on whatever cadence
//! it renders at.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Countdown for a timed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTimer {
    duration: Duration,
    remaining: Duration,
    running: bool,
    expired: bool,
}

impl RoundTimer {
    /// A running timer with the full duration remaining.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            running: true,
            expired: false,
        }
    }

    /// Advance by elapsed time. Returns `true` exactly once, on the tick
    /// that exhausts the countdown. Paused and expired timers ignore
    /// ticks.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running || self.expired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.expired = true;
            self.running = false;
            return true;
        }
        false
    }

    pub fn pause(&mut self) {
        if !self.expired {
            self.running = false;
        }
    }

    pub fn resume(&mut self) {
        if !self.expired {
            self.running = true;
        }
    }

    /// Restore the full duration and start running again.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = true;
        self.expired = false;
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expires_exactly_once() {
        let mut timer = RoundTimer::new(Duration::from_secs(10));
        assert!(!timer.tick(Duration::from_secs(6)));
        assert!(timer.tick(Duration::from_secs(6)));
        assert!(timer.is_expired());
        // Further ticks never re-fire.
        assert!(!timer.tick(Duration::from_secs(6)));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn paused_timers_ignore_ticks() {
        let mut timer = RoundTimer::new(Duration::from_secs(10));
        timer.pause();
        assert!(!timer.tick(Duration::from_secs(30)));
        assert_eq!(timer.remaining(), Duration::from_secs(10));

        timer.resume();
        assert!(!timer.tick(Duration::from_secs(4)));
        assert_eq!(timer.remaining(), Duration::from_secs(6));
    }

    #[test]
    fn resume_after_expiry_is_a_no_op() {
        let mut timer = RoundTimer::new(Duration::from_secs(1));
        timer.tick(Duration::from_secs(2));
        timer.resume();
        assert!(!timer.is_running());
        assert!(timer.is_expired());
    }

    #[test]
    fn reset_restores_the_full_duration() {
        let mut timer = RoundTimer::new(Duration::from_secs(5));
        timer.tick(Duration::from_secs(5));
        timer.reset();
        assert!(timer.is_running());
        assert!(!timer.is_expired());
        assert_eq!(timer.remaining(), Duration::from_secs(5));
    }
}
