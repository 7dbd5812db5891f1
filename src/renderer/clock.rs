//! Frame timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of frame intervals the measured fps is averaged over.
const WINDOW: usize = 10;

/// Measures the real frame rate and computes the pacing delay.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    intervals: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        if let Some(last) = self.last {
            if self.intervals.len() == WINDOW {
                self.intervals.pop_front();
            }
            self.intervals.push_back(now.saturating_duration_since(last));
        }
        self.last = Some(now);
    }

    /// Average frames per second over the last frames, 0 before two ticks.
    pub fn fps(&self) -> f64 {
        let total: Duration = self.intervals.iter().sum();
        if self.intervals.is_empty() || total.is_zero() {
            return 0.0;
        }
        self.intervals.len() as f64 / total.as_secs_f64()
    }

    /// Time left before the next frame is due at `target` fps, `None` when unlocked.
    pub fn remaining(&self, target: u32) -> Option<Duration> {
        if target == 0 {
            return None;
        }
        let budget = Duration::from_secs_f64(1.0 / target as f64);
        let elapsed = self.last.map(|last| last.elapsed()).unwrap_or_default();
        Some(budget.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_averages_recent_intervals() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.fps(), 0.0);
        for i in 0..=20u64 {
            clock.tick_at(start + Duration::from_millis(i * 20));
        }
        assert!((clock.fps() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn only_last_ten_frames_count() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        clock.tick_at(start + Duration::from_secs(5));
        for i in 1..=10u64 {
            clock.tick_at(start + Duration::from_secs(5) + Duration::from_millis(i * 10));
        }
        assert!((clock.fps() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn unlocked_rate_has_no_delay() {
        let clock = FrameClock::new();
        assert_eq!(clock.remaining(0), None);
        assert!(clock.remaining(60).unwrap() <= Duration::from_secs_f64(1.0 / 60.0));
    }
}
