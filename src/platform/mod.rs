//! Platform abstraction layer
//!
//! Handles browser/native differences for time. The simulation only ever
//! compares clock readings against the power-up expiry, so any monotonic
//! millisecond source works.

/// Millisecond clock read once per tick
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Real wall clock (`Date.now()` in the browser)
#[derive(Debug, Default)]
pub struct WallClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: Option<std::time::Instant>,
}

impl Clock for WallClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&mut self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&mut self) -> f64 {
        let start = *self.start.get_or_insert_with(std::time::Instant::now);
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Simulated clock that advances a fixed step per reading, for headless runs
/// that tick faster than real time
#[derive(Debug, Clone)]
pub struct FrameClock {
    now: f64,
    step_ms: f64,
}

impl FrameClock {
    pub fn new(step_ms: f64) -> Self {
        Self { now: 0.0, step_ms }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(crate::consts::TICK_MS)
    }
}

impl Clock for FrameClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step_ms;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_steps() {
        let mut clock = FrameClock::new(10.0);
        assert_eq!(clock.now_ms(), 0.0);
        assert_eq!(clock.now_ms(), 10.0);
        assert_eq!(clock.now_ms(), 20.0);
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let mut clock = WallClock::default();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_powerup_lasts_about_300_frames() {
        use crate::config::GameConfig;
        use crate::sim::{Paddle, PowerUp};

        let mut clock = FrameClock::default();
        let mut paddle = Paddle::spawn(&GameConfig::default());
        let mut powerup = PowerUp::new(5000.0);
        powerup.activate(clock.now_ms(), &mut paddle);

        let mut frames = 0;
        while !powerup.tick(clock.now_ms(), &mut paddle) {
            frames += 1;
        }
        // 5000ms at 60Hz, expiring on the first tick strictly past the deadline
        assert!((299..=301).contains(&frames), "frames = {frames}");
    }
}
