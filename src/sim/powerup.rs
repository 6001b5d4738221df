//! Timed paddle-widening power-up
//!
//! Expiry is polled once per tick against the host clock; there is no timer
//! callback, so the effect can only end on a tick boundary.

use serde::{Deserialize, Serialize};

use super::state::Paddle;
use crate::consts::POWERUP_WIDTH_FACTOR;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub active: bool,
    /// Clock reading (ms) after which the effect ends
    pub expires_at: f64,
    pub duration_ms: f64,
}

impl PowerUp {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            active: false,
            expires_at: 0.0,
            duration_ms,
        }
    }

    /// Start (or restart) the effect. Width is always derived from the
    /// baseline, so repeated activations do not stack.
    pub fn activate(&mut self, now: f64, paddle: &mut Paddle) {
        self.active = true;
        self.expires_at = now + self.duration_ms;
        paddle.width = paddle.base_width * POWERUP_WIDTH_FACTOR;
        log::debug!("Power-up active until {:.0}ms", self.expires_at);
    }

    /// Poll for expiry; returns true if the effect ended on this call
    pub fn tick(&mut self, now: f64, paddle: &mut Paddle) -> bool {
        if self.active && now > self.expires_at {
            self.clear(now, paddle);
            log::debug!("Power-up expired at {:.0}ms", now);
            return true;
        }
        false
    }

    /// End the effect immediately. The deadline is pulled back to `now` so
    /// `active == (expires_at > now)` holds afterwards.
    pub fn clear(&mut self, now: f64, paddle: &mut Paddle) {
        self.active = false;
        self.expires_at = self.expires_at.min(now);
        paddle.width = paddle.base_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn setup() -> (PowerUp, Paddle) {
        (PowerUp::new(5000.0), Paddle::spawn(&GameConfig::default()))
    }

    #[test]
    fn test_activate_doubles_width() {
        let (mut powerup, mut paddle) = setup();
        powerup.activate(1000.0, &mut paddle);
        assert!(powerup.active);
        assert_eq!(powerup.expires_at, 6000.0);
        assert_eq!(paddle.width, 200.0);
    }

    #[test]
    fn test_repeated_activation_does_not_stack() {
        let (mut powerup, mut paddle) = setup();
        powerup.activate(0.0, &mut paddle);
        powerup.activate(2000.0, &mut paddle);
        assert_eq!(paddle.width, 200.0);
        assert_eq!(powerup.expires_at, 7000.0);
    }

    #[test]
    fn test_expiry_restores_exact_baseline() {
        let (mut powerup, mut paddle) = setup();
        powerup.activate(0.0, &mut paddle);

        // Still active at exactly the expiry time
        assert!(!powerup.tick(5000.0, &mut paddle));
        assert!(powerup.active);
        assert_eq!(paddle.width, 200.0);

        assert!(powerup.tick(5000.5, &mut paddle));
        assert!(!powerup.active);
        assert_eq!(paddle.width, paddle.base_width);
        assert_eq!(paddle.width, 100.0);

        // Only reports expiry once
        assert!(!powerup.tick(9000.0, &mut paddle));
    }

    #[test]
    fn test_clear_retires_deadline() {
        let (mut powerup, mut paddle) = setup();
        powerup.activate(0.0, &mut paddle);
        powerup.clear(100.0, &mut paddle);
        assert!(!powerup.active);
        assert_eq!(powerup.expires_at, 100.0);
        assert_eq!(powerup.active, powerup.expires_at > 100.0);
        assert_eq!(paddle.width, 100.0);
        assert!(!powerup.tick(6000.0, &mut paddle));
    }

    #[test]
    fn test_tick_when_inactive_leaves_paddle_alone() {
        let (mut powerup, mut paddle) = setup();
        paddle.width = 123.0;
        assert!(!powerup.tick(1e9, &mut paddle));
        assert_eq!(paddle.width, 123.0);
    }
}
