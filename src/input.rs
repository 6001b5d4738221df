//! Keyboard input as held-key flags
//!
//! Key events arrive between ticks and only toggle two booleans. The
//! simulation reads a snapshot once per tick, so no locking is needed in the
//! single-threaded host.

use crate::sim::{GameState, TickInput};

/// Paddle direction bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value, accepting legacy and modern names
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Left" | "ArrowLeft" => Some(Direction::Left),
            "Right" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Handle a key press; returns false for unrecognized keys
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle a key release; returns false for unrecognized keys
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match Direction::from_key(key) {
            Some(Direction::Left) => self.left = held,
            Some(Direction::Right) => self.right = held,
            None => return false,
        }
        true
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

/// Demo input: steer the paddle center toward the ball
pub fn autopilot(state: &GameState) -> TickInput {
    let paddle_center = state.paddle.x + state.paddle.width / 2.0;
    let offset = state.ball.pos.x - paddle_center;
    let deadzone = state.config.paddle_speed;
    TickInput {
        left: offset < -deadzone,
        right: offset > deadzone,
    }
}
