//! Brick Breaker - A classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, targets, progression)
//! - `render`: Per-frame 2D draw commands
//! - `hud`: Score/lives text updates
//! - `input`: Held-key flags
//! - `platform`: Browser/native platform abstraction
//! - `config`: Data-driven game tuning

pub mod config;
pub mod hud;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{GameConfig, GridLayout};
pub use hud::{Hud, HudUpdate};
pub use input::HeldKeys;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the host loop (ticks per second)
    pub const TICK_RATE: f64 = 60.0;
    /// Milliseconds per tick at the target frame rate
    pub const TICK_MS: f64 = 1000.0 / TICK_RATE;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults (velocity is in pixels per tick)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 4.0;
    /// Ball spawns this far above the arena bottom
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Target grid defaults
    pub const GRID_COLUMNS: usize = 8;
    pub const GRID_ROWS: usize = 5;
    pub const TARGET_WIDTH: f32 = 75.0;
    pub const TARGET_HEIGHT: f32 = 20.0;
    pub const TARGET_PADDING: f32 = 10.0;
    pub const TARGET_OFFSET_TOP: f32 = 30.0;
    pub const TARGET_OFFSET_LEFT: f32 = 30.0;

    /// Power-up defaults
    pub const POWERUP_PROBABILITY: f64 = 0.1;
    pub const POWERUP_DURATION_MS: f64 = 5000.0;
    /// Paddle width multiplier while the power-up is active
    pub const POWERUP_WIDTH_FACTOR: f32 = 2.0;

    pub const STARTING_LIVES: u8 = 3;
}
