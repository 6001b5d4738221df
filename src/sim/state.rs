//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], which is owned by
//! the host and advanced one tick at a time.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Grid, generate};
use super::powerup::PowerUp;
use super::progression::Progression;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the state must be rebuilt to play again
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its start-of-life position and velocity
    pub fn spawn(config: &GameConfig) -> Self {
        use crate::consts::BALL_SPAWN_OFFSET;
        Self {
            pos: Vec2::new(
                config.arena_width / 2.0,
                config.arena_height - BALL_SPAWN_OFFSET,
            ),
            vel: Vec2::new(config.ball_start_speed, -config.ball_start_speed),
            radius: config.ball_radius,
        }
    }

    /// Position after one more tick at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle, resting on the arena floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    /// Current width (doubled while the power-up is active)
    pub width: f32,
    /// Width without any power-up
    pub base_width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered paddle at its baseline width
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: (config.arena_width - config.paddle_width) / 2.0,
            y: config.arena_height - config.paddle_height,
            width: config.paddle_width,
            base_width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Whether `x` lies strictly within the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    /// Shift the paddle, keeping it inside `[0, arena_width - width]`
    pub fn shift(&mut self, dx: f32, arena_width: f32) {
        let max_x = (arena_width - self.width).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
    }
}

/// Target kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetKind {
    #[default]
    Plain,
    /// Grants the paddle-widening power-up when destroyed
    Power,
}

/// A breakable target (brick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner, placeholder (0, 0) until the grid is laid out
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
    pub kind: TargetKind,
}

impl Target {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            alive: true,
            kind,
        }
    }

    /// Strict point-in-rectangle test (edges do not count)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y > self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TargetDestroyed {
        column: usize,
        row: usize,
        kind: TargetKind,
    },
    PowerUpActivated {
        expires_at: f64,
    },
    PowerUpExpired,
    /// A grid was cleared; `level` is the new level
    LevelComplete {
        level: u32,
    },
    WallBounce,
    PaddleBounce,
    /// Ball missed the paddle; `lives` remain
    LifeLost {
        lives: u8,
    },
    GameOver {
        score: u64,
        level: u32,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: Grid,
    pub powerup: PowerUp,
    pub progression: Progression,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a game state driven by an explicit generator
    pub fn with_rng(config: GameConfig, seed: u64, mut rng: Pcg32) -> Self {
        let grid = generate(
            config.columns,
            config.rows,
            config.powerup_probability,
            &mut rng,
        );

        let state = Self {
            seed,
            phase: GamePhase::Playing,
            ball: Ball::spawn(&config),
            paddle: Paddle::spawn(&config),
            grid,
            powerup: PowerUp::new(config.powerup_duration_ms),
            progression: Progression::new(config.starting_lives),
            time_ticks: 0,
            config,
            rng,
        };
        log::info!(
            "New game: seed {}, {}x{} grid, {} power targets",
            seed,
            state.config.columns,
            state.config.rows,
            state.grid.count_kind(TargetKind::Power)
        );
        state
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace the grid with a freshly generated one
    pub fn regenerate_grid(&mut self) {
        self.grid = generate(
            self.config.columns,
            self.config.rows,
            self.config.powerup_probability,
            &mut self.rng,
        );
    }

    /// Put ball and paddle back to their start-of-life state.
    /// Also cancels any active power-up as of `now`.
    pub fn reset_ball_and_paddle(&mut self, now: f64) {
        self.ball = Ball::spawn(&self.config);
        self.powerup.clear(now, &mut self.paddle);
        self.paddle = Paddle::spawn(&self.config);
    }
}
