//! Game tuning and configuration
//!
//! Every gameplay constant lives here so hosts can load a JSON override.
//! Missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Geometry of the target grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub target_width: f32,
    pub target_height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            padding: TARGET_PADDING,
            offset_top: TARGET_OFFSET_TOP,
            offset_left: TARGET_OFFSET_LEFT,
        }
    }
}

impl GridLayout {
    /// Top-left corner of the cell at (column, row)
    #[inline]
    pub fn origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.target_width + self.padding) + self.offset_left,
            row as f32 * (self.target_height + self.padding) + self.offset_top,
        )
    }

    /// Center of the cell at (column, row)
    pub fn center(&self, column: usize, row: usize) -> Vec2 {
        self.origin(column, row) + Vec2::new(self.target_width, self.target_height) / 2.0
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed at the start of each life (pixels per tick)
    pub ball_start_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick while a direction key is held
    pub paddle_speed: f32,

    // === Targets ===
    pub columns: usize,
    pub rows: usize,
    pub layout: GridLayout,

    // === Power-up ===
    /// Chance that a generated target grants the power-up
    pub powerup_probability: f64,
    pub powerup_duration_ms: f64,

    pub starting_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            layout: GridLayout::default(),

            powerup_probability: POWERUP_PROBABILITY,
            powerup_duration_ms: POWERUP_DURATION_MS,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse a JSON override (unspecified fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp out-of-range values, logging each correction
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(0.0..=1.0).contains(&self.powerup_probability) {
            log::warn!(
                "powerup_probability {} out of range, clamping",
                self.powerup_probability
            );
            self.powerup_probability = if self.powerup_probability.is_nan() {
                defaults.powerup_probability
            } else {
                self.powerup_probability.clamp(0.0, 1.0)
            };
        }
        if self.columns == 0 || self.rows == 0 {
            log::warn!("Empty grid {}x{}, using at least 1x1", self.columns, self.rows);
            self.columns = self.columns.max(1);
            self.rows = self.rows.max(1);
        }
        if self.starting_lives == 0 {
            log::warn!("starting_lives must be positive, using {}", defaults.starting_lives);
            self.starting_lives = defaults.starting_lives;
        }
        if !(self.powerup_duration_ms >= 0.0) {
            log::warn!("Negative powerup duration, using default");
            self.powerup_duration_ms = defaults.powerup_duration_ms;
        }

        let sizes = [
            ("arena_width", &mut self.arena_width, defaults.arena_width),
            ("arena_height", &mut self.arena_height, defaults.arena_height),
            ("ball_radius", &mut self.ball_radius, defaults.ball_radius),
            ("paddle_width", &mut self.paddle_width, defaults.paddle_width),
            ("paddle_height", &mut self.paddle_height, defaults.paddle_height),
            ("paddle_speed", &mut self.paddle_speed, defaults.paddle_speed),
        ];
        for (name, value, default) in sizes {
            if !(*value > 0.0) {
                log::warn!("{} must be positive (got {}), using {}", name, value, default);
                *value = default;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.columns * config.rows, 40);
        assert_eq!(config.layout.origin(0, 0), Vec2::new(30.0, 30.0));
        assert_eq!(config.layout.origin(7, 4), Vec2::new(625.0, 150.0));
        assert_eq!(config.layout.center(1, 1), Vec2::new(152.5, 70.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "rows": 2, "layout": { "padding": 4.0 } }"#)
            .expect("valid json");
        assert_eq!(config.rows, 2);
        assert_eq!(config.columns, GRID_COLUMNS);
        assert_eq!(config.layout.padding, 4.0);
        assert_eq!(config.layout.target_width, TARGET_WIDTH);
    }

    #[test]
    fn test_sanitize_clamps_bad_values() {
        let config = GameConfig::from_json(
            r#"{ "powerup_probability": 1.5, "columns": 0, "paddle_width": -3.0, "starting_lives": 0 }"#,
        )
        .expect("valid json");
        assert_eq!(config.powerup_probability, 1.0);
        assert_eq!(config.columns, 1);
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
        assert_eq!(config.starting_lives, STARTING_LIVES);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(GameConfig::from_json("{ not json").is_err());
    }
}
