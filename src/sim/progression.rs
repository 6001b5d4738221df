//! Score, level and lives

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// One point per destroyed target, never decreases
    pub score: u64,
    /// Starts at 1
    pub level: u32,
    pub lives: u8,
}

impl Progression {
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            level: 1,
            lives,
        }
    }

    pub fn on_target_destroyed(&mut self) {
        self.score += 1;
    }

    /// Whether the current level is cleared at this score
    pub fn level_complete(&self, rows: usize, columns: usize) -> bool {
        check_level_complete(self.score, self.level, rows, columns)
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    /// Lose a life; returns true when none remain
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

/// Level `level` ends when the cumulative score reaches `rows * columns * level`.
///
/// Thresholds grow with the level (40, 80, 120... for 5x8) even though every
/// grid holds only `rows * columns` targets, so later levels need more than
/// one grid's worth of points. Game balance depends on this curve.
pub fn check_level_complete(score: u64, level: u32, rows: usize, columns: usize) -> bool {
    score == (rows as u64) * (columns as u64) * u64::from(level)
}
