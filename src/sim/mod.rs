//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame, no internal timers
//! - Seeded RNG only
//! - Stable grid scan order (column by column)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod powerup;
pub mod progression;
pub mod state;
pub mod tick;

pub use collision::{BoundaryResult, detect_target_hits, resolve_boundaries};
pub use grid::{Grid, generate};
pub use powerup::PowerUp;
pub use progression::{Progression, check_level_complete};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Target, TargetKind};
pub use tick::{TickInput, tick};
