//! Per-frame simulation step
//!
//! Core game loop that advances the state by one tick. The order of the
//! phases matters: expiry runs before the paddle catch uses the current
//! width, and the ball moves on the velocity left by the previous tick's
//! collision response.

use glam::Vec2;

use super::collision::{detect_target_hits, resolve_boundaries};
use super::state::{GameEvent, GamePhase, GameState, TargetKind};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
}

/// Advance the game state by one tick.
///
/// `now` is the host clock in milliseconds; it is only compared against the
/// power-up expiry. Returns everything that happened, in order. Once the game
/// is over this does nothing.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }
    state.time_ticks += 1;

    // 1. Targets
    resolve_target_hits(state, now, &mut events);

    // 2. Power-up expiry
    if state.powerup.tick(now, &mut state.paddle) {
        events.push(GameEvent::PowerUpExpired);
    }

    // 3. Ball movement
    state.ball.pos += state.ball.vel;

    // 4. Walls and paddle
    let arena = Vec2::new(state.config.arena_width, state.config.arena_height);
    let boundary = resolve_boundaries(&mut state.ball, &state.paddle, arena);
    if boundary.wall {
        events.push(GameEvent::WallBounce);
    }
    if boundary.paddle {
        events.push(GameEvent::PaddleBounce);
    }
    if boundary.missed {
        let out_of_lives = state.progression.lose_life();
        events.push(GameEvent::LifeLost {
            lives: state.progression.lives,
        });
        if out_of_lives {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {}, level {}",
                state.progression.score,
                state.progression.level
            );
            events.push(GameEvent::GameOver {
                score: state.progression.score,
                level: state.progression.level,
            });
            return events;
        }
        log::debug!("Life lost, {} remaining", state.progression.lives);
        state.reset_ball_and_paddle(now);
    }

    // 5. Paddle movement. Right is tried first; with both held at the right
    // wall, left still applies. Clamping runs even without input since a
    // widened paddle may now overhang the right wall.
    let speed = state.config.paddle_speed;
    let max_x = state.config.arena_width - state.paddle.width;
    let dx = if input.right && state.paddle.x < max_x {
        speed
    } else if input.left && state.paddle.x > 0.0 {
        -speed
    } else {
        0.0
    };
    state.paddle.shift(dx, state.config.arena_width);

    events
}

/// Apply every target hit for this tick.
///
/// Each hit flips the vertical velocity, so two hits in one tick cancel out.
/// Clearing a level swaps in a new grid, after which the remaining hits
/// (which refer to the old grid) are dropped.
fn resolve_target_hits(state: &mut GameState, now: f64, events: &mut Vec<GameEvent>) {
    state.grid.layout(&state.config.layout);

    for (column, row) in detect_target_hits(&state.ball, &state.grid) {
        let Some(target) = state.grid.get_mut(column, row) else {
            continue;
        };
        target.alive = false;
        let kind = target.kind;

        state.ball.vel.y = -state.ball.vel.y;
        if kind == TargetKind::Power {
            state.powerup.activate(now, &mut state.paddle);
            events.push(GameEvent::PowerUpActivated {
                expires_at: state.powerup.expires_at,
            });
        }
        state.progression.on_target_destroyed();
        events.push(GameEvent::TargetDestroyed { column, row, kind });

        if state
            .progression
            .level_complete(state.config.rows, state.config.columns)
        {
            state.progression.advance_level();
            state.regenerate_grid();
            state.reset_ball_and_paddle(now);
            log::info!(
                "Level {} reached (score {})",
                state.progression.level,
                state.progression.score
            );
            events.push(GameEvent::LevelComplete {
                level: state.progression.level,
            });
            // The regenerated targets are not laid out yet and cannot be hit
            break;
        }
    }
}
