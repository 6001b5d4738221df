//! Collision detection for the ball against targets, walls and the paddle
//!
//! Targets use a point-in-rectangle test on the ball's center rather than a
//! full circle/rectangle intersection. A fast ball can therefore clip the
//! corner of a target without ever registering a hit.

use glam::Vec2;

use super::grid::Grid;
use super::state::{Ball, Paddle};

/// Outcome of the wall/paddle check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryResult {
    /// Bounced off a side wall or the ceiling
    pub wall: bool,
    /// Bounced off the paddle
    pub paddle: bool,
    /// Reached the floor outside the paddle's span
    pub missed: bool,
}

/// Cells of every alive target containing the ball's center, in scan order
pub fn detect_target_hits(ball: &Ball, grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, target)| target.alive && target.contains(ball.pos))
        .map(|(column, row, _)| (column, row))
        .collect()
}

/// Reflect the ball off the arena walls and paddle, judged from where the
/// ball will be next tick.
///
/// A floor contact outside the paddle leaves the velocity untouched and is
/// reported as a miss for the caller to handle.
pub fn resolve_boundaries(ball: &mut Ball, paddle: &Paddle, arena: Vec2) -> BoundaryResult {
    let mut result = BoundaryResult::default();
    let next = ball.next_pos();
    let r = ball.radius;

    if next.x > arena.x - r || next.x < r {
        ball.vel.x = -ball.vel.x;
        result.wall = true;
    }

    if next.y < r {
        ball.vel.y = -ball.vel.y;
        result.wall = true;
    } else if next.y > arena.y - r {
        if paddle.spans(ball.pos.x) {
            ball.vel.y = -ball.vel.y;
            result.paddle = true;
        } else {
            result.missed = true;
        }
    }

    result
}
