//! Per-frame draw commands
//!
//! The simulation knows nothing about the drawing surface; each frame is
//! described as a flat list of fills that a host replays onto a 2D canvas.

use glam::Vec2;

use crate::sim::{GameState, TargetKind};

/// Colors for game elements (CSS)
pub mod colors {
    pub const BALL: &str = "#ffffff";
    pub const PADDLE: &str = "#DD0095";
    pub const TARGET_PLAIN: &str = "#0095DD";
    pub const TARGET_POWER: &str = "#ff0000";
}

pub fn target_color(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Plain => colors::TARGET_PLAIN,
        TargetKind::Power => colors::TARGET_POWER,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole arena
    Clear { size: Vec2 },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
}

/// Build the draw list for the current state: arena clear, alive targets,
/// ball, paddle.
///
/// Target positions come from the grid layout, so a grid regenerated mid-tick
/// draws in the right place before the next tick lays it out.
pub fn frame(state: &GameState) -> Vec<DrawCommand> {
    let config = &state.config;
    let target_size = Vec2::new(config.layout.target_width, config.layout.target_height);

    let mut commands = Vec::with_capacity(state.grid.alive_count() + 3);
    commands.push(DrawCommand::Clear {
        size: Vec2::new(config.arena_width, config.arena_height),
    });

    for (column, row, target) in state.grid.iter() {
        if target.alive {
            commands.push(DrawCommand::FillRect {
                pos: config.layout.origin(column, row),
                size: target_size,
                color: target_color(target.kind),
            });
        }
    }

    commands.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    let paddle = &state.paddle;
    commands.push(DrawCommand::FillRect {
        pos: Vec2::new(paddle.x, paddle.y),
        size: Vec2::new(paddle.width, paddle.height),
        color: colors::PADDLE,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_frame_order_and_count() {
        let state = GameState::new(GameConfig::default(), 3);
        let commands = frame(&state);

        assert_eq!(commands.len(), 43);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                size: Vec2::new(800.0, 600.0)
            }
        );
        assert!(matches!(commands[41], DrawCommand::FillCircle { .. }));
        assert_eq!(
            commands[42],
            DrawCommand::FillRect {
                pos: Vec2::new(350.0, 590.0),
                size: Vec2::new(100.0, 10.0),
                color: colors::PADDLE,
            }
        );
    }

    #[test]
    fn test_dead_targets_not_drawn_and_kind_colors() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.grid.get_mut(0, 0).unwrap().alive = false;
        state.grid.get_mut(0, 1).unwrap().kind = TargetKind::Power;
        state.grid.get_mut(0, 2).unwrap().kind = TargetKind::Plain;

        let commands = frame(&state);
        assert_eq!(commands.len(), 42);
        // First target drawn is (0, 1)
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                pos: Vec2::new(30.0, 60.0),
                size: Vec2::new(75.0, 20.0),
                color: colors::TARGET_POWER,
            }
        );
        assert!(matches!(
            commands[2],
            DrawCommand::FillRect {
                color: colors::TARGET_PLAIN,
                ..
            }
        ));
    }
}
