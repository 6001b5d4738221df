//! Score and lives text
//!
//! Hosts only touch the DOM when a value actually changes.

use crate::sim::GameState;

/// A text element that needs new content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudUpdate {
    Score(String),
    Lives(String),
}

impl HudUpdate {
    pub fn text(&self) -> &str {
        match self {
            HudUpdate::Score(text) | HudUpdate::Lives(text) => text,
        }
    }
}

/// Last values shown to the player
#[derive(Debug, Clone, Default)]
pub struct Hud {
    score: Option<u64>,
    lives: Option<u8>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text updates for values that changed since the last call
    /// (everything on the first call)
    pub fn refresh(&mut self, state: &GameState) -> Vec<HudUpdate> {
        let mut updates = Vec::new();
        let progression = &state.progression;

        if self.score != Some(progression.score) {
            self.score = Some(progression.score);
            updates.push(HudUpdate::Score(format!("Score: {}", progression.score)));
        }
        if self.lives != Some(progression.lives) {
            self.lives = Some(progression.lives);
            updates.push(HudUpdate::Lives(format!("Lives: {}", progression.lives)));
        }

        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_only_changes_are_reported() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let mut hud = Hud::new();

        assert_eq!(
            hud.refresh(&state),
            vec![
                HudUpdate::Score("Score: 0".into()),
                HudUpdate::Lives("Lives: 3".into())
            ]
        );
        assert!(hud.refresh(&state).is_empty());

        state.progression.score = 5;
        let updates = hud.refresh(&state);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].text(), "Score: 5");

        state.progression.lives = 2;
        assert_eq!(hud.refresh(&state), vec![HudUpdate::Lives("Lives: 2".into())]);
    }
}
