//! Target grid generation and layout

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Target, TargetKind};
use crate::config::GridLayout;

/// Targets indexed `[column][row]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<Vec<Target>>,
}

impl Grid {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Target> {
        self.columns.get(column)?.get(row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Target> {
        self.columns.get_mut(column)?.get_mut(row)
    }

    /// All cells in scan order (column by column)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Target)> {
        self.columns.iter().enumerate().flat_map(|(c, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(r, target)| (c, r, target))
        })
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|(_, _, t)| t.alive).count()
    }

    pub fn count_kind(&self, kind: TargetKind) -> usize {
        self.iter().filter(|(_, _, t)| t.kind == kind).count()
    }

    /// Assign screen coordinates to every alive target from its indices
    pub fn layout(&mut self, layout: &GridLayout) {
        let size = Vec2::new(layout.target_width, layout.target_height);
        for (c, column) in self.columns.iter_mut().enumerate() {
            for (r, target) in column.iter_mut().enumerate() {
                if target.alive {
                    target.pos = layout.origin(c, r);
                    target.size = size;
                }
            }
        }
    }
}

/// Build a fresh grid where each cell independently becomes a power target
/// with probability `powerup_probability`
pub fn generate<R: Rng>(
    columns: usize,
    rows: usize,
    powerup_probability: f64,
    rng: &mut R,
) -> Grid {
    let columns = (0..columns)
        .map(|_| {
            (0..rows)
                .map(|_| {
                    let kind = if rng.random::<f64>() < powerup_probability {
                        TargetKind::Power
                    } else {
                        TargetKind::Plain
                    };
                    Target::new(kind)
                })
                .collect()
        })
        .collect();
    Grid { columns }
}
