use std::collections::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::prng::{LcgRng, RandomSource};
use super::Maze;

/// Fragment coordinates are cell coordinates multiplied by this, matching
/// the world-space cell pitch used by the renderer.
pub const PLACEMENT_SCALE: usize = 2;

/// How many random cells to try for a single fragment before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Where a collectible fragment sits, in placement (scaled) coordinates.
/// `x` comes from the cell's column and `z` from its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragmentPosition {
    pub x: usize,
    pub z: usize,
}

impl FragmentPosition {
    fn from_cell(x: usize, y: usize) -> FragmentPosition {
        FragmentPosition { x: x * PLACEMENT_SCALE, z: y * PLACEMENT_SCALE }
    }

    /// The grid cell this fragment was placed in.
    pub fn cell(&self) -> (usize, usize) {
        (self.x / PLACEMENT_SCALE, self.z / PLACEMENT_SCALE)
    }
}

impl Maze {
    /// Picks up to `count` distinct cells for fragments, never the start or
    /// end cell. Draws come from system entropy, so placement is not tied to
    /// the maze seed. May return fewer than `count` positions when the maze
    /// is too small to fit them.
    pub fn place_fragments(&self, count: usize) -> Vec<FragmentPosition> {
        self.place_fragments_with(count, &mut rand::thread_rng())
    }

    /// Like [Maze::place_fragments], but continues this maze's own seeded
    /// stream from where carving stopped, so the placement is reproducible
    /// from the seed alone.
    pub fn place_fragments_seeded(&self, count: usize) -> Vec<FragmentPosition> {
        let mut rng = LcgRng::new(self.seed);
        // Carving consumes exactly one draw per cell after the first.
        rng.advance(self.cells.len().saturating_sub(1));
        self.place_fragments_with(count, &mut rng)
    }

    /// Rejection-samples fragment cells from `rng`.
    pub fn place_fragments_with<R: RandomSource>(&self, count: usize, rng: &mut R) -> Vec<FragmentPosition> {
        let mut positions = Vec::new();
        if self.is_empty() {
            return positions;
        }

        let mut excluded: HashSet<(usize, usize)> = HashSet::from([self.start(), self.end()]);
        for _ in 0..count {
            if excluded.len() == self.cells.len() {
                break;
            }
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let x = rng.rand_index(self.width);
                let y = rng.rand_index(self.height);
                if excluded.insert((x, y)) {
                    positions.push(FragmentPosition::from_cell(x, y));
                    break;
                }
            }
        }

        if positions.len() < count {
            debug!("Only placed {} of {} fragments", positions.len(), count);
        }
        positions
    }
}
