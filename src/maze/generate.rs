use log::{debug, info, warn};

use crate::prng::LcgRng;
use super::{Maze, Side};

pub struct MazeBuilder {
    rng: LcgRng,
    maze: Maze,
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>,
}

impl MazeBuilder {
    pub fn generate(width: usize, height: usize, seed: f64) -> Maze {
        let rng = LcgRng::new(seed);
        let builder = MazeBuilder {
            maze: Maze::closed(width, height, rng.initial_seed),
            rng,
            visited: vec![false; width * height],
            stack: Vec::with_capacity(width * height),
        };
        builder._generate()
    }

    /// Randomized depth-first carving.
    /// Starting from (0,0), repeatedly look at the cell on top of the stack
    /// and knock through to a random unvisited neighbor, backtracking when
    /// there are none left. When the stack empties every cell has been
    /// visited exactly once and the carved passages form a spanning tree.
    fn _generate(mut self) -> Maze {
        let (width, height) = (self.maze.width, self.maze.height);
        if width == 0 || height == 0 {
            warn!("Refusing to carve a {}x{} maze; returning an empty grid", width, height);
            return self.maze;
        }
        info!("Generating {}x{} maze with seed {}...", width, height, self.rng.initial_seed);

        let start = self.maze.start();
        self.mark_visited(start);
        self.stack.push(start);

        while let Some(&(x, y)) = self.stack.last() {
            let neighbors = self.unvisited_neighbors(x, y);
            if neighbors.is_empty() {
                self.stack.pop();
                continue;
            }

            // Exactly one draw per carve, even when there's only one candidate.
            let (side, next) = neighbors[self.rng.rand_index(neighbors.len())];
            self.maze.remove_wall_between(x, y, side);
            self.mark_visited(next);
            self.stack.push(next);
        }

        let (end_x, end_y) = self.maze.end();
        self.maze.open_boundary(0, 0, Side::Left);
        self.maze.open_boundary(end_x, end_y, Side::Right);

        debug!(
            "Carved {} passages using {} RNG calls",
            self.maze.carved_passages(), self.rng.num_rng_calls.get()
        );
        self.maze
    }

    /// Unvisited in-bounds neighbors, in top/right/bottom/left order.
    fn unvisited_neighbors(&self, x: usize, y: usize) -> Vec<(Side, (usize, usize))> {
        Side::ALL.into_iter()
            .filter_map(|side| self.maze.neighbor(x, y, side).map(|pos| (side, pos)))
            .filter(|(_, (nx, ny))| !self.visited[self.maze.index(*nx, *ny)])
            .collect()
    }

    fn mark_visited(&mut self, (x, y): (usize, usize)) {
        let idx = self.maze.index(x, y);
        self.visited[idx] = true;
    }
}
