use std::collections::VecDeque;

use super::Maze;

impl Maze {
    /// Path from the start cell to the end cell, both inclusive.
    /// In a perfect maze this path is unique. Returns an empty path for an
    /// empty maze or if the end can't be reached.
    pub fn solve(&self) -> Vec<(usize, usize)> {
        if self.is_empty() {
            return Vec::new();
        }

        let start = self.start();
        let end = self.end();
        let mut came_from: Vec<Option<(usize, usize)>> = vec![None; self.cells.len()];
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        seen[self.index(start.0, start.1)] = true;

        while let Some((x, y)) = queue.pop_front() {
            if (x, y) == end {
                break;
            }
            for (nx, ny) in self.open_neighbors(x, y) {
                let idx = self.index(nx, ny);
                if !seen[idx] {
                    seen[idx] = true;
                    came_from[idx] = Some((x, y));
                    queue.push_back((nx, ny));
                }
            }
        }

        if !seen[self.index(end.0, end.1)] {
            return Vec::new();
        }

        let mut path = vec![end];
        let mut current = end;
        while let Some(prev) = came_from[self.index(current.0, current.1)] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// Number of cells reachable from (x, y) through open passages,
    /// including (x, y) itself.
    pub fn reachable_from(&self, x: usize, y: usize) -> usize {
        if self.cell(x, y).is_none() {
            return 0;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![(x, y)];
        seen[self.index(x, y)] = true;
        let mut count = 0;
        while let Some((cx, cy)) = stack.pop() {
            count += 1;
            for (nx, ny) in self.open_neighbors(cx, cy) {
                let idx = self.index(nx, ny);
                if !seen[idx] {
                    seen[idx] = true;
                    stack.push((nx, ny));
                }
            }
        }
        count
    }
}
