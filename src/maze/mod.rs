mod generate;
mod fragments;
mod solve;
#[cfg(test)]
mod test;

use std::fmt::{Display, Formatter};
use serde::Serialize;
use generate::MazeBuilder;

pub use fragments::{FragmentPosition, PLACEMENT_SCALE, MAX_PLACEMENT_ATTEMPTS};

/// Represents a generated maze.
/// Given a seed and a pair of dimensions, a maze is carved with a randomized
/// depth-first backtracker driven by [crate::prng::LcgRng]. The result is
/// always a perfect maze: every cell is reachable from every other cell by
/// exactly one path. The start cell (0,0) is open on its left side and the
/// end cell (width-1, height-1) is open on its right side.
#[derive(Debug, Clone, Serialize)]
pub struct Maze {
    width: usize,
    height: usize,
    seed: f64,
    cells: Vec<Cell>,
}

/// One side of a cell. Ordering matches the order neighbors are considered
/// in during carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 4,
            Side::Left => 8,
        }
    }
}

/// Wall flags for a single cell. `true` means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub fn closed() -> Walls {
        Walls { top: true, right: true, bottom: true, left: true }
    }

    pub fn has(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    fn set(&mut self, side: Side, present: bool) {
        match side {
            Side::Top => self.top = present,
            Side::Right => self.right = present,
            Side::Bottom => self.bottom = present,
            Side::Left => self.left = present,
        }
    }

    /// Packs the flags into a nibble: top=1, right=2, bottom=4, left=8.
    pub fn bits(&self) -> u8 {
        Side::ALL.iter()
            .filter(|side| self.has(**side))
            .map(|side| side.bit())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    x: usize,
    y: usize,
    walls: Walls,
}

impl Cell {
    fn new(x: usize, y: usize) -> Cell {
        Cell { x, y, walls: Walls::closed() }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, side: Side) -> bool {
        self.walls.has(side)
    }
}

impl Maze {
    /// Carves a new maze. Passing `None` draws a random seed, which is then
    /// available from [Maze::seed] so the maze can be reproduced later.
    pub fn generate(width: usize, height: usize, seed: Option<f64>) -> Maze {
        let seed = seed.unwrap_or_else(rand::random::<f64>);
        MazeBuilder::generate(width, height, seed)
    }

    /// A fully walled-in grid.
    fn closed(width: usize, height: usize, seed: f64) -> Maze {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        Maze { width, height, seed, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The seed this maze was generated from.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(self.index(x, y))
        }
        else {
            None
        }
    }

    pub fn start(&self) -> (usize, usize) {
        (0, 0)
    }

    pub fn end(&self) -> (usize, usize) {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// Coordinates of the cell adjacent to (x, y) on the given side, if it
    /// lies inside the grid.
    pub fn neighbor(&self, x: usize, y: usize, side: Side) -> Option<(usize, usize)> {
        let (nx, ny) = match side {
            Side::Top => (x, y.checked_sub(1)?),
            Side::Right => (x + 1, y),
            Side::Bottom => (x, y + 1),
            Side::Left => (x.checked_sub(1)?, y),
        };
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }

    /// True if there's an open passage from (x, y) into the neighboring
    /// cell on `side`. Openings on the outer boundary don't count.
    pub fn has_passage(&self, x: usize, y: usize, side: Side) -> bool {
        match (self.cell(x, y), self.neighbor(x, y, side)) {
            (Some(cell), Some(_)) => !cell.has_wall(side),
            _ => false,
        }
    }

    /// All neighbors reachable from (x, y) in one step.
    pub fn open_neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        Side::ALL.into_iter()
            .filter(move |side| self.has_passage(x, y, *side))
            .filter_map(move |side| self.neighbor(x, y, side))
    }

    /// Number of interior walls that were carved away. For a perfect maze
    /// this is always `width * height - 1`.
    pub fn carved_passages(&self) -> usize {
        self.cells.iter()
            .map(|cell| {
                [Side::Right, Side::Bottom].into_iter()
                    .filter(|side| self.has_passage(cell.x, cell.y, *side))
                    .count()
            })
            .sum()
    }

    /// Cells with exactly one way in or out.
    pub fn dead_ends(&self) -> usize {
        self.cells.iter()
            .filter(|cell| self.open_neighbors(cell.x, cell.y).count() == 1)
            .count()
    }

    /// Cells where the path branches three or more ways.
    pub fn junctions(&self) -> usize {
        self.cells.iter()
            .filter(|cell| self.open_neighbors(cell.x, cell.y).count() >= 3)
            .count()
    }

    /// A compact structured string describing this maze's walls.
    /// Each cell is one hex digit (see [Walls::bits]); rows are separated by '/'.
    /// Only used for testing and comparison.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.cells.len() + self.height);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && cell.x == 0 {
                slug.push('/');
            }
            slug.push_str(&format!("{:X}", cell.walls.bits()));
        }
        slug
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Removes the wall between (x, y) and its neighbor on `side`, clearing
    /// both cells' facing flags together. No-op if there is no neighbor.
    fn remove_wall_between(&mut self, x: usize, y: usize, side: Side) {
        if let Some((nx, ny)) = self.neighbor(x, y, side) {
            let here = self.index(x, y);
            let there = self.index(nx, ny);
            self.cells[here].walls.set(side, false);
            self.cells[there].walls.set(side.opposite(), false);
        }
    }

    /// Clears an outward-facing wall. Only ever used for the entrance and exit.
    fn open_boundary(&mut self, x: usize, y: usize, side: Side) {
        if self.cell(x, y).is_some() && self.neighbor(x, y, side).is_none() {
            let here = self.index(x, y);
            self.cells[here].walls.set(side, false);
        }
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        for y in 0..self.height {
            for x in 0..self.width {
                let top = self.cells[self.index(x, y)].walls.top;
                write!(f, "+{}", if top { "---" } else { "   " })?;
            }
            writeln!(f, "+")?;

            for x in 0..self.width {
                let left = self.cells[self.index(x, y)].walls.left;
                write!(f, "{}   ", if left { '|' } else { ' ' })?;
            }
            let right = self.cells[self.index(self.width - 1, y)].walls.right;
            writeln!(f, "{}", if right { '|' } else { ' ' })?;
        }

        for x in 0..self.width {
            let bottom = self.cells[self.index(x, self.height - 1)].walls.bottom;
            write!(f, "+{}", if bottom { "---" } else { "   " })?;
        }
        writeln!(f, "+")
    }
}
