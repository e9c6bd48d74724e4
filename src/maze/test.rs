use std::collections::HashSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rayon::prelude::*;

use crate::prng::LcgRng;
use super::{Maze, Side, FragmentPosition, MAX_PLACEMENT_ATTEMPTS, PLACEMENT_SCALE};

/// Checks every structural property a generated maze must have.
fn assert_perfect(maze: &Maze) {
    let (w, h) = (maze.width(), maze.height());

    // Facing walls agree everywhere.
    for cell in maze.cells() {
        for side in Side::ALL {
            if let Some((nx, ny)) = maze.neighbor(cell.x(), cell.y(), side) {
                let other = maze.cell(nx, ny).unwrap();
                assert_eq!(
                    cell.has_wall(side), other.has_wall(side.opposite()),
                    "asymmetric wall between ({},{}) and ({},{}) in seed {}",
                    cell.x(), cell.y(), nx, ny, maze.seed()
                );
            }
        }
    }

    // Spanning tree: w*h - 1 edges and everything connected.
    assert_eq!(maze.carved_passages(), w * h - 1, "seed {}", maze.seed());
    assert_eq!(maze.reachable_from(0, 0), w * h, "seed {}", maze.seed());

    let (ex, ey) = maze.end();
    assert!(!maze.cell(0, 0).unwrap().has_wall(Side::Left));
    assert!(!maze.cell(ex, ey).unwrap().has_wall(Side::Right));

    // The only boundary openings are the entrance and exit.
    for cell in maze.cells() {
        for side in Side::ALL {
            if maze.neighbor(cell.x(), cell.y(), side).is_none() {
                let is_entrance = (cell.x(), cell.y()) == (0, 0) && side == Side::Left;
                let is_exit = (cell.x(), cell.y()) == (ex, ey) && side == Side::Right;
                assert_eq!(cell.has_wall(side), !(is_entrance || is_exit));
            }
        }
    }
}

#[test]
fn test_known_seeds() {
    assert_eq!(Maze::generate(4, 3, Some(7.0)).slug(), "5393/BC6A/C554");
    assert_eq!(Maze::generate(3, 3, Some(0.0)).slug(), "53B/BAA/C44");
    assert_eq!(Maze::generate(5, 1, Some(99.0)).slug(), "55555");
    assert_eq!(
        Maze::generate(10, 10, Some(42.0)).slug(),
        "3915795513/AAA956956A/AAAAD3C3BA/AAAC383AAA/AAABAAEAC6/AAC6C29693/AC3956C16A/C386B93E92/96C56AC56A/C55556D554"
    );
}

#[test]
fn test_determinism() {
    let a = Maze::generate(10, 10, Some(42.0));
    let b = Maze::generate(10, 10, Some(42.0));
    assert_eq!(a.slug(), b.slug());
    for (ca, cb) in a.cells().zip(b.cells()) {
        assert_eq!(ca.walls(), cb.walls());
    }
}

#[test]
fn test_zero_is_a_real_seed() {
    let zero = Maze::generate(6, 6, Some(0.0));
    assert_eq!(zero.seed(), 0.0);
    assert_eq!(zero.slug(), Maze::generate(6, 6, Some(0.0)).slug());
    assert_perfect(&zero);
}

#[test]
fn test_unseeded_maze_records_its_seed() {
    let maze = Maze::generate(8, 5, None);
    assert_perfect(&maze);
    let replay = Maze::generate(8, 5, Some(maze.seed()));
    assert_eq!(maze.slug(), replay.slug());
}

#[test]
fn test_single_cell() {
    for seed in [0.0, 5.0, 0.25, 1234.0] {
        let maze = Maze::generate(1, 1, Some(seed));
        let cell = maze.cell(0, 0).unwrap();
        assert!(!cell.has_wall(Side::Left));
        assert!(!cell.has_wall(Side::Right));
        assert!(cell.has_wall(Side::Top));
        assert!(cell.has_wall(Side::Bottom));
        assert_eq!(maze.carved_passages(), 0);
        assert_eq!(maze.solve(), vec![(0, 0)]);
    }
}

#[test]
fn test_corridors() {
    let row = Maze::generate(7, 1, Some(3.0));
    assert_perfect(&row);
    assert_eq!(row.solve().len(), 7);

    let column = Maze::generate(1, 7, Some(3.0));
    assert_perfect(&column);
    assert_eq!(column.solve().len(), 7);
    assert_eq!(column.dead_ends(), 2);
}

#[test]
fn test_zero_dimensions_give_empty_grid() {
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        let maze = Maze::generate(w, h, Some(1.0));
        assert!(maze.is_empty());
        assert!(maze.solve().is_empty());
        assert!(maze.place_fragments(3).is_empty());
        assert_eq!(maze.to_string(), "");
    }
}

#[test]
fn test_random_mazes_are_perfect() {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x12345678);
    let tests: Vec<(usize, usize, f64)> = (0..500)
        .map(|_| (rng.gen_range(1..30), rng.gen_range(1..30), rng.gen_range(0.0..1e6)))
        .collect();

    tests.into_par_iter().for_each(|(w, h, seed)| {
        let maze = Maze::generate(w, h, Some(seed));
        assert_perfect(&maze);
    });
}

#[test]
fn test_fractional_seeds() {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0xBABA2233);
    for _ in 0..100 {
        let seed: f64 = rng.gen();
        let maze = Maze::generate(10, 10, Some(seed));
        assert_perfect(&maze);
        assert_eq!(maze.slug(), Maze::generate(10, 10, Some(seed)).slug());
    }
}

#[test]
fn test_solution_path() {
    let maze = Maze::generate(10, 10, Some(42.0));
    let path = maze.solve();
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(9, 9)));
    for pair in path.windows(2) {
        assert!(maze.open_neighbors(pair[0].0, pair[0].1).any(|n| n == pair[1]));
    }
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len());
}

#[test]
fn test_display() {
    let maze = Maze::generate(4, 3, Some(7.0));
    assert_eq!(
        maze.to_string(),
        "+---+---+---+---+\n        |       |\n+---+   +   +   +\n|   |       |   |\n+   +---+---+   +\n|                \n+---+---+---+---+\n"
    );
    assert_eq!(Maze::generate(1, 1, Some(5.0)).to_string(), "+---+\n     \n+---+\n");
}

#[test]
fn test_fragment_example() {
    let maze = Maze::generate(5, 5, Some(1.0));
    let fragments = maze.place_fragments(3);
    assert_eq!(fragments.len(), 3);

    let unique: HashSet<FragmentPosition> = fragments.iter().copied().collect();
    assert_eq!(unique.len(), 3);
    for frag in fragments {
        assert_ne!((frag.x, frag.z), (0, 0));
        assert_ne!((frag.x, frag.z), (8, 8));
        assert!(frag.x % 2 == 0 && frag.z % 2 == 0);
        assert!(frag.x <= 8 && frag.z <= 8);
    }
}

#[test]
fn test_fragment_bounds() {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x31D70855);
    for _ in 0..200 {
        let w = rng.gen_range(1..8);
        let h = rng.gen_range(1..8);
        let count = rng.gen_range(0..70);
        let maze = Maze::generate(w, h, Some(rng.gen_range(0.0..1000.0)));
        let fragments = maze.place_fragments_with(count, &mut rng);

        let available = (w * h).saturating_sub(if w * h == 1 { 1 } else { 2 });
        assert!(fragments.len() <= count);
        assert!(fragments.len() <= available);

        let cells: HashSet<(usize, usize)> = fragments.iter().map(|f| f.cell()).collect();
        assert_eq!(cells.len(), fragments.len());
        assert!(!cells.contains(&maze.start()));
        assert!(!cells.contains(&maze.end()));
        for (x, y) in cells {
            assert!(x < w && y < h);
        }
    }
}

#[test]
fn test_fragments_with_no_free_cells() {
    assert!(Maze::generate(1, 1, Some(1.0)).place_fragments(5).is_empty());
    assert!(Maze::generate(2, 1, Some(1.0)).place_fragments(5).is_empty());
    assert_eq!(Maze::generate(3, 1, Some(1.0)).place_fragments(5), vec![FragmentPosition { x: 2, z: 0 }]);
}

#[test]
fn test_fragment_attempts_are_bounded() {
    // A source that always lands on the start cell must give up per item.
    struct Stuck(usize);
    impl crate::prng::RandomSource for Stuck {
        fn next_f64(&mut self) -> f64 {
            self.0 += 1;
            0.0
        }
    }

    let maze = Maze::generate(4, 4, Some(2.0));
    let mut stuck = Stuck(0);
    assert!(maze.place_fragments_with(3, &mut stuck).is_empty());
    assert_eq!(stuck.0, 3 * MAX_PLACEMENT_ATTEMPTS * 2);
}

#[test]
fn test_full_maze_stops_drawing() {
    // Walks every cell of a 3x3 grid in row order, over and over.
    struct Sweep { draws: Vec<f64>, calls: usize }
    impl crate::prng::RandomSource for Sweep {
        fn next_f64(&mut self) -> f64 {
            let value = self.draws[self.calls % self.draws.len()];
            self.calls += 1;
            value
        }
    }

    let mut sweep = Sweep { draws: Vec::new(), calls: 0 };
    for y in 0..3 {
        for x in 0..3 {
            sweep.draws.push((x as f64 + 0.5) / 3.0);
            sweep.draws.push((y as f64 + 0.5) / 3.0);
        }
    }

    let maze = Maze::generate(3, 3, Some(5.0));
    let frags = maze.place_fragments_with(1_000_000_000, &mut sweep);
    assert_eq!(frags.len(), 7);
    // One rejected start cell plus seven hits, two draws each.
    assert_eq!(sweep.calls, 16);
}

#[test]
fn test_seeded_fragments_are_reproducible() {
    let maze = Maze::generate(10, 10, Some(42.0));
    let a = maze.place_fragments_seeded(5);
    let b = Maze::generate(10, 10, Some(42.0)).place_fragments_seeded(5);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);

    // Seeded placement picks up exactly where carving left off.
    let mut rng = LcgRng::new(42.0);
    rng.advance(99);
    assert_eq!(maze.place_fragments_with(5, &mut rng), a);
    for frag in a {
        assert!(frag.x < 10 * PLACEMENT_SCALE && frag.z < 10 * PLACEMENT_SCALE);
    }
}

#[test]
fn test_metrics() {
    let maze = Maze::generate(3, 3, Some(0.0));
    let total_degree: usize = maze.cells()
        .map(|c| maze.open_neighbors(c.x(), c.y()).count())
        .sum();
    assert_eq!(total_degree, 2 * maze.carved_passages());
    assert_eq!(maze.dead_ends(), 3);
    assert_eq!(maze.junctions(), 1);
    assert_eq!(maze.solve().len(), 5);
}
