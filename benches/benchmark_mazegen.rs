use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazegen::maze::Maze;
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub fn benchmark_maze_generation(c: &mut Criterion) {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x12345678);

    c.bench_function("maze generation 10x10", |b| {
        b.iter(|| {
            let seed: f64 = rng.gen();
            black_box(Maze::generate(10, 10, Some(seed)));
        })
    });

    c.bench_function("maze generation 100x100", |b| {
        b.iter(|| {
            let seed: f64 = rng.gen();
            black_box(Maze::generate(100, 100, Some(seed)));
        })
    });

    let maze = Maze::generate(10, 10, Some(42.0));
    c.bench_function("fragment placement", |b| {
        b.iter(|| black_box(maze.place_fragments_with(5, &mut rng)))
    });
}


criterion_group!(benches, benchmark_maze_generation);
criterion_main!(benches);
