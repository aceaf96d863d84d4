//! Benchmarks for observation ingestion, grid building, and planning.

use criterion::{criterion_group, criterion_main, Criterion};
use ghana_map::{
    AStarPlanner, GhanaConfig, GridCell, GridCoord, GridProjection, MapSection, OccupancyGrid,
    VoxelMap, VoxelStore, WorldPoint,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn synthetic_cloud(n: usize) -> Vec<WorldPoint> {
    let mut rng = StdRng::seed_from_u64(11);
    (0..n)
        .map(|_| {
            WorldPoint::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(0.0..0.5),
                rng.random_range(-2.0..2.0),
            )
        })
        .collect()
}

fn obstacle_field(rows: usize, cols: usize, fill_percent: u32) -> OccupancyGrid {
    let mut rng = StdRng::seed_from_u64(23);
    let mut grid = OccupancyGrid::new(GridProjection::new(0.0, 0.0, 0.1, rows, cols));
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let cell = if rng.random_range(0..100) < fill_percent {
                GridCell::Obstacle
            } else {
                GridCell::Free
            };
            grid.set_cell(&GridCoord::new(r, c), cell);
        }
    }
    // Keep the corners open so the benchmark route always exists.
    for coord in [GridCoord::new(0, 0), GridCoord::new(rows as i32 - 1, cols as i32 - 1)] {
        grid.set_cell(&coord, GridCell::Free);
        for n in coord.neighbors_8() {
            grid.set_cell(&n, GridCell::Free);
        }
    }
    grid
}

fn bench_ingestion(c: &mut Criterion) {
    let points = synthetic_cloud(10_000);
    c.bench_function("ingest_10k_points", |b| {
        b.iter(|| {
            let mut store = VoxelStore::new(0.05);
            store.add_observations(black_box(&points)).unwrap();
            store.len()
        })
    });
}

fn bench_grid_build(c: &mut Criterion) {
    let config = GhanaConfig {
        map: MapSection::default()
            .with_cell_size(0.05)
            .with_noise_level(1),
        ..GhanaConfig::default()
    };
    let mut map = VoxelMap::new(config).unwrap();
    map.add_observations(&synthetic_cloud(10_000)).unwrap();
    map.update_ground(0.0).unwrap();

    c.bench_function("build_grid_10k_points", |b| {
        b.iter(|| map.build_grid().unwrap().cell_count())
    });
}

fn bench_plan(c: &mut Criterion) {
    let grid = obstacle_field(100, 100, 20);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(99, 99);

    c.bench_function("plan_100x100_field", |b| {
        b.iter(|| {
            let planner = AStarPlanner::with_defaults(&grid);
            planner
                .find_path(black_box(start), black_box(goal), Some(0.0))
                .map(|route| route.length_cells())
        })
    });
}

criterion_group!(benches, bench_ingestion, bench_grid_build, bench_plan);
criterion_main!(benches);
