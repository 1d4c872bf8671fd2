use criterion::*;

use waypoint_nav::graph::generators::{generate_grid_field, generate_seeded_field};
use waypoint_nav::{AdjacencyConfig, PathPlanner};

fn bench_planning(c: &mut Criterion) {
    let planner = PathPlanner::new(AdjacencyConfig::new(1.5, 1.5).unwrap()).unwrap();

    let small_grid = planner.build_graph(&generate_grid_field(10, 10, 1.0)).unwrap();
    let large_grid = planner.build_graph(&generate_grid_field(100, 100, 1.0)).unwrap();
    let scattered_field = generate_seeded_field(7, 2_000, 60.0, 60.0);
    let scattered = planner.build_graph(&scattered_field).unwrap();

    let small_field = generate_grid_field(10, 10, 1.0);
    let large_field = generate_grid_field(100, 100, 1.0);

    let mut grid_group = c.benchmark_group("Grid Planning");
    grid_group.bench_function("small", |b| {
        b.iter(|| planner.plan(&small_grid, &small_field.start, &small_field.end))
    });
    grid_group.bench_function("large", |b| {
        b.iter(|| planner.plan(&large_grid, &large_field.start, &large_field.end))
    });
    grid_group.finish();

    let mut scattered_group = c.benchmark_group("Scattered Planning");
    scattered_group.bench_function("build", |b| b.iter(|| planner.build_graph(&scattered_field)));
    scattered_group.bench_function("plan", |b| {
        b.iter(|| planner.plan(&scattered, &scattered_field.start, &scattered_field.end))
    });
    scattered_group.finish();
}

criterion_group!(benches, bench_planning);
criterion_main!(benches);
