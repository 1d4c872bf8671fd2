use std::env;
use std::time::{Duration, Instant};
use log::{info, warn};
use waypoint_nav::graph::generators::generate_seeded_field;
use waypoint_nav::graph::Graph;
use waypoint_nav::{AdjacencyConfig, NavigatorConfig, PathPlanner, WaypointField};

// Function to time graph construction and planning on one field
fn benchmark_field(planner: &PathPlanner, field: &WaypointField) -> (Duration, Duration) {
    let start = Instant::now();
    let graph = match planner.build_graph(field) {
        Ok(graph) => graph,
        Err(err) => {
            warn!("graph construction failed: {}", err);
            return (start.elapsed(), Duration::ZERO);
        }
    };
    let build_time = start.elapsed();
    info!(
        "  - Built {} nodes / {} edges in {:?}",
        graph.node_count(),
        graph.edge_count(),
        build_time
    );

    let start = Instant::now();
    match planner.plan(&graph, &field.start, &field.end) {
        Ok(path) => info!(
            "  - Path of {} waypoints, distance {:.2}",
            path.len(),
            path.distance().into_inner()
        ),
        Err(err) => info!("  - {}", err),
    }
    (build_time, start.elapsed())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Optional JSON configuration path as the first argument
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => NavigatorConfig::from_json_file(path)?,
        None => NavigatorConfig::default(),
    };
    let adjacency: AdjacencyConfig = config.adjacency;
    let planner = PathPlanner::new(adjacency)?;

    // Define field sizes to test; density stays roughly constant
    let field_sizes = vec![100, 1_000, 5_000, 10_000];

    println!("Boundaries: x <= {}, y <= {}", adjacency.boundary_x, adjacency.boundary_y);
    println!("{:>8} {:>14} {:>14}", "points", "build", "plan");
    for &n in &field_sizes {
        let side = (n as f64).sqrt() * 1.5;
        let field = generate_seeded_field(42, n, side, side);
        let (build_time, plan_time) = benchmark_field(&planner, &field);
        println!("{:>8} {:>14?} {:>14?}", n, build_time, plan_time);
    }

    Ok(())
}
