use ordered_float::OrderedFloat;
use rand::prelude::*;
use waypoint_nav::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use waypoint_nav::graph::generators::{generate_grid_field, generate_seeded_field};
use waypoint_nav::graph::{Graph, MutableGraph, NodeId, UndirectedGraph};
use waypoint_nav::{AdjacencyConfig, Dijkstra, Error, PathPlanner, Waypoint, WaypointField};

type TestGraph = UndirectedGraph<u32, OrderedFloat<f64>>;

fn graph_from_edges(nodes: u32, edges: &[(u32, u32, f64)]) -> TestGraph {
    let mut graph = TestGraph::new();
    for v in 0..nodes {
        graph.add_node(v);
    }
    for &(a, b, w) in edges {
        graph.add_edge(&a, &b, OrderedFloat(w)).unwrap();
    }
    graph
}

fn four_point_field() -> WaypointField {
    WaypointField::new(Waypoint::new(0, (0.0, 0.0)), Waypoint::new(2, (2.0, 0.0)))
        .with_waypoints(vec![
            Waypoint::new(1, (1.0, 0.0)),
            Waypoint::new(3, (10.0, 10.0)),
        ])
}

// Minimum weight over all simple paths, by exhaustive search
fn brute_force_distance(graph: &TestGraph, from: NodeId, to: NodeId) -> Option<f64> {
    fn visit(
        graph: &TestGraph,
        current: NodeId,
        to: NodeId,
        so_far: f64,
        seen: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if current == to {
            if best.map_or(true, |b| so_far < b) {
                *best = Some(so_far);
            }
            return;
        }
        for (next, weight) in graph.neighbors(current) {
            if !seen[next] {
                seen[next] = true;
                visit(graph, next, to, so_far + weight.into_inner(), seen, best);
                seen[next] = false;
            }
        }
    }

    let mut seen = vec![false; graph.node_count()];
    seen[from] = true;
    let mut best = None;
    visit(graph, from, to, 0.0, &mut seen, &mut best);
    best
}

#[test]
fn test_four_point_scenario() {
    let planner = PathPlanner::new(AdjacencyConfig::new(1.5, 1.5).unwrap()).unwrap();
    let route = planner.plan_field(&four_point_field()).unwrap();

    let ids: Vec<i32> = route.path.iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert!((route.path.distance().into_inner() - 2.0).abs() < 1e-9);

    // the isolated waypoint stays unreachable without failing the search
    let tree = Dijkstra::new().compute_shortest_paths(&route.graph, 0).unwrap();
    let isolated = route.graph.node_id(&Waypoint::new(3, (0.0, 0.0))).unwrap();
    assert_eq!(tree.distance(isolated), None);
    assert_eq!(tree.path_to(isolated), None);
}

#[test]
fn test_direct_edge_beats_detour() {
    // 0 = start, 2 = end; the intermediate is finalized before the end
    let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 5.0), (0, 2, 3.0)]);
    let path = Dijkstra::new().shortest_path(&graph, &0, &2).unwrap();
    assert_eq!(path.waypoints(), &[0, 2]);
    assert_eq!(path.distance(), OrderedFloat(3.0));
}

#[test]
fn test_decrease_key_picks_cheaper_detour() {
    let graph = graph_from_edges(3, &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 2.0)]);
    let path = Dijkstra::new().shortest_path(&graph, &0, &2).unwrap();
    assert_eq!(path.waypoints(), &[0, 1, 2]);
    assert_eq!(path.distance(), OrderedFloat(3.0));
}

#[test]
fn test_start_equals_end() {
    let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    let path = Dijkstra::new().shortest_path(&graph, &1, &1).unwrap();
    assert_eq!(path.waypoints(), &[1]);
    assert_eq!(path.distance(), OrderedFloat(0.0));

    let lonely = graph_from_edges(1, &[]);
    let path = Dijkstra::new().shortest_path(&lonely, &0, &0).unwrap();
    assert_eq!(path.len(), 1);
}

#[test]
fn test_unreachable_end() {
    let graph = graph_from_edges(5, &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]);
    let err = Dijkstra::new().shortest_path(&graph, &0, &4).unwrap_err();
    assert!(matches!(err, Error::UnreachablePath { .. }));

    let field = WaypointField::new(Waypoint::new(0, (0.0, 0.0)), Waypoint::new(1, (50.0, 0.0)));
    let planner = PathPlanner::new(AdjacencyConfig::default()).unwrap();
    assert!(matches!(planner.plan_field(&field), Err(Error::UnreachablePath { .. })));
}

#[test]
fn test_unknown_endpoints() {
    let graph = graph_from_edges(2, &[(0, 1, 1.0)]);
    assert!(matches!(
        Dijkstra::new().shortest_path(&graph, &0, &7),
        Err(Error::NodeNotFound(_))
    ));
    assert!(matches!(
        Dijkstra::new().shortest_path(&graph, &7, &0),
        Err(Error::NodeNotFound(_))
    ));
    assert!(matches!(
        Dijkstra::new().compute_shortest_paths(&graph, 2),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_zero_weight_self_loops_are_ignored() {
    let graph = graph_from_edges(
        3,
        &[(0, 0, 0.0), (1, 1, 0.0), (2, 2, 0.0), (0, 1, 2.0), (1, 2, 2.0)],
    );
    let path = Dijkstra::new().shortest_path(&graph, &0, &2).unwrap();
    assert_eq!(path.waypoints(), &[0, 1, 2]);
    assert_eq!(path.distance(), OrderedFloat(4.0));

    let tree = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(tree.predecessors[0], None);
    assert_eq!(tree.predecessors[1], Some(0));
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let n = rng.gen_range(2..8u32);
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(0.45) {
                    edges.push((a, b, rng.gen_range(0.0..10.0)));
                }
            }
        }
        let graph = graph_from_edges(n, &edges);
        let (start, end) = (rng.gen_range(0..n), rng.gen_range(0..n));

        let expected = brute_force_distance(&graph, start as usize, end as usize);
        match Dijkstra::new().shortest_path(&graph, &start, &end) {
            Ok(path) => {
                let expected = expected.expect("dijkstra found a path brute force did not");
                assert!((path.distance().into_inner() - expected).abs() < 1e-9);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));

                // the path uses real edges and its weights add up
                let total: f64 = path
                    .waypoints()
                    .windows(2)
                    .map(|pair| {
                        let a = graph.node_id(&pair[0]).unwrap();
                        let b = graph.node_id(&pair[1]).unwrap();
                        graph.edge_weight(a, b).unwrap().into_inner()
                    })
                    .sum();
                assert!((total - expected).abs() < 1e-9);
            }
            Err(Error::UnreachablePath { .. }) => assert_eq!(expected, None),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn test_tree_agrees_with_single_target_search() {
    let planner = PathPlanner::new(AdjacencyConfig::new(2.0, 2.0).unwrap()).unwrap();
    let field = generate_seeded_field(11, 150, 25.0, 25.0);
    let graph = planner.build_graph(&field).unwrap();

    let tree: ShortestPathTree<OrderedFloat<f64>> =
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    for target in graph.nodes() {
        let single = Dijkstra::new().shortest_path(&graph, &field.start, target.value());
        match (tree.distance(target.id()), single) {
            (Some(d), Ok(path)) => {
                assert!((d.into_inner() - path.distance().into_inner()).abs() < 1e-9);
                let ids = tree.path_to(target.id()).unwrap();
                assert_eq!(ids.first(), Some(&0));
                assert_eq!(ids.last(), Some(&target.id()));
            }
            (None, Err(Error::UnreachablePath { .. })) => {}
            (d, other) => panic!(
                "tree {:?} disagrees with search {:?}",
                d,
                other.map(|p| p.distance())
            ),
        }
    }
}

#[test]
fn test_grid_path_is_diagonal() {
    let planner = PathPlanner::new(AdjacencyConfig::new(1.0, 1.0).unwrap()).unwrap();
    let route = planner.plan_field(&generate_grid_field(6, 6, 1.0)).unwrap();

    assert_eq!(route.path.len(), 6);
    assert!((route.path.distance().into_inner() - 5.0 * 2.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_repeated_searches_are_deterministic() {
    let planner = PathPlanner::new(AdjacencyConfig::default()).unwrap();
    // a lattice has many equal-length routes, so ties matter
    let field = generate_grid_field(8, 5, 3.0);

    let first = planner.plan_field(&field).unwrap();
    for _ in 0..5 {
        let again = planner.plan(&first.graph, &field.start, &field.end).unwrap();
        assert_eq!(again, first.path);
        let rebuilt = planner.plan_field(&field).unwrap();
        assert_eq!(rebuilt.path, first.path);
    }
}

#[test]
fn test_algorithm_name() {
    let name = <Dijkstra as ShortestPathAlgorithm<u32, OrderedFloat<f64>, TestGraph>>::name(
        &Dijkstra::new(),
    );
    assert_eq!(name, "Dijkstra");
}
