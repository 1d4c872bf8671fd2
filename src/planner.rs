use log::{info, warn};
use ordered_float::OrderedFloat;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Path, ShortestPathAlgorithm};
use crate::config::AdjacencyConfig;
use crate::graph::{Graph, ProximityGraphBuilder, WaypointGraph};
use crate::waypoint::{Waypoint, WaypointField};
use crate::{Error, Result};

/// Shortest path over a waypoint graph
pub type WaypointPath = Path<Waypoint, OrderedFloat<f64>>;

/// A graph together with the path planned over it
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub graph: WaypointGraph,
    pub path: WaypointPath,
}

/// Builds waypoint graphs and plans shortest paths over them.
///
/// The planner owns no graph; callers build one (or let
/// [`plan_field`](PathPlanner::plan_field) build it) and pass it in by
/// reference, so a single graph can serve any number of independent searches.
#[derive(Debug, Clone)]
pub struct PathPlanner<A = Dijkstra> {
    builder: ProximityGraphBuilder,
    algorithm: A,
}

impl PathPlanner<Dijkstra> {
    pub fn new(config: AdjacencyConfig) -> Result<Self> {
        Self::with_algorithm(config, Dijkstra::new())
    }
}

impl<A> PathPlanner<A>
where
    A: ShortestPathAlgorithm<Waypoint, OrderedFloat<f64>, WaypointGraph>,
{
    pub fn with_algorithm(config: AdjacencyConfig, algorithm: A) -> Result<Self> {
        Ok(PathPlanner {
            builder: ProximityGraphBuilder::new(config)?,
            algorithm,
        })
    }

    pub fn config(&self) -> &AdjacencyConfig {
        self.builder.config()
    }

    pub fn build_graph(&self, field: &WaypointField) -> Result<WaypointGraph> {
        self.builder.build(field)
    }

    /// Plans the shortest path from `start` to `end` over `graph`
    pub fn plan(
        &self,
        graph: &WaypointGraph,
        start: &Waypoint,
        end: &Waypoint,
    ) -> Result<WaypointPath> {
        match self.algorithm.shortest_path(graph, start, end) {
            Ok(path) => {
                info!(
                    "{}: path {} -> {} through {} waypoints, distance {:.3}",
                    self.algorithm.name(),
                    start.id(),
                    end.id(),
                    path.len(),
                    path.distance().into_inner()
                );
                Ok(path)
            }
            Err(err @ Error::UnreachablePath { .. }) => {
                warn!(
                    "{}: waypoint {} is unreachable from {} ({} nodes, {} edges)",
                    self.algorithm.name(),
                    end.id(),
                    start.id(),
                    graph.node_count(),
                    graph.edge_count()
                );
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Builds the graph for `field` and plans from its start to its end
    pub fn plan_field(&self, field: &WaypointField) -> Result<PlannedRoute> {
        let graph = self.build_graph(field)?;
        let path = self.plan(&graph, &field.start, &field.end)?;
        Ok(PlannedRoute { graph, path })
    }
}
