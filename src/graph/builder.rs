use log::debug;
use ordered_float::OrderedFloat;

use crate::config::AdjacencyConfig;
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::undirected::UndirectedGraph;
use crate::waypoint::{Waypoint, WaypointField};
use crate::Result;

/// Graph of waypoints weighted by Euclidean distance
pub type WaypointGraph = UndirectedGraph<Waypoint, OrderedFloat<f64>>;

/// Builds waypoint graphs using the axis-aligned proximity rule.
///
/// Every unordered pair of distinct waypoints whose offsets lie within the
/// [`AdjacencyConfig`] boundaries gets one edge weighted by their Euclidean
/// distance. A waypoint is never paired with itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityGraphBuilder {
    config: AdjacencyConfig,
}

impl ProximityGraphBuilder {
    pub fn new(config: AdjacencyConfig) -> Result<Self> {
        config.validate()?;
        Ok(ProximityGraphBuilder { config })
    }

    pub fn config(&self) -> &AdjacencyConfig {
        &self.config
    }

    /// Builds a graph over start, end and the intermediate waypoints, in that
    /// insertion order
    pub fn build(&self, field: &WaypointField) -> Result<WaypointGraph> {
        self.build_from(field.iter().copied())
    }

    /// Builds a graph over an arbitrary sequence of waypoints. Repeated ids
    /// collapse into the first occurrence.
    pub fn build_from<I>(&self, waypoints: I) -> Result<WaypointGraph>
    where
        I: IntoIterator<Item = Waypoint>,
    {
        let waypoints = waypoints.into_iter();
        let mut graph = WaypointGraph::with_capacity(waypoints.size_hint().0);
        for waypoint in waypoints {
            graph.add_node(waypoint);
        }
        self.connect(&mut graph)?;

        debug!(
            "built waypoint graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Adds every proximity edge between the nodes already in `graph`
    pub fn connect(&self, graph: &mut WaypointGraph) -> Result<()> {
        let positions: Vec<_> = graph.nodes().map(|n| n.value().position()).collect();

        for (a, pa) in positions.iter().enumerate() {
            for (offset, pb) in positions[a + 1..].iter().enumerate() {
                let (dx, dy) = pa.axis_offsets(pb);
                if self.config.within(dx, dy) {
                    graph.connect(a, a + 1 + offset, OrderedFloat(pa.distance(pb)))?;
                }
            }
        }
        Ok(())
    }
}
