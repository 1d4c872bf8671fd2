use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::path::Path;
use crate::algorithm::search_node::SearchNode;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::PriorityWorkList;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a decrease-key work list
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the relaxation loop from `source`.
    ///
    /// Every node starts in the work list; popping a node finalizes it. The
    /// loop stops early once `target` is finalized or the smallest remaining
    /// distance is infinite.
    fn search<T, W, G>(
        &self,
        graph: &G,
        source: NodeId,
        target: Option<NodeId>,
    ) -> Vec<SearchNode<W>>
    where
        T: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<T, W>,
    {
        let n = graph.node_count();
        let mut search_nodes: Vec<SearchNode<W>> = (0..n)
            .map(|id| {
                if id == source {
                    SearchNode::start(id)
                } else {
                    SearchNode::new(id)
                }
            })
            .collect();

        let mut work_list = PriorityWorkList::with_capacity(n);
        for search_node in &search_nodes {
            work_list.push(search_node.node(), search_node.distance);
        }

        let mut finalized = 0usize;
        while let Some((current, distance)) = work_list.pop() {
            finalized += 1;
            if Some(current) == target {
                break;
            }
            if !distance.is_finite() {
                // Everything left is in another component
                break;
            }

            for (neighbor, weight) in graph.neighbors(current) {
                if neighbor == current || !work_list.contains(&neighbor) {
                    continue;
                }
                let candidate = distance + weight;
                if search_nodes[neighbor].relax(candidate, current) {
                    trace!("relaxed {} via {} to {:?}", neighbor, current, candidate);
                    work_list.decrease_key(&neighbor, candidate);
                }
            }
        }

        debug!("dijkstra finalized {} of {} nodes", finalized, n);
        search_nodes
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathTree<W>> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(format!("node #{}", source)));
        }

        let search_nodes = self.search::<T, W, G>(graph, source, None);

        Ok(ShortestPathTree {
            distances: search_nodes
                .iter()
                .map(|s| s.is_reached().then_some(s.distance))
                .collect(),
            predecessors: search_nodes.iter().map(|s| s.previous).collect(),
            source,
        })
    }

    fn shortest_path(&self, graph: &G, start: &T, end: &T) -> Result<Path<T, W>> {
        let source = graph
            .node_id(start)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", start)))?;
        let target = graph
            .node_id(end)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", end)))?;

        let search_nodes = self.search::<T, W, G>(graph, source, Some(target));
        let end_node = &search_nodes[target];
        if !end_node.is_reached() {
            return Err(Error::UnreachablePath {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }

        // Walk the predecessor chain back to the start, then flip it
        let mut ids = vec![target];
        let mut previous = end_node.previous;
        while let Some(id) = previous {
            ids.push(id);
            previous = search_nodes[id].previous;
        }
        ids.reverse();

        let waypoints = ids
            .into_iter()
            .map(|id| {
                graph
                    .value(id)
                    .cloned()
                    .ok_or_else(|| Error::NodeNotFound(format!("node #{}", id)))
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Path::new(waypoints, end_node.distance))
    }
}
