use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::algorithm::path::Path;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Distances and predecessors from one source to every node
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each node, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<NodeId>>,

    /// Source node ID
    pub source: NodeId,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn distance(&self, target: NodeId) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Node ids from the source to `target`, or `None` if `target` is
    /// unreachable
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<T, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathTree<W>>;

    /// Compute the shortest path between two values of the graph
    fn shortest_path(&self, graph: &G, start: &T, end: &T) -> Result<Path<T, W>>;
}
