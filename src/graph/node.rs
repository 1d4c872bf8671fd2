use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::traits::NodeId;

/// A graph node: one value plus its weighted adjacency
#[derive(Debug, Clone)]
pub struct GraphNode<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    id: NodeId,
    value: T,
    /// Adjacency in the order edges were first added: (neighbor, weight)
    neighbors: Vec<(NodeId, W)>,
}

impl<T, W> GraphNode<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(id: NodeId, value: T) -> Self {
        GraphNode {
            id,
            value,
            neighbors: Vec::new(),
        }
    }

    /// Returns the node's id, its position in graph insertion order
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the value this node wraps
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Neighbor ids and edge weights
    pub fn neighbors(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.neighbors.iter().copied()
    }

    /// Returns the number of edges touching this node
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Gets the weight of the edge to `neighbor` if it exists
    pub fn edge_weight(&self, neighbor: NodeId) -> Option<W> {
        self.neighbors
            .iter()
            .find(|(target, _)| *target == neighbor)
            .map(|(_, weight)| *weight)
    }

    /// Sets the weight towards `neighbor`, overwriting an existing edge.
    /// Returns true when a new edge was created.
    pub(crate) fn set_edge(&mut self, neighbor: NodeId, weight: W) -> bool {
        for edge in self.neighbors.iter_mut() {
            if edge.0 == neighbor {
                edge.1 = weight;
                return false;
            }
        }
        self.neighbors.push((neighbor, weight));
        true
    }
}
