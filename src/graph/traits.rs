use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::Result;

/// Dense node handle, assigned in insertion order starting at zero
pub type NodeId = usize;

/// Trait representing a weighted graph whose nodes are keyed by value
pub trait Graph<T, W>: Debug
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a node and the connecting edge weights
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns the id assigned to a value, if the value was added
    fn node_id(&self, value: &T) -> Option<NodeId>;

    /// Returns the value stored at a node
    fn value(&self, node: NodeId) -> Option<&T>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<W>;
}

/// Trait for growing a graph. Nodes and edges are never removed.
pub trait MutableGraph<T, W>: Graph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node for `value` and returns its id.
    ///
    /// Adding a value that is already present is a no-op and returns the
    /// existing id.
    fn add_node(&mut self, value: T) -> NodeId;

    /// Connects two existing values with an undirected edge.
    ///
    /// Fails with [`crate::Error::NodeNotFound`] if either value is missing and
    /// with [`crate::Error::NegativeWeight`] for negative or NaN weights. An
    /// existing edge between the pair gets the new weight.
    fn add_edge(&mut self, a: &T, b: &T, weight: W) -> Result<()>;
}
