use crate::graph::node::GraphNode;
use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::{Error, Result};
use log::trace;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected weighted graph keyed by node value.
///
/// Nodes keep their insertion order, so iteration and every search built on
/// top of it are deterministic for a given input order.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Nodes in insertion order; a node's id is its index here
    nodes: Vec<GraphNode<T, W>>,

    /// Value -> node id
    index: HashMap<T, NodeId>,

    /// Number of distinct undirected edges, self-loops counted once
    edge_count: usize,
}

impl<T, W> UndirectedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Looks up the node holding `value`
    pub fn find(&self, value: &T) -> Result<&GraphNode<T, W>> {
        self.index
            .get(value)
            .map(|&id| &self.nodes[id])
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", value)))
    }

    /// Returns the node with the given id
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T, W>> {
        self.nodes.get(id)
    }

    /// Iterates over all nodes in insertion order
    pub fn nodes(&self) -> std::slice::Iter<'_, GraphNode<T, W>> {
        self.nodes.iter()
    }

    /// Returns true if a node holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks that every edge is stored with the same weight on both endpoints
    pub fn validate_symmetric(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.neighbors().all(|(neighbor, weight)| {
                self.nodes[neighbor].edge_weight(node.id()) == Some(weight)
            })
        })
    }

    /// Connects two nodes by id. Both ids must already exist.
    pub(crate) fn connect(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<()> {
        if weight < W::zero() || weight.is_nan() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        for id in [a, b] {
            if id >= self.nodes.len() {
                return Err(Error::NodeNotFound(format!("node #{}", id)));
            }
        }

        let created = self.nodes[a].set_edge(b, weight);
        if a != b {
            self.nodes[b].set_edge(a, weight);
        }
        if created {
            self.edge_count += 1;
        }
        trace!("edge {} <-> {} = {:?}", a, b, weight);
        Ok(())
    }
}

impl<T, W> Default for UndirectedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> for UndirectedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(node) = self.nodes.get(node) {
            Box::new(node.neighbors())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn node_id(&self, value: &T) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    fn value(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node).map(|n| n.value())
    }

    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<W> {
        self.nodes.get(a).and_then(|node| node.edge_weight(b))
    }
}

impl<T, W> MutableGraph<T, W> for UndirectedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, value: T) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert(value.clone(), id);
        self.nodes.push(GraphNode::new(id, value));
        id
    }

    fn add_edge(&mut self, a: &T, b: &T, weight: W) -> Result<()> {
        let from = self
            .node_id(a)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", a)))?;
        let to = self
            .node_id(b)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", b)))?;
        self.connect(from, to, weight)
    }
}
