use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::NodeId;

/// Per-node state for one shortest-path run.
///
/// A fresh set is created for every search and dropped once the path has
/// been extracted; it is never shared between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode<W>
where
    W: Float + Zero + Debug + Copy,
{
    node: NodeId,
    /// Best known distance from the start, infinite until reached
    pub distance: W,
    /// Node this one was reached from on the best known path
    pub previous: Option<NodeId>,
}

impl<W> SearchNode<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an unreached search node
    pub fn new(node: NodeId) -> Self {
        SearchNode {
            node,
            distance: W::infinity(),
            previous: None,
        }
    }

    /// Creates the search node for the start of a search
    pub fn start(node: NodeId) -> Self {
        SearchNode {
            node,
            distance: W::zero(),
            previous: None,
        }
    }

    /// The graph node this state belongs to
    #[inline(always)]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[inline(always)]
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }

    /// Records a shorter path through `previous`. Returns false if
    /// `distance` is not an improvement.
    pub fn relax(&mut self, distance: W, previous: NodeId) -> bool {
        if distance < self.distance {
            self.distance = distance;
            self.previous = Some(previous);
            true
        } else {
            false
        }
    }
}
