pub mod traits;
pub mod node;
pub mod undirected;
pub mod builder;
pub mod generators;

pub use traits::{Graph, MutableGraph, NodeId};
pub use node::GraphNode;
pub use undirected::UndirectedGraph;
pub use builder::{ProximityGraphBuilder, WaypointGraph};
