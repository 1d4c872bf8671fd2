pub mod traits;
pub mod search_node;
pub mod path;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
pub use search_node::SearchNode;
pub use path::Path;
