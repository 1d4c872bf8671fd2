//! Waypoint Nav - proximity waypoint graphs and shortest-path traversal
//!
//! A set of 2D waypoints is turned into an undirected graph: two waypoints are
//! adjacent when their horizontal and vertical offsets both fall within the
//! configured boundaries, and the edge weight is their Euclidean distance.
//! Dijkstra's algorithm, driven by an indexed binary heap with decrease-key,
//! finds the shortest start-to-end path, which a [`Traveler`] then visits one
//! waypoint at a time.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod events;
pub mod graph;
pub mod planner;
pub mod traveler;
pub mod waypoint;

pub use algorithm::{
    dijkstra::Dijkstra, Path, SearchNode, ShortestPathAlgorithm, ShortestPathTree,
};
pub use config::{AdjacencyConfig, NavigatorConfig, TravelerConfig};
pub use events::{EventDispatcher, PathFoundEvent, PathTraversalCompleteEvent};
/// Re-export main types for convenient use
pub use graph::{GraphNode, NodeId, UndirectedGraph, WaypointGraph};
pub use planner::{PathPlanner, PlannedRoute, WaypointPath};
pub use traveler::{Traveler, TravelerStep, TraversalReport};
pub use waypoint::{Position, Waypoint, WaypointField};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    #[error("No path from {start} to {end}")]
    UnreachablePath { start: String, end: String },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
