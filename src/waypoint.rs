use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::Path as FsPath;

use crate::Result;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Absolute per-axis offsets to `other`
    pub fn axis_offsets(&self, other: &Position) -> (f64, f64) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position { x, y }
    }
}

/// A waypoint: a stable identifier and a location.
///
/// Two waypoints are the same graph node exactly when their ids match; the
/// position is not part of the identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Waypoint {
    id: i32,
    position: Position,
}

impl Waypoint {
    pub fn new(id: i32, position: impl Into<Position>) -> Self {
        Waypoint {
            id,
            position: position.into(),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> i32 {
        self.id
    }

    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Waypoint {}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The point set a graph is built from: a designated start, a designated end
/// and the intermediate waypoints between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointField {
    pub start: Waypoint,
    pub end: Waypoint,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

impl WaypointField {
    pub fn new(start: Waypoint, end: Waypoint) -> Self {
        WaypointField {
            start,
            end,
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        self.waypoints.extend(waypoints);
        self
    }

    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// All points in graph insertion order: start, end, then the intermediates
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        [&self.start, &self.end].into_iter().chain(self.waypoints.iter())
    }

    /// Number of points, counting start and end
    pub fn point_count(&self) -> usize {
        self.waypoints.len() + 2
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
