//! Configuration for graph construction and traversal.
//!
//! Every config type validates itself on construction; values loaded from JSON
//! go through the same checks before they are handed out.

use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;

use crate::{Error, Result};

/// Adjacency thresholds: two waypoints are connected when their horizontal
/// offset is at most `boundary_x` and their vertical offset at most
/// `boundary_y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyConfig {
    pub boundary_x: f64,
    pub boundary_y: f64,
}

impl AdjacencyConfig {
    pub fn new(boundary_x: f64, boundary_y: f64) -> Result<Self> {
        let config = AdjacencyConfig {
            boundary_x,
            boundary_y,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("boundary_x", self.boundary_x)?;
        positive("boundary_y", self.boundary_y)
    }

    /// Whether two points with the given absolute axis offsets are adjacent
    #[inline]
    pub fn within(&self, dx: f64, dy: f64) -> bool {
        dx <= self.boundary_x && dy <= self.boundary_y
    }
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            boundary_x: 3.5,
            boundary_y: 3.0,
        }
    }
}

/// Motion parameters handed to the host that moves the traveler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelerConfig {
    /// Magnitude of the impulse applied towards each new target
    pub impulse_magnitude: f64,
    /// Speed used by [`crate::Traveler::step_towards`], in units per second
    pub movement_speed: f64,
}

impl TravelerConfig {
    pub fn validate(&self) -> Result<()> {
        positive("impulse_magnitude", self.impulse_magnitude)?;
        positive("movement_speed", self.movement_speed)
    }
}

impl Default for TravelerConfig {
    fn default() -> Self {
        Self {
            impulse_magnitude: 2.0,
            movement_speed: 3.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub adjacency: AdjacencyConfig,
    #[serde(default)]
    pub traveler: TravelerConfig,
}

impl NavigatorConfig {
    pub fn validate(&self) -> Result<()> {
        self.adjacency.validate()?;
        self.traveler.validate()
    }

    /// Parses and validates a JSON configuration. Missing sections take
    /// their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NavigatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}
