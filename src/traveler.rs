use log::{debug, info};

use crate::config::TravelerConfig;
use crate::events::{EventDispatcher, PathFoundEvent};
use crate::planner::WaypointPath;
use crate::waypoint::{Position, Waypoint};
use crate::Result;

/// Outcome of a completed traversal
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalReport {
    /// Total distance of the traversed path
    pub distance: f64,
    /// Intermediate waypoints of the path (neither start nor end), in path
    /// order. The host removes these once the traversal is over.
    pub visited: Vec<Waypoint>,
}

/// Result of an arrival signal
#[derive(Debug, Clone, PartialEq)]
pub enum TravelerStep {
    /// The signal was not for the current target
    Ignored,
    /// The current target was reached and the next one selected
    Advanced {
        reached: Waypoint,
        next: Waypoint,
        /// Whether `reached` is an intermediate waypoint
        intermediate: bool,
    },
    /// The last waypoint was reached
    Completed(TraversalReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TravelState {
    Ready,
    Traveling,
    Complete,
}

/// Walks a planned path one waypoint at a time.
///
/// The traveler does not move anything itself: the host reads the current
/// target (or the impulse from [`heading`](Traveler::heading)), moves its
/// entity, and reports contact with a waypoint through
/// [`on_target_reached`](Traveler::on_target_reached).
#[derive(Debug, Clone)]
pub struct Traveler {
    path: WaypointPath,
    config: TravelerConfig,
    target: usize,
    state: TravelState,
}

impl Traveler {
    /// Creates a traveler for `path`. Fails with
    /// [`crate::Error::InvalidConfig`] if `config` does not validate.
    pub fn new(path: WaypointPath, config: TravelerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Traveler {
            path,
            config,
            target: 0,
            state: TravelState::Ready,
        })
    }

    /// Begins the traversal and announces the path. Calling it again has no
    /// effect.
    pub fn start(&mut self, events: &mut EventDispatcher) {
        if self.state != TravelState::Ready {
            return;
        }
        self.state = TravelState::Traveling;
        debug!(
            "traveler starting on {} waypoints, first target {:?}",
            self.path.len(),
            self.current_target().map(Waypoint::id)
        );
        events.emit_path_found(PathFoundEvent {
            distance: self.distance(),
        });
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    /// Total distance of the path being travelled
    pub fn distance(&self) -> f64 {
        self.path.distance().into_inner()
    }

    pub fn is_traveling(&self) -> bool {
        self.state == TravelState::Traveling
    }

    pub fn is_complete(&self) -> bool {
        self.state == TravelState::Complete
    }

    /// Index of the current target within the path
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// The waypoint the traveler is heading to, `None` once complete
    pub fn current_target(&self) -> Option<&Waypoint> {
        match self.state {
            TravelState::Complete => None,
            _ => self.path.get(self.target),
        }
    }

    pub fn target_position(&self) -> Option<Position> {
        self.current_target().map(Waypoint::position)
    }

    /// Impulse to apply at `from` to head for the current target: the unit
    /// direction scaled by the configured magnitude. Zero when there is no
    /// target or `from` already is the target.
    pub fn heading(&self, from: Position) -> (f64, f64) {
        let target = match self.target_position() {
            Some(target) => target,
            None => return (0.0, 0.0),
        };
        let (dx, dy) = (target.x - from.x, target.y - from.y);
        let length = dx.hypot(dy);
        if length <= f64::EPSILON {
            return (0.0, 0.0);
        }
        let scale = self.config.impulse_magnitude / length;
        (dx * scale, dy * scale)
    }

    /// Moves `from` towards the current target at the configured speed for
    /// `dt` seconds without overshooting
    pub fn step_towards(&self, from: Position, dt: f64) -> Position {
        let target = match self.target_position() {
            Some(target) => target,
            None => return from,
        };
        let remaining = from.distance(&target);
        let max_step = self.config.movement_speed * dt.max(0.0);
        if remaining <= max_step || remaining <= f64::EPSILON {
            return target;
        }
        let t = max_step / remaining;
        Position::new(
            from.x + (target.x - from.x) * t,
            from.y + (target.y - from.y) * t,
        )
    }

    /// Handles contact with waypoint `id`.
    ///
    /// Only contact with the current target counts; anything else, including
    /// repeated signals after completion, is ignored. Reaching the last
    /// waypoint emits [`crate::PathTraversalCompleteEvent`] exactly once.
    pub fn on_target_reached(&mut self, id: i32, events: &mut EventDispatcher) -> TravelerStep {
        if self.state != TravelState::Traveling {
            return TravelerStep::Ignored;
        }
        let reached = match self.path.get(self.target) {
            Some(waypoint) if waypoint.id() == id => *waypoint,
            _ => return TravelerStep::Ignored,
        };

        if self.target + 1 < self.path.len() {
            let intermediate = self.is_intermediate(self.target);
            self.target += 1;
            let next = self.path.waypoints()[self.target];
            debug!("reached waypoint {}, next target {}", reached.id(), next.id());
            return TravelerStep::Advanced {
                reached,
                next,
                intermediate,
            };
        }

        self.state = TravelState::Complete;
        let visited: Vec<Waypoint> = (0..self.path.len())
            .filter(|&i| self.is_intermediate(i))
            .map(|i| self.path.waypoints()[i])
            .collect();
        info!(
            "traversal complete at waypoint {}, {} intermediate waypoints visited",
            reached.id(),
            visited.len()
        );
        events.emit_path_traversal_complete();

        TravelerStep::Completed(TraversalReport {
            distance: self.distance(),
            visited,
        })
    }

    fn is_intermediate(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.path.len()
    }
}
