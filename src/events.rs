use log::trace;
use serde::Serialize;
use std::fmt;

/// Announces a planned path and its total distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathFoundEvent {
    pub distance: f64,
}

/// Announces that a traveler reached the last waypoint of its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathTraversalCompleteEvent;

type PathFoundListener = Box<dyn FnMut(&PathFoundEvent)>;
type TraversalCompleteListener = Box<dyn FnMut(&PathTraversalCompleteEvent)>;

/// Observer registry for navigation events.
///
/// Listeners are called synchronously, in registration order, on the thread
/// that emits the event.
#[derive(Default)]
pub struct EventDispatcher {
    path_found: Vec<PathFoundListener>,
    traversal_complete: Vec<TraversalCompleteListener>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path_found_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&PathFoundEvent) + 'static,
    {
        self.path_found.push(Box::new(listener));
    }

    pub fn add_path_traversal_complete_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&PathTraversalCompleteEvent) + 'static,
    {
        self.traversal_complete.push(Box::new(listener));
    }

    pub fn emit_path_found(&mut self, event: PathFoundEvent) {
        trace!("path found: {:.3}", event.distance);
        for listener in self.path_found.iter_mut() {
            listener(&event);
        }
    }

    pub fn emit_path_traversal_complete(&mut self) {
        trace!("path traversal complete");
        let event = PathTraversalCompleteEvent;
        for listener in self.traversal_complete.iter_mut() {
            listener(&event);
        }
    }

    /// Total number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.path_found.len() + self.traversal_complete.len()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("path_found", &self.path_found.len())
            .field("traversal_complete", &self.traversal_complete.len())
            .finish()
    }
}
