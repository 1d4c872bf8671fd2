use serde::Serialize;
use std::fmt::Debug;
use num_traits::{Float, Zero};

/// A start-to-end path and its total weight. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<T, W> {
    waypoints: Vec<T>,
    distance: W,
}

impl<T, W> Path<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(waypoints: Vec<T>, distance: W) -> Self {
        debug_assert!(!waypoints.is_empty());
        Path {
            waypoints,
            distance,
        }
    }

    /// The values along the path, start first
    pub fn waypoints(&self) -> &[T] {
        &self.waypoints
    }

    /// Total edge weight from start to end
    pub fn distance(&self) -> W {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.waypoints.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.waypoints.last()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.waypoints.iter()
    }
}

impl<'a, T, W> IntoIterator for &'a Path<T, W> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
