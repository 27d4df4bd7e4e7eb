//! Handles into the point and shape arenas.
//!
//! A point may be referenced by several shapes at once (a line endpoint can be
//! the same point as a connector of the group containing it). Shapes therefore
//! hold `PointId` handles rather than owning point values, which makes "same
//! point, two shapes" explicit: two handles are the same point exactly when
//! they compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a point stored in a point arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

/// Handle to a shape stored in a shape store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point#{}", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}
