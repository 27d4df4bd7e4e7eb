//! # VectorKit Core
//!
//! Core types shared by every VectorKit crate.
//! Provides the handle types that address points and shapes, the state flag
//! set carried by both, geometry constants, and the error types used in
//! public APIs.

pub mod constants;
pub mod error;
pub mod types;

pub use constants::{
    DEFAULT_GRID_SIZE, DEFAULT_HISTORY_DEPTH, DEFAULT_SNAP_THRESHOLD, GEOMETRY_EPSILON,
    ROTATE_BEARING_OFFSET_DEG,
};
pub use error::{Error, GeometryError, Result};
pub use types::{PointId, ShapeId, StateFlags};
