//! Error handling for VectorKit
//!
//! Provides error types for the geometry layers:
//! - Geometry errors (path building, segment arity, path text parsing)
//! - A unified error type for public APIs
//!
//! Degenerate geometry (zero-extent boxes, zero-length lines) is not an error:
//! operations decline to mutate state instead. Errors are reserved for
//! precondition violations and malformed input.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::{PointId, ShapeId};

/// Geometry error type
///
/// Represents precondition violations and malformed input detected while
/// building, serializing or parsing path geometry and shapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment was appended before any figure was begun
    #[error("No current figure: begin_figure must be called before adding segments")]
    NoCurrentFigure,

    /// A poly segment point count is not a multiple of its group size
    #[error("Invalid {kind} point count {count}: must be a multiple of {group}")]
    InvalidSegmentArity {
        /// The segment kind name.
        kind: &'static str,
        /// The number of points supplied.
        count: usize,
        /// The required group size.
        group: usize,
    },

    /// A poly segment was given no points
    #[error("Empty {kind}: at least one point group is required")]
    EmptyPolySegment {
        /// The segment kind name.
        kind: &'static str,
    },

    /// A point handle does not resolve in the point arena
    #[error("Missing point: {0}")]
    MissingPoint(PointId),

    /// A shape handle does not resolve in the shape store
    #[error("Missing shape: {0}")]
    MissingShape(ShapeId),

    /// Path text could not be parsed
    #[error("Path parse error at {position}: {reason}")]
    Parse {
        /// Byte offset into the input.
        position: usize,
        /// The reason the input was rejected.
        reason: String,
    },
}

/// Main error type for VectorKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
