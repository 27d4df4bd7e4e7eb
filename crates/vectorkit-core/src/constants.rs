//! Geometry and editing constants.

/// Offset subtracted from the screen-space bearing of the rotate handle, in degrees.
///
/// With a y-down coordinate system this makes a pointer straight above the
/// rotation center read as 0°.
pub const ROTATE_BEARING_OFFSET_DEG: f64 = 270.0;

/// Default grid cell size used when no configuration is loaded.
pub const DEFAULT_GRID_SIZE: f64 = 15.0;

/// Default distance within which a line snap candidate matches.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 10.0;

/// Default number of undo steps kept by the history manager.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Tolerance below which a length is treated as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-12;
