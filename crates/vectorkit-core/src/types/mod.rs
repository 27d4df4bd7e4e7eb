//! Handle and flag types.
//!
//! ## Modules
//!
//! - [`ids`]: `PointId` and `ShapeId` handles into the drawing arenas
//! - [`flags`]: `StateFlags`, the bit set carried by points and shapes

pub mod flags;
pub mod ids;

pub use flags::StateFlags;
pub use ids::{PointId, ShapeId};
