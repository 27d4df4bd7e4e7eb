//! # VectorKit
//!
//! The geometry core of an interactive vector diagram editor:
//! - Path geometry (figures of segments) with markup and SVG path text
//! - Shape and group bounding boxes with move/scale/rotate transforms
//! - Align, distribute, stack, flip and rotate layout operators with undo history
//! - Grid and line snapping of pointer positions, with visual guides
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-core** - Identifiers, state flags, constants, errors
//! 2. **vectorkit-settings** - Snapping configuration and config file persistence
//! 3. **vectorkit-designer** - Point arena, shapes, paths, boxes, layout, snapping, history
//! 4. **vectorkit** - This crate, re-exporting the others

pub use vectorkit_designer as designer;
pub use vectorkit_settings as settings;

pub use vectorkit_core::{
    Error, GeometryError, PointId, Result, ShapeId, StateFlags, ROTATE_BEARING_OFFSET_DEG,
};

pub use vectorkit_settings::{
    Config, GridSnapMode, GridSnapSettings, LineSnapMode, LineSnapSettings, LineSnapTarget,
    SettingsError, StrokeStyle,
};

pub use vectorkit_designer::{
    AlignMode, Bounds, DesignerState, DistributeMode, Drawing, EditKind, EditRecord, FillRule,
    FlipMode, GeometryContext, GridSnapPointFilter, GroupBox, History, LineSnapPointFilter,
    Outcome, PathDialect, PathFigure, PathGeometry, PathSegment, Point, PointArena, PointFilter,
    Shape, ShapeBox, SkipReason, StackMode, UndoRedoManager,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
