//! # VectorKit Designer
//!
//! The geometry engine behind the editor: shapes built from shared points,
//! vector path geometry, bounding boxes with affine transforms, layout
//! operators with undo history, and pointer snapping.
//!
//! ## Core Components
//!
//! - **Model**: a [`PointArena`] owning every point, and [`Shape`] variants
//!   (point, line, rectangle, ellipse, path, group) holding point handles
//! - **Path**: [`PathGeometry`] figures and segments, a [`GeometryContext`]
//!   builder, markup/SVG path text and a lyon bridge
//! - **Boxes**: [`ShapeBox`] and [`GroupBox`] bounds with translate, scale
//!   and rotate transforms over movable points
//! - **Layout**: align, distribute, stack, flip and rotate a selection
//! - **Snap**: [`GridSnapPointFilter`] and [`LineSnapPointFilter`]
//! - **History**: [`EditRecord`]s replayed by an [`UndoRedoManager`]
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── Drawing (points + shapes on layers)
//!   ├── UndoRedoManager (edit records)
//!   └── Snap filters (write guides to the working layer)
//!
//! Layout operators
//!   └── GroupBox / ShapeBox (bounds + matrix transforms)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_designer::{layout, AlignMode, Drawing, NullHistory};
//!
//! let mut drawing = Drawing::new();
//! let a = drawing.add_rectangle(0.0, 0.0, 10.0, 10.0);
//! let b = drawing.add_rectangle(30.0, 20.0, 10.0, 10.0);
//! let outcome = layout::align(&mut drawing, &[a, b], AlignMode::Left, &mut NullHistory).unwrap();
//! assert!(outcome.is_applied());
//! ```

pub mod boxes;
pub mod designer_state;
pub mod drawing;
pub mod history;
pub mod layout;
pub mod model;
pub mod outcome;
pub mod path;
pub mod shape_store;
pub mod snap;

pub use boxes::{is_point_movable, Bounds, GroupBox, ShapeBox};
pub use designer_state::DesignerState;
pub use drawing::Drawing;
pub use history::{
    EditKind, EditRecord, History, HistoryTransaction, NullHistory, PointEdit, UndoRedoManager,
};
pub use layout::{AlignMode, DistributeMode, FlipMode, StackMode};
pub use model::{
    DesignEllipse, DesignGroup, DesignLine, DesignPath, DesignPoint, DesignRectangle,
    DesignerShape, Point, PointArena, PointLookup, Shape, ShapeType,
};
pub use outcome::{Outcome, SkipReason};
pub use path::{
    from_lyon_path, parse_path_string, to_lyon_path, FigureHandle, FillRule, GeometryContext,
    PathDialect, PathFigure, PathGeometry, PathSegment, PathSize, SegmentKind, SweepDirection,
};
pub use shape_store::{DrawingObject, Layer, ShapeStore};
pub use snap::{grid_round, GridSnapPointFilter, LineSnapPointFilter, PointFilter};
