//! Pointer snapping against the grid and against existing lines.
//!
//! Filters run once per pointer move. Each evaluation first removes the guide
//! lines emitted by the previous one, so a miss leaves no stale guides on the
//! working layer.

use vectorkit_core::ShapeId;
use vectorkit_settings::StrokeStyle;

use crate::drawing::Drawing;

mod grid;
mod line;

pub use grid::{grid_round, GridSnapPointFilter};
pub use line::{nearest_on_segment, segment_intersection, LineCandidate, LineSnapPointFilter};

/// Adjusts a proposed pointer position.
pub trait PointFilter {
    /// Replaces `x`/`y` with a snapped position and returns whether it did.
    fn try_filter(&mut self, drawing: &mut Drawing, x: &mut f64, y: &mut f64) -> bool;

    /// Removes every guide this filter emitted from the drawing.
    fn clear(&mut self, drawing: &mut Drawing);

    /// Guide shapes currently on the working layer.
    fn guides(&self) -> &[ShapeId];
}

/// Emits a full-width horizontal and a full-height vertical guide through `(x, y)`.
fn emit_guides(
    drawing: &mut Drawing,
    guides: &mut Vec<ShapeId>,
    x: f64,
    y: f64,
    style: &StrokeStyle,
) {
    let (width, height) = (drawing.width, drawing.height);
    guides.push(drawing.add_working_line(0.0, y, width, y, style));
    guides.push(drawing.add_working_line(x, 0.0, x, height, style));
}

fn remove_guides(drawing: &mut Drawing, guides: &mut Vec<ShapeId>) {
    for id in guides.drain(..) {
        drawing.remove_shape(id);
    }
}
