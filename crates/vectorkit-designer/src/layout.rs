//! Align, distribute, stack, flip and rotate a shape selection.
//!
//! Every operator builds a [`GroupBox`] over the selection, moves points
//! through it and reports each user-visible mutation to a [`History`].
//! Operators decline to act below their minimum shape count:
//!
//! | operator     | needs          |
//! |--------------|----------------|
//! | `stack`      | at least 2     |
//! | `distribute` | more than 2    |
//! | `align`      | at least 2     |
//! | `flip`       | at least 1     |
//! | `rotate`     | at least 1     |
//! | `translate`  | at least 1     |

use nalgebra::{Matrix3, Vector2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vectorkit_core::{GeometryError, ShapeId};

use crate::boxes::{map_points, rotation_about, transform_points, GroupBox, ShapeBox};
use crate::drawing::Drawing;
use crate::history::{EditKind, EditRecord, History};
use crate::outcome::{Outcome, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributeMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignMode {
    Left,
    /// Horizontal center.
    Centered,
    Right,
    Top,
    /// Vertical center.
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipMode {
    Horizontal,
    Vertical,
}

fn too_few(operator: &str, count: usize) -> Result<Outcome, GeometryError> {
    debug!("{} skipped: {} shapes selected", operator, count);
    Ok(Outcome::Skipped(SkipReason::TooFewShapes))
}

fn moved_outcome(operator: &str, moved: usize, total: usize) -> Outcome {
    debug!("{}: moved {} of {} boxes", operator, moved, total);
    if moved == 0 {
        Outcome::Skipped(SkipReason::NothingToMove)
    } else {
        Outcome::Applied
    }
}

fn move_box<H: History + ?Sized>(
    drawing: &mut Drawing,
    shape_box: &mut ShapeBox,
    dx: f64,
    dy: f64,
    history: &mut H,
) -> bool {
    shape_box
        .move_by_with_history(drawing, dx, dy, history)
        .is_applied()
}

/// Places boxes edge to edge, in order of their leading edge.
pub fn stack<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    mode: StackMode,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.len() < 2 {
        return too_few("Stack", shapes.len());
    }
    let mut group = GroupBox::new(drawing, shapes)?;
    let boxes = &mut group.boxes;
    match mode {
        StackMode::Horizontal => boxes.sort_by(|a, b| a.bounds.left.total_cmp(&b.bounds.left)),
        StackMode::Vertical => boxes.sort_by(|a, b| a.bounds.top.total_cmp(&b.bounds.top)),
    }

    let mut offset = match mode {
        StackMode::Horizontal => boxes[0].bounds.right,
        StackMode::Vertical => boxes[0].bounds.bottom,
    };
    let mut moved = 0;
    for shape_box in boxes.iter_mut().skip(1) {
        let b = shape_box.bounds;
        let (dx, dy, extent) = match mode {
            StackMode::Horizontal => (offset - b.left, 0.0, b.width),
            StackMode::Vertical => (0.0, offset - b.top, b.height),
        };
        if move_box(drawing, shape_box, dx, dy, history) {
            moved += 1;
        }
        offset += extent;
    }
    Ok(moved_outcome("Stack", moved, boxes.len()))
}

/// Spaces the inner boxes evenly between the first and last one.
pub fn distribute<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    mode: DistributeMode,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.len() <= 2 {
        return too_few("Distribute", shapes.len());
    }
    let mut group = GroupBox::new(drawing, shapes)?;
    let bounds = group.bounds;
    let boxes = &mut group.boxes;
    let count = boxes.len();

    let (extent, total) = match mode {
        DistributeMode::Horizontal => {
            boxes.sort_by(|a, b| a.bounds.left.total_cmp(&b.bounds.left));
            (bounds.width, boxes.iter().map(|b| b.bounds.width).sum::<f64>())
        }
        DistributeMode::Vertical => {
            boxes.sort_by(|a, b| a.bounds.top.total_cmp(&b.bounds.top));
            (bounds.height, boxes.iter().map(|b| b.bounds.height).sum::<f64>())
        }
    };
    let gap = (extent - total) / (count - 1) as f64;

    let mut position = match mode {
        DistributeMode::Horizontal => boxes[0].bounds.right,
        DistributeMode::Vertical => boxes[0].bounds.bottom,
    };
    let mut moved = 0;
    for shape_box in boxes.iter_mut().take(count - 1).skip(1) {
        let b = shape_box.bounds;
        let target = position + gap;
        let (dx, dy, size) = match mode {
            DistributeMode::Horizontal => (target - b.left, 0.0, b.width),
            DistributeMode::Vertical => (0.0, target - b.top, b.height),
        };
        if move_box(drawing, shape_box, dx, dy, history) {
            moved += 1;
        }
        position = target + size;
    }
    Ok(moved_outcome("Distribute", moved, count))
}

/// Moves every box to the group's edge or center.
pub fn align<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    mode: AlignMode,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.len() < 2 {
        return too_few("Align", shapes.len());
    }
    let mut group = GroupBox::new(drawing, shapes)?;
    let g = group.bounds;

    let mut moved = 0;
    for shape_box in group.boxes.iter_mut() {
        let b = shape_box.bounds;
        let (dx, dy) = match mode {
            AlignMode::Left => (g.left - b.left, 0.0),
            AlignMode::Centered => (g.center_x - b.center_x, 0.0),
            AlignMode::Right => (g.right - b.right, 0.0),
            AlignMode::Top => (0.0, g.top - b.top),
            AlignMode::Center => (0.0, g.center_y - b.center_y),
            AlignMode::Bottom => (0.0, g.bottom - b.bottom),
        };
        if (dx != 0.0 || dy != 0.0) && move_box(drawing, shape_box, dx, dy, history) {
            moved += 1;
        }
    }
    Ok(moved_outcome("Align", moved, group.boxes.len()))
}

/// Mirrors every movable point across the group bounds, as one history step.
pub fn flip<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    mode: FlipMode,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.is_empty() {
        return too_few("Flip", 0);
    }
    let group = GroupBox::new(drawing, shapes)?;
    let points = group.movable_points(drawing);
    if points.is_empty() {
        return Ok(moved_outcome("Flip", 0, shapes.len()));
    }

    let b = group.bounds;
    let edits = match mode {
        FlipMode::Horizontal => {
            map_points(&mut drawing.points, &points, |x, y| (b.left + (b.width + b.left) - x, y))
        }
        FlipMode::Vertical => {
            map_points(&mut drawing.points, &points, |x, y| (x, b.top + (b.height + b.top) - y))
        }
    };

    let mut record = EditRecord::new(EditKind::Flip, format!("Flip {:?}", mode));
    record.edits = edits;
    debug!("Flip {:?}: {} points", mode, record.edits.len());
    history.snapshot(record);
    Ok(Outcome::Applied)
}

/// Rotates every movable point about the group center, as one history step.
pub fn rotate<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    angle_degrees: f64,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.is_empty() {
        return too_few("Rotate", 0);
    }
    let group = GroupBox::new(drawing, shapes)?;
    let points = group.movable_points(drawing);
    if points.is_empty() || angle_degrees == 0.0 {
        return Ok(moved_outcome("Rotate", 0, shapes.len()));
    }

    let b = group.bounds;
    let matrix = rotation_about(b.center_x, b.center_y, angle_degrees.to_radians());
    let mut record = EditRecord::new(EditKind::Rotate, format!("Rotate {}°", angle_degrees));
    record.edits = transform_points(&mut drawing.points, &points, &matrix);
    debug!("Rotate {}: {} points", angle_degrees, record.edits.len());
    history.snapshot(record);
    Ok(Outcome::Applied)
}

/// Moves the union of the selection's movable points by `(dx, dy)`.
///
/// Points shared between selected shapes, or between a group and a selected
/// child, move once. The whole move is one history step.
pub fn translate<H: History + ?Sized>(
    drawing: &mut Drawing,
    shapes: &[ShapeId],
    dx: f64,
    dy: f64,
    history: &mut H,
) -> Result<Outcome, GeometryError> {
    if shapes.is_empty() {
        return too_few("Translate", 0);
    }
    let group = GroupBox::new(drawing, shapes)?;
    let points = group.movable_points(drawing);
    if points.is_empty() || (dx == 0.0 && dy == 0.0) {
        return Ok(moved_outcome("Translate", 0, shapes.len()));
    }

    let matrix = Matrix3::new_translation(&Vector2::new(dx, dy));
    let mut record = EditRecord::new(EditKind::Move, format!("Move ({}, {})", dx, dy));
    record.edits = transform_points(&mut drawing.points, &points, &matrix);
    debug!("Translate ({}, {}): {} points", dx, dy, record.edits.len());
    history.snapshot(record);
    Ok(Outcome::Applied)
}
