//! Bounding boxes over shape point sets, and the affine transforms applied
//! through them.
//!
//! A [`ShapeBox`] caches the bounds of one shape's point closure; a
//! [`GroupBox`] unions several. Bounds are never persisted: call `update`
//! whenever the underlying points move.

use nalgebra::{Matrix3, Point2};
use serde::{Deserialize, Serialize};

use vectorkit_core::{PointId, ShapeId};

use crate::drawing::Drawing;
use crate::history::PointEdit;
use crate::model::{PointArena, PointLookup};

mod group_box;
mod shape_box;

pub use group_box::GroupBox;
pub use shape_box::ShapeBox;

/// Axis-aligned bounds with derived center and extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Builds bounds from two corners in any order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            left,
            top,
            right,
            bottom,
            center_x: (left + right) / 2.0,
            center_y: (top + bottom) / 2.0,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Bounds of a coordinate set; an empty set yields a zero box at the origin.
    pub fn from_coords(coords: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut iter = coords.into_iter();
        let Some((x, y)) = iter.next() else {
            return Self::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
        for (x, y) in iter {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Bounds of the points that resolve in `points`.
    pub fn from_points(points: &impl PointLookup, ids: &[PointId]) -> Self {
        Self::from_coords(ids.iter().filter_map(|id| points.coords(*id)))
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Whether a point may be transformed as part of `parent`.
///
/// Locked points and points whose owner or `parent` is locked stay put.
/// A connector point only moves with the shape that owns it.
pub fn is_point_movable(drawing: &Drawing, point: PointId, parent: ShapeId) -> bool {
    let Some(p) = drawing.points.get(point) else {
        return false;
    };
    if p.state.is_locked() || drawing.is_locked(parent) {
        return false;
    }
    if p.owner.is_some_and(|owner| drawing.is_locked(owner)) {
        return false;
    }
    !(p.state.is_connector() && p.owner != Some(parent))
}

/// Applies `f` to each point's coordinates and returns the edits made.
pub(crate) fn map_points(
    points: &mut PointArena,
    ids: &[PointId],
    f: impl Fn(f64, f64) -> (f64, f64),
) -> Vec<PointEdit> {
    let mut edits = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(p) = points.get_mut(*id) {
            let old = (p.x, p.y);
            let new = f(p.x, p.y);
            p.x = new.0;
            p.y = new.1;
            edits.push(PointEdit {
                point: *id,
                old,
                new,
            });
        }
    }
    edits
}

/// Applies a homogeneous 2D affine matrix to each point.
pub(crate) fn transform_points(
    points: &mut PointArena,
    ids: &[PointId],
    matrix: &Matrix3<f64>,
) -> Vec<PointEdit> {
    map_points(points, ids, |x, y| {
        let p = matrix.transform_point(&Point2::new(x, y));
        (p.x, p.y)
    })
}

/// Rotation by `radians` about `(cx, cy)`.
pub fn rotation_about(cx: f64, cy: f64, radians: f64) -> Matrix3<f64> {
    let center = nalgebra::Vector2::new(cx, cy);
    Matrix3::new_translation(&center)
        * Matrix3::new_rotation(radians)
        * Matrix3::new_translation(&-center)
}
