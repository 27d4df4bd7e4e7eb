use nalgebra::{Matrix3, Point2, Vector2};
use std::collections::HashSet;
use tracing::{debug, trace};

use vectorkit_core::{GeometryError, PointId, ShapeId, ROTATE_BEARING_OFFSET_DEG};

use super::{rotation_about, transform_points, Bounds, ShapeBox};
use crate::drawing::Drawing;
use crate::outcome::{Outcome, SkipReason};

/// Union bounds over a selection of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBox {
    shapes: Vec<ShapeId>,
    pub boxes: Vec<ShapeBox>,
    pub bounds: Bounds,
}

impl GroupBox {
    pub fn new(drawing: &Drawing, shapes: &[ShapeId]) -> Result<Self, GeometryError> {
        let mut group = Self {
            shapes: shapes.to_vec(),
            boxes: Vec::new(),
            bounds: Bounds::default(),
        };
        group.update(drawing, true)?;
        Ok(group)
    }

    pub fn shapes(&self) -> &[ShapeId] {
        &self.shapes
    }

    /// Shape membership. Call `update(drawing, true)` after changing it.
    pub fn shapes_mut(&mut self) -> &mut Vec<ShapeId> {
        &mut self.shapes
    }

    /// Refreshes the bounds.
    ///
    /// With `rebuild` the child boxes are re-derived from the shape list;
    /// without it only their coordinates are refreshed, so membership changes
    /// are not picked up.
    pub fn update(&mut self, drawing: &Drawing, rebuild: bool) -> Result<(), GeometryError> {
        if rebuild {
            self.boxes = self
                .shapes
                .iter()
                .map(|id| ShapeBox::new(drawing, *id))
                .collect::<Result<_, _>>()?;
            self.refresh_bounds();
        } else {
            self.refresh(drawing);
        }
        Ok(())
    }

    fn refresh(&mut self, drawing: &Drawing) {
        for shape_box in &mut self.boxes {
            shape_box.update(&drawing.points);
        }
        self.refresh_bounds();
    }

    fn refresh_bounds(&mut self) {
        let mut iter = self.boxes.iter();
        self.bounds = match iter.next() {
            Some(first) => iter.fold(first.bounds, |acc, b| acc.union(&b.bounds)),
            None => Bounds::default(),
        };
    }

    /// Distinct movable points across all child boxes, in first-seen order.
    pub fn movable_points(&self, drawing: &Drawing) -> Vec<PointId> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        for shape_box in &self.boxes {
            for id in shape_box.movable_points(drawing) {
                if seen.insert(id) {
                    points.push(id);
                }
            }
        }
        points
    }

    fn apply(
        &mut self,
        drawing: &mut Drawing,
        points: &[PointId],
        matrix: &Matrix3<f64>,
    ) -> Outcome {
        if points.is_empty() {
            return Outcome::Skipped(SkipReason::NothingToMove);
        }
        transform_points(&mut drawing.points, points, matrix);
        self.refresh(drawing);
        Outcome::Applied
    }

    pub fn translate(
        &mut self,
        drawing: &mut Drawing,
        dx: f64,
        dy: f64,
        points: &[PointId],
    ) -> Outcome {
        if dx == 0.0 && dy == 0.0 {
            return Outcome::Skipped(SkipReason::NothingToMove);
        }
        let matrix = Matrix3::new_translation(&Vector2::new(dx, dy));
        self.apply(drawing, points, &matrix)
    }

    /// Bearing from the group center to `(sx, sy)` in degrees, 0 pointing up.
    pub fn bearing(&self, sx: f64, sy: f64) -> f64 {
        let dx = sx - self.bounds.center_x;
        let dy = sy - self.bounds.center_y;
        (dy.atan2(dx).to_degrees() - ROTATE_BEARING_OFFSET_DEG).rem_euclid(360.0)
    }

    /// Rotates about the group center by the change in bearing since the last
    /// call, and stores the new bearing in `rotate_angle`.
    pub fn rotate(
        &mut self,
        drawing: &mut Drawing,
        sx: f64,
        sy: f64,
        points: &[PointId],
        rotate_angle: &mut f64,
    ) -> Outcome {
        let angle = self.bearing(sx, sy);
        let delta = angle - *rotate_angle;
        if delta == 0.0 {
            return Outcome::Skipped(SkipReason::NothingToMove);
        }
        let matrix = rotation_about(
            self.bounds.center_x,
            self.bounds.center_y,
            delta.to_radians(),
        );
        let outcome = self.apply(drawing, points, &matrix);
        if outcome.is_applied() {
            *rotate_angle = angle;
            trace!("Rotated group by {:.3} degrees", delta);
        }
        outcome
    }

    fn scale(
        &mut self,
        drawing: &mut Drawing,
        scale: Vector2<f64>,
        anchor: Point2<f64>,
        old_size: f64,
        new_size: f64,
        points: &[PointId],
    ) -> Outcome {
        if old_size <= 0.0 || new_size <= 0.0 {
            debug!("Scale skipped: size {} -> {}", old_size, new_size);
            return Outcome::Skipped(SkipReason::DegenerateExtent);
        }
        let matrix = Matrix3::new_nonuniform_scaling_wrt_point(&scale, &anchor);
        self.apply(drawing, points, &matrix)
    }

    /// Moves the top edge by `delta`, anchored at the bottom center.
    pub fn scale_top(
        &mut self,
        drawing: &mut Drawing,
        delta: f64,
        points: &[PointId],
    ) -> Outcome {
        let b = self.bounds;
        let new_size = b.height - delta;
        self.scale(
            drawing,
            Vector2::new(1.0, new_size / b.height),
            Point2::new(b.center_x, b.bottom),
            b.height,
            new_size,
            points,
        )
    }

    /// Moves the bottom edge by `delta`, anchored at the top center.
    pub fn scale_bottom(
        &mut self,
        drawing: &mut Drawing,
        delta: f64,
        points: &[PointId],
    ) -> Outcome {
        let b = self.bounds;
        let new_size = b.height + delta;
        self.scale(
            drawing,
            Vector2::new(1.0, new_size / b.height),
            Point2::new(b.center_x, b.top),
            b.height,
            new_size,
            points,
        )
    }

    /// Moves the left edge by `delta`, anchored at the right center.
    pub fn scale_left(
        &mut self,
        drawing: &mut Drawing,
        delta: f64,
        points: &[PointId],
    ) -> Outcome {
        let b = self.bounds;
        let new_size = b.width - delta;
        self.scale(
            drawing,
            Vector2::new(new_size / b.width, 1.0),
            Point2::new(b.right, b.center_y),
            b.width,
            new_size,
            points,
        )
    }

    /// Moves the right edge by `delta`, anchored at the left center.
    pub fn scale_right(
        &mut self,
        drawing: &mut Drawing,
        delta: f64,
        points: &[PointId],
    ) -> Outcome {
        let b = self.bounds;
        let new_size = b.width + delta;
        self.scale(
            drawing,
            Vector2::new(new_size / b.width, 1.0),
            Point2::new(b.left, b.center_y),
            b.width,
            new_size,
            points,
        )
    }
}
