use nalgebra::{Matrix3, Vector2};
use tracing::trace;

use vectorkit_core::{GeometryError, PointId, ShapeId};

use super::{is_point_movable, transform_points, Bounds};
use crate::drawing::Drawing;
use crate::history::{EditKind, EditRecord, History};
use crate::model::PointLookup;
use crate::outcome::{Outcome, SkipReason};

/// Bounds of a single shape's point closure.
///
/// The point list is captured once at construction; coordinates are read
/// live on every [`update`](Self::update).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBox {
    pub shape: ShapeId,
    pub points: Vec<PointId>,
    pub bounds: Bounds,
}

impl ShapeBox {
    pub fn new(drawing: &Drawing, shape: ShapeId) -> Result<Self, GeometryError> {
        let points = drawing.shape_points(shape)?;
        for id in &points {
            drawing.points.require(*id)?;
        }
        let bounds = Bounds::from_points(&drawing.points, &points);
        Ok(Self {
            shape,
            points,
            bounds,
        })
    }

    /// Recomputes the bounds from current point coordinates.
    pub fn update(&mut self, points: &impl PointLookup) {
        self.bounds = Bounds::from_points(points, &self.points);
    }

    /// Points of this box that pass the movability filter.
    pub fn movable_points(&self, drawing: &Drawing) -> Vec<PointId> {
        self.points
            .iter()
            .copied()
            .filter(|id| is_point_movable(drawing, *id, self.shape))
            .collect()
    }

    pub fn move_by(&mut self, drawing: &mut Drawing, dx: f64, dy: f64) -> Outcome {
        self.move_points(drawing, dx, dy).0
    }

    /// Moves the box and records the move as one history snapshot.
    pub fn move_by_with_history<H: History + ?Sized>(
        &mut self,
        drawing: &mut Drawing,
        dx: f64,
        dy: f64,
        history: &mut H,
    ) -> Outcome {
        let (outcome, record) = self.move_points(drawing, dx, dy);
        if outcome.is_applied() {
            history.snapshot(record);
        }
        outcome
    }

    fn move_points(&mut self, drawing: &mut Drawing, dx: f64, dy: f64) -> (Outcome, EditRecord) {
        let mut record = EditRecord::new(EditKind::Move, format!("Move {}", self.shape));
        if dx == 0.0 && dy == 0.0 {
            return (Outcome::Skipped(SkipReason::NothingToMove), record);
        }
        let movable = self.movable_points(drawing);
        if movable.is_empty() {
            return (Outcome::Skipped(SkipReason::NothingToMove), record);
        }

        let matrix = Matrix3::new_translation(&Vector2::new(dx, dy));
        record.edits = transform_points(&mut drawing.points, &movable, &matrix);
        self.update(&drawing.points);
        trace!("Moved {} by ({}, {})", self.shape, dx, dy);
        (Outcome::Applied, record)
    }
}
