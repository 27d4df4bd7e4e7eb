//! The drawing container: a point arena plus the shapes that reference it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vectorkit_core::{GeometryError, PointId, ShapeId, StateFlags};
use vectorkit_settings::StrokeStyle;

use crate::boxes::is_point_movable;
use crate::model::{
    dedup_points, DesignEllipse, DesignGroup, DesignLine, DesignPath, DesignPoint,
    DesignRectangle, DesignerShape, Point, PointArena, Shape,
};
use crate::path::PathGeometry;
use crate::shape_store::{DrawingObject, Layer, ShapeStore};

/// Container holding every point and shape of one diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub points: PointArena,
    pub shapes: ShapeStore,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawing {
    /// Creates an empty 800x600 drawing.
    pub fn new() -> Self {
        Self::with_size(800.0, 600.0)
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            points: PointArena::new(),
            shapes: ShapeStore::new(),
        }
    }

    /// Inserts a shape built from points the caller owns, and returns its id.
    fn insert_shape(&mut self, id: ShapeId, shape: Shape, layer: Layer) -> ShapeId {
        let mut obj = DrawingObject::new(id, shape);
        obj.layer = layer;
        self.shapes.insert(obj);
        id
    }

    fn owned_point(&mut self, owner: ShapeId, x: f64, y: f64) -> PointId {
        self.points.insert(Point::new(x, y).with_owner(owner))
    }

    pub fn add_point(&mut self, x: f64, y: f64) -> ShapeId {
        let id = self.shapes.generate_id();
        let point = self.owned_point(id, x, y);
        self.insert_shape(id, Shape::Point(DesignPoint::new(point)), Layer::Shapes)
    }

    pub fn add_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> ShapeId {
        self.add_line_on(Layer::Shapes, x0, y0, x1, y1)
    }

    /// Adds a line whose endpoints are existing points, shared with other shapes.
    pub fn add_line_between(
        &mut self,
        start: PointId,
        end: PointId,
    ) -> Result<ShapeId, GeometryError> {
        for point in [start, end] {
            if !self.points.contains(point) {
                return Err(GeometryError::MissingPoint(point));
            }
        }
        let id = self.shapes.generate_id();
        Ok(self.insert_shape(id, Shape::Line(DesignLine::new(start, end)), Layer::Shapes))
    }

    /// Adds a rectangle with its top-left corner at `(x, y)`.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeId {
        let id = self.shapes.generate_id();
        let top_left = self.owned_point(id, x, y);
        let bottom_right = self.owned_point(id, x + width, y + height);
        self.insert_shape(
            id,
            Shape::Rectangle(DesignRectangle::new(top_left, bottom_right)),
            Layer::Shapes,
        )
    }

    /// Adds an ellipse inscribed in the given rectangle.
    pub fn add_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> ShapeId {
        let id = self.shapes.generate_id();
        let top_left = self.owned_point(id, x, y);
        let bottom_right = self.owned_point(id, x + width, y + height);
        self.insert_shape(
            id,
            Shape::Ellipse(DesignEllipse::new(top_left, bottom_right)),
            Layer::Shapes,
        )
    }

    /// Adds a path shape. Points of the geometry that have no owner yet are
    /// claimed by the new shape.
    pub fn add_path(&mut self, geometry: PathGeometry) -> ShapeId {
        let id = self.shapes.generate_id();
        let mut points = Vec::new();
        geometry.collect_points(&mut points);
        for point in points {
            if let Some(p) = self.points.get_mut(point) {
                if p.owner.is_none() {
                    p.owner = Some(id);
                }
            }
        }
        self.insert_shape(id, Shape::Path(DesignPath::new(geometry)), Layer::Shapes)
    }

    /// Groups existing shapes.
    pub fn add_group(&mut self, shapes: Vec<ShapeId>) -> Result<ShapeId, GeometryError> {
        if let Some(missing) = shapes.iter().find(|id| !self.shapes.contains(**id)) {
            return Err(GeometryError::MissingShape(*missing));
        }
        let id = self.shapes.generate_id();
        Ok(self.insert_shape(id, Shape::Group(DesignGroup::new(shapes)), Layer::Shapes))
    }

    /// Adds a connector point owned by `group`.
    ///
    /// Connectors only move when their owning group is transformed.
    pub fn add_connector(
        &mut self,
        group: ShapeId,
        x: f64,
        y: f64,
    ) -> Result<PointId, GeometryError> {
        if !matches!(self.shapes.get(group).map(|o| &o.shape), Some(Shape::Group(_))) {
            return Err(GeometryError::MissingShape(group));
        }
        let point = self.points.insert(
            Point::new(x, y)
                .with_owner(group)
                .with_state(StateFlags::VISIBLE | StateFlags::CONNECTOR),
        );
        if let Some(Shape::Group(g)) = self.shapes.get_mut(group).map(|o| &mut o.shape) {
            g.connectors.push(point);
        }
        Ok(point)
    }

    /// Adds a user guide line that line snapping can target.
    pub fn add_guide(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> ShapeId {
        self.add_line_on(Layer::Guides, x0, y0, x1, y1)
    }

    /// Adds a transient line on the working layer.
    pub fn add_working_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        style: &StrokeStyle,
    ) -> ShapeId {
        let id = self.add_line_on(Layer::Working, x0, y0, x1, y1);
        if let Some(obj) = self.shapes.get_mut(id) {
            obj.style = Some(style.clone());
        }
        id
    }

    fn add_line_on(&mut self, layer: Layer, x0: f64, y0: f64, x1: f64, y1: f64) -> ShapeId {
        let id = self.shapes.generate_id();
        let start = self.owned_point(id, x0, y0);
        let end = self.owned_point(id, x1, y1);
        self.insert_shape(id, Shape::Line(DesignLine::new(start, end)), layer)
    }

    /// Removes a shape and the points it owns. Points shared from other shapes
    /// are left in place.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<DrawingObject> {
        let obj = self.shapes.remove(id)?;
        let mut points = Vec::new();
        obj.shape.collect_points(&self.shapes, &mut points);
        for point in points {
            if self.points.get(point).and_then(|p| p.owner) == Some(id) {
                self.points.remove(point);
            }
        }
        Some(obj)
    }

    /// Distinct points of a shape's closure, in first-seen order.
    pub fn shape_points(&self, id: ShapeId) -> Result<Vec<PointId>, GeometryError> {
        let obj = self.shapes.get(id).ok_or(GeometryError::MissingShape(id))?;
        let mut points = Vec::new();
        obj.shape.collect_points(&self.shapes, &mut points);
        dedup_points(&mut points);
        Ok(points)
    }

    /// Moves every distinct movable point of a shape. Returns how many moved.
    ///
    /// Uses the same filter as the box transforms: locked points, points of
    /// locked shapes and connectors owned by another shape are left alone.
    pub fn translate_shape(
        &mut self,
        id: ShapeId,
        dx: f64,
        dy: f64,
    ) -> Result<usize, GeometryError> {
        let movable: Vec<_> = self
            .shape_points(id)?
            .into_iter()
            .filter(|point| is_point_movable(self, *point, id))
            .collect();
        for point in &movable {
            if let Some(p) = self.points.get_mut(*point) {
                p.x += dx;
                p.y += dy;
            }
        }
        debug!("Translated {} by ({}, {}): {} points", id, dx, dy, movable.len());
        Ok(movable.len())
    }

    pub fn set_locked(&mut self, id: ShapeId, locked: bool) -> Result<(), GeometryError> {
        let obj = self
            .shapes
            .get_mut(id)
            .ok_or(GeometryError::MissingShape(id))?;
        obj.state.set(StateFlags::LOCKED, locked);
        Ok(())
    }

    pub fn is_locked(&self, id: ShapeId) -> bool {
        self.shapes.get(id).is_some_and(DrawingObject::is_locked)
    }

    /// Removes every shape on the working layer.
    pub fn clear_working(&mut self) {
        let ids: Vec<_> = self.shapes.iter_layer(Layer::Working).map(|o| o.id).collect();
        for id in ids {
            self.remove_shape(id);
        }
    }
}
