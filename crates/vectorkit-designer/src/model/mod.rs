use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vectorkit_core::{GeometryError, PointId, ShapeId, StateFlags};

use crate::shape_store::ShapeStore;

mod ellipse;
mod group;
mod line;
mod path;
mod point;
mod rectangle;

pub use ellipse::DesignEllipse;
pub use group::DesignGroup;
pub use line::DesignLine;
pub use path::DesignPath;
pub use point::DesignPoint;
pub use rectangle::DesignRectangle;

/// A mutable 2D point shared by reference (handle) among shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Shape that owns this point; connector points only move with their owner.
    pub owner: Option<ShapeId>,
    pub state: StateFlags,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            owner: None,
            state: StateFlags::DEFAULT,
        }
    }

    pub fn with_owner(mut self, owner: ShapeId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_state(mut self, state: StateFlags) -> Self {
        self.state = state;
        self
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Read access to point coordinates by handle.
pub trait PointLookup {
    fn coords(&self, id: PointId) -> Option<(f64, f64)>;

    fn require(&self, id: PointId) -> Result<(f64, f64), GeometryError> {
        self.coords(id).ok_or(GeometryError::MissingPoint(id))
    }
}

/// Owns every point of a drawing, addressed by `PointId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointArena {
    points: HashMap<PointId, Point>,
    next_id: u64,
}

impl PointArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point: Point) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.insert(id, point);
        id
    }

    /// Allocates a point with default state and no owner.
    pub fn add(&mut self, x: f64, y: f64) -> PointId {
        self.insert(Point::new(x, y))
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(&id)
    }

    pub fn get_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(&id)
    }

    pub fn remove(&mut self, id: PointId) -> Option<Point> {
        self.points.remove(&id)
    }

    /// Sets the coordinates of a point. Returns `false` if the handle is unknown.
    pub fn set(&mut self, id: PointId, x: f64, y: f64) -> bool {
        match self.points.get_mut(&id) {
            Some(p) => {
                p.x = x;
                p.y = y;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointLookup for PointArena {
    fn coords(&self, id: PointId) -> Option<(f64, f64)> {
        self.points.get(&id).map(Point::coords)
    }
}

/// Capability shared by every shape kind: enumerating its constituent points.
pub trait DesignerShape {
    /// Appends the shape's point closure to `out`. Groups recurse into their
    /// children through `store`. Duplicates are possible when points are shared.
    fn collect_points(&self, store: &ShapeStore, out: &mut Vec<PointId>);

    fn shape_type(&self) -> ShapeType;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Point,
    Line,
    Rectangle,
    Ellipse,
    Path,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(DesignPoint),
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Path(DesignPath),
    Group(DesignGroup),
}

impl DesignerShape for Shape {
    fn collect_points(&self, store: &ShapeStore, out: &mut Vec<PointId>) {
        match self {
            Shape::Point(s) => s.collect_points(store, out),
            Shape::Line(s) => s.collect_points(store, out),
            Shape::Rectangle(s) => s.collect_points(store, out),
            Shape::Ellipse(s) => s.collect_points(store, out),
            Shape::Path(s) => s.collect_points(store, out),
            Shape::Group(s) => s.collect_points(store, out),
        }
    }

    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Point(s) => s.shape_type(),
            Shape::Line(s) => s.shape_type(),
            Shape::Rectangle(s) => s.shape_type(),
            Shape::Ellipse(s) => s.shape_type(),
            Shape::Path(s) => s.shape_type(),
            Shape::Group(s) => s.shape_type(),
        }
    }
}

impl Shape {
    pub fn as_line(&self) -> Option<&DesignLine> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&DesignGroup> {
        match self {
            Shape::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// Removes repeated handles, keeping the first occurrence of each.
pub fn dedup_points(points: &mut Vec<PointId>) {
    let mut seen = std::collections::HashSet::with_capacity(points.len());
    points.retain(|id| seen.insert(*id));
}
