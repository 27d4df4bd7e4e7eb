//! Storage for the drawing objects of a [`Drawing`](crate::Drawing).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vectorkit_core::{ShapeId, StateFlags};
use vectorkit_settings::StrokeStyle;

use crate::model::{DesignerShape, Shape, ShapeType};

/// Layer a drawing object lives on.
///
/// Snap filters only ever read `Shapes` and `Guides`; they write their
/// transient guide lines to `Working`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layer {
    #[default]
    Shapes,
    Guides,
    Working,
}

/// A shape placed on the drawing together with its editor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: ShapeId,
    pub name: String,
    pub shape: Shape,
    pub state: StateFlags,
    pub style: Option<StrokeStyle>,
    pub layer: Layer,
}

impl DrawingObject {
    /// Creates a new drawing object on the `Shapes` layer.
    pub fn new(id: ShapeId, shape: Shape) -> Self {
        let name = match shape.shape_type() {
            ShapeType::Point => "Point",
            ShapeType::Line => "Line",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Path => "Path",
            ShapeType::Group => "Group",
        }
        .to_string();

        Self {
            id,
            name,
            shape,
            state: StateFlags::DEFAULT,
            style: None,
            layer: Layer::Shapes,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }
}

/// Shapes keyed by id, iterated in insertion (draw) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, DrawingObject>,
    draw_order: Vec<ShapeId>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, obj: DrawingObject) {
        let id = obj.id;
        if self.shapes.insert(id, obj).is_none() {
            self.draw_order.push(id);
        }
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }

    pub fn get(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(&id)
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<DrawingObject> {
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            self.draw_order.retain(|other| *other != id);
        }
        removed
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates objects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawingObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Iterates the objects of one layer in draw order.
    pub fn iter_layer(&self, layer: Layer) -> impl Iterator<Item = &DrawingObject> {
        self.iter().filter(move |obj| obj.layer == layer)
    }
}
