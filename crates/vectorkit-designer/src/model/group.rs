use serde::{Deserialize, Serialize};

use vectorkit_core::{PointId, ShapeId};

use super::{DesignerShape, ShapeType};
use crate::shape_store::ShapeStore;

/// A group of child shapes plus the connector points the group itself owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignGroup {
    pub shapes: Vec<ShapeId>,
    pub connectors: Vec<PointId>,
}

impl DesignGroup {
    pub fn new(shapes: Vec<ShapeId>) -> Self {
        Self {
            shapes,
            connectors: Vec::new(),
        }
    }
}

impl DesignerShape for DesignGroup {
    fn collect_points(&self, store: &ShapeStore, out: &mut Vec<PointId>) {
        // Children that were removed from the store contribute nothing.
        for id in &self.shapes {
            if let Some(obj) = store.get(*id) {
                obj.shape.collect_points(store, out);
            }
        }
        out.extend_from_slice(&self.connectors);
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Group
    }
}
