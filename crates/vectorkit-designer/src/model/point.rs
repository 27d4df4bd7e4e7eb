use serde::{Deserialize, Serialize};

use vectorkit_core::PointId;

use super::{DesignerShape, ShapeType};
use crate::shape_store::ShapeStore;

/// A single point placed on the drawing as a shape of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    pub point: PointId,
}

impl DesignPoint {
    pub fn new(point: PointId) -> Self {
        Self { point }
    }
}

impl DesignerShape for DesignPoint {
    fn collect_points(&self, _store: &ShapeStore, out: &mut Vec<PointId>) {
        out.push(self.point);
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Point
    }
}
