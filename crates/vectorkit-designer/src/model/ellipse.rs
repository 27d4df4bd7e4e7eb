use serde::{Deserialize, Serialize};

use vectorkit_core::PointId;

use super::{DesignerShape, ShapeType};
use crate::shape_store::ShapeStore;

/// Ellipse inscribed in the rectangle spanned by two corner points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub top_left: PointId,
    pub bottom_right: PointId,
}

impl DesignEllipse {
    pub fn new(top_left: PointId, bottom_right: PointId) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl DesignerShape for DesignEllipse {
    fn collect_points(&self, _store: &ShapeStore, out: &mut Vec<PointId>) {
        out.push(self.top_left);
        out.push(self.bottom_right);
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ellipse
    }
}
