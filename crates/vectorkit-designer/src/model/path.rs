use serde::{Deserialize, Serialize};

use vectorkit_core::PointId;

use super::{DesignerShape, ShapeType};
use crate::path::PathGeometry;
use crate::shape_store::ShapeStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPath {
    pub geometry: PathGeometry,
}

impl DesignPath {
    pub fn new(geometry: PathGeometry) -> Self {
        Self { geometry }
    }
}

impl DesignerShape for DesignPath {
    fn collect_points(&self, _store: &ShapeStore, out: &mut Vec<PointId>) {
        self.geometry.collect_points(out);
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Path
    }
}
