use serde::{Deserialize, Serialize};

use vectorkit_core::PointId;

use super::{DesignerShape, PointLookup, ShapeType};
use crate::shape_store::ShapeStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLine {
    pub start: PointId,
    pub end: PointId,
}

impl DesignLine {
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// Resolves both endpoints as `(x0, y0, x1, y1)`.
    pub fn segment(&self, points: &impl PointLookup) -> Option<(f64, f64, f64, f64)> {
        let (x0, y0) = points.coords(self.start)?;
        let (x1, y1) = points.coords(self.end)?;
        Some((x0, y0, x1, y1))
    }

    pub fn length(&self, points: &impl PointLookup) -> Option<f64> {
        let (x0, y0, x1, y1) = self.segment(points)?;
        Some((x1 - x0).hypot(y1 - y0))
    }
}

impl DesignerShape for DesignLine {
    fn collect_points(&self, _store: &ShapeStore, out: &mut Vec<PointId>) {
        out.push(self.start);
        out.push(self.end);
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }
}
