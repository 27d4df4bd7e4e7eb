//! Path geometry: figures of segments with markup and SVG path text.
//!
//! A [`PathGeometry`] is an ordered list of [`PathFigure`]s. Each figure starts
//! at a point and continues through a list of [`PathSegment`]s. Geometry is
//! built incrementally through a [`GeometryContext`], serialized with
//! [`PathGeometry::to_path_string`] and parsed back with [`parse_path_string`].
//!
//! The two text dialects differ only in the fill rule prefix: the markup
//! dialect defaults to `EvenOdd` and writes `F1` for `Nonzero`, the SVG dialect
//! never writes a prefix.

use serde::{Deserialize, Serialize};

use vectorkit_core::{GeometryError, PointId};

use crate::model::PointLookup;

mod context;
mod lyon_bridge;
mod parser;
mod segment;

pub use context::{FigureHandle, GeometryContext};
pub use lyon_bridge::{from_lyon_path, to_lyon_path};
pub use parser::parse_path_string;
pub use segment::{format_point, PathSegment, PathSize, SegmentKind, SweepDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    #[default]
    EvenOdd,
    Nonzero,
}

/// Target path mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathDialect {
    Markup,
    Svg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFigure {
    pub start_point: PointId,
    pub segments: Vec<PathSegment>,
    pub is_filled: bool,
    pub is_closed: bool,
}

impl PathFigure {
    pub fn new(start_point: PointId, is_filled: bool, is_closed: bool) -> Self {
        Self {
            start_point,
            segments: Vec::new(),
            is_filled,
            is_closed,
        }
    }

    pub fn to_path_string(&self, points: &impl PointLookup) -> Result<String, GeometryError> {
        let mut out = String::from("M");
        out.push_str(&format_point(points, self.start_point)?);
        for segment in &self.segments {
            out.push_str(&segment.to_path_string(points)?);
        }
        if self.is_closed {
            out.push('z');
        }
        Ok(out)
    }

    pub fn collect_points(&self, out: &mut Vec<PointId>) {
        out.push(self.start_point);
        for segment in &self.segments {
            segment.kind.collect_points(out);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub figures: Vec<PathFigure>,
    pub fill_rule: FillRule,
}

impl PathGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_rule(fill_rule: FillRule) -> Self {
        Self {
            figures: Vec::new(),
            fill_rule,
        }
    }

    /// Opens a builder context over this geometry.
    pub fn context(&mut self) -> GeometryContext<'_> {
        GeometryContext::new(self)
    }

    pub fn to_path_string(
        &self,
        points: &impl PointLookup,
        dialect: PathDialect,
    ) -> Result<String, GeometryError> {
        let mut out = String::new();
        if dialect == PathDialect::Markup && self.fill_rule == FillRule::Nonzero {
            out.push_str("F1");
        }
        for figure in &self.figures {
            out.push_str(&figure.to_path_string(points)?);
        }
        Ok(out)
    }

    /// Appends every point handle referenced by the geometry.
    pub fn collect_points(&self, out: &mut Vec<PointId>) {
        for figure in &self.figures {
            figure.collect_points(out);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
