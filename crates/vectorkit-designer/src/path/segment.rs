//! Path segments: one drawing primitive within a figure.

use serde::{Deserialize, Serialize};

use vectorkit_core::{GeometryError, PointId};

use crate::model::PointLookup;

/// Radii of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathSize {
    pub width: f64,
    pub height: f64,
}

impl PathSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Counterclockwise,
    Clockwise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    Line {
        point: PointId,
    },
    Arc {
        point: PointId,
        size: PathSize,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
    },
    CubicBezier {
        point1: PointId,
        point2: PointId,
        point3: PointId,
    },
    QuadraticBezier {
        point1: PointId,
        point2: PointId,
    },
    PolyLine {
        points: Vec<PointId>,
    },
    PolyCubicBezier {
        points: Vec<PointId>,
    },
    PolyQuadraticBezier {
        points: Vec<PointId>,
    },
}

impl SegmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Line { .. } => "LineSegment",
            SegmentKind::Arc { .. } => "ArcSegment",
            SegmentKind::CubicBezier { .. } => "CubicBezierSegment",
            SegmentKind::QuadraticBezier { .. } => "QuadraticBezierSegment",
            SegmentKind::PolyLine { .. } => "PolyLineSegment",
            SegmentKind::PolyCubicBezier { .. } => "PolyCubicBezierSegment",
            SegmentKind::PolyQuadraticBezier { .. } => "PolyQuadraticBezierSegment",
        }
    }

    /// Checks the point count of poly segments.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let (points, group) = match self {
            SegmentKind::PolyLine { points } => (points, 1),
            SegmentKind::PolyCubicBezier { points } => (points, 3),
            SegmentKind::PolyQuadraticBezier { points } => (points, 2),
            _ => return Ok(()),
        };
        if points.is_empty() {
            return Err(GeometryError::EmptyPolySegment { kind: self.name() });
        }
        if points.len() % group != 0 {
            return Err(GeometryError::InvalidSegmentArity {
                kind: self.name(),
                count: points.len(),
                group,
            });
        }
        Ok(())
    }

    /// Appends the point handles this segment references.
    pub fn collect_points(&self, out: &mut Vec<PointId>) {
        match self {
            SegmentKind::Line { point } | SegmentKind::Arc { point, .. } => out.push(*point),
            SegmentKind::CubicBezier {
                point1,
                point2,
                point3,
            } => out.extend([*point1, *point2, *point3]),
            SegmentKind::QuadraticBezier { point1, point2 } => out.extend([*point1, *point2]),
            SegmentKind::PolyLine { points }
            | SegmentKind::PolyCubicBezier { points }
            | SegmentKind::PolyQuadraticBezier { points } => out.extend_from_slice(points),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub kind: SegmentKind,
    pub is_stroked: bool,
    pub is_smooth_join: bool,
}

impl PathSegment {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            is_stroked: true,
            is_smooth_join: true,
        }
    }

    /// Textual form, shared by the markup and SVG dialects.
    pub fn to_path_string(&self, points: &impl PointLookup) -> Result<String, GeometryError> {
        let mut out = String::new();
        match &self.kind {
            SegmentKind::Line { point } => {
                out.push('L');
                out.push_str(&format_point(points, *point)?);
            }
            SegmentKind::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
            } => {
                out.push_str(&format!(
                    "A{},{} {} {} {} {}",
                    size.width,
                    size.height,
                    rotation_angle,
                    u8::from(*is_large_arc),
                    u8::from(*sweep_direction == SweepDirection::Clockwise),
                    format_point(points, *point)?
                ));
            }
            SegmentKind::CubicBezier {
                point1,
                point2,
                point3,
            } => {
                out.push('C');
                out.push_str(&format_points(points, &[*point1, *point2, *point3])?);
            }
            SegmentKind::QuadraticBezier { point1, point2 } => {
                out.push('Q');
                out.push_str(&format_points(points, &[*point1, *point2])?);
            }
            SegmentKind::PolyLine { points: ids } => {
                out.push('L');
                out.push_str(&format_points(points, ids)?);
            }
            SegmentKind::PolyCubicBezier { points: ids } => {
                out.push('C');
                out.push_str(&format_points(points, ids)?);
            }
            SegmentKind::PolyQuadraticBezier { points: ids } => {
                out.push('Q');
                out.push_str(&format_points(points, ids)?);
            }
        }
        Ok(out)
    }
}

/// Formats a point as `"{x},{y}"` with no rounding.
pub fn format_point(points: &impl PointLookup, id: PointId) -> Result<String, GeometryError> {
    let (x, y) = points.require(id)?;
    Ok(format!("{},{}", x, y))
}

fn format_points(points: &impl PointLookup, ids: &[PointId]) -> Result<String, GeometryError> {
    let parts = ids
        .iter()
        .map(|id| format_point(points, *id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" "))
}
