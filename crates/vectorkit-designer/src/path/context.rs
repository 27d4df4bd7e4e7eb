use vectorkit_core::{GeometryError, PointId};

use super::{PathFigure, PathGeometry, PathSegment, PathSize, SegmentKind, SweepDirection};

/// Index of a figure inside the geometry it was begun on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureHandle(pub usize);

/// Incremental builder appending segments to the current figure.
///
/// Segment calls made before [`begin_figure`](Self::begin_figure) fail with
/// [`GeometryError::NoCurrentFigure`].
///
/// The `*_to` helpers append stroked, smooth-joined segments. Use
/// [`add_segment`](Self::add_segment) to set either flag explicitly.
#[derive(Debug)]
pub struct GeometryContext<'a> {
    geometry: &'a mut PathGeometry,
    current: Option<usize>,
}

impl<'a> GeometryContext<'a> {
    pub fn new(geometry: &'a mut PathGeometry) -> Self {
        Self {
            geometry,
            current: None,
        }
    }

    pub fn begin_figure(
        &mut self,
        start_point: PointId,
        is_filled: bool,
        is_closed: bool,
    ) -> FigureHandle {
        self.geometry
            .figures
            .push(PathFigure::new(start_point, is_filled, is_closed));
        let index = self.geometry.figures.len() - 1;
        self.current = Some(index);
        FigureHandle(index)
    }

    pub fn current_figure(&self) -> Option<FigureHandle> {
        self.current.map(FigureHandle)
    }

    fn figure_mut(&mut self) -> Result<&mut PathFigure, GeometryError> {
        self.current
            .and_then(|index| self.geometry.figures.get_mut(index))
            .ok_or(GeometryError::NoCurrentFigure)
    }

    pub fn set_closed_state(&mut self, is_closed: bool) -> Result<(), GeometryError> {
        self.figure_mut()?.is_closed = is_closed;
        Ok(())
    }

    /// Appends a segment after validating poly-segment arity.
    pub fn add_segment(
        &mut self,
        kind: SegmentKind,
        is_stroked: bool,
        is_smooth_join: bool,
    ) -> Result<(), GeometryError> {
        let figure = self.figure_mut()?;
        kind.validate()?;
        figure.segments.push(PathSegment {
            kind,
            is_stroked,
            is_smooth_join,
        });
        Ok(())
    }

    pub fn line_to(&mut self, point: PointId) -> Result<(), GeometryError> {
        self.add_segment(SegmentKind::Line { point }, true, true)
    }

    pub fn arc_to(
        &mut self,
        point: PointId,
        size: PathSize,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
    ) -> Result<(), GeometryError> {
        self.add_segment(
            SegmentKind::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
            },
            true,
            true,
        )
    }

    pub fn cubic_bezier_to(
        &mut self,
        point1: PointId,
        point2: PointId,
        point3: PointId,
    ) -> Result<(), GeometryError> {
        self.add_segment(
            SegmentKind::CubicBezier {
                point1,
                point2,
                point3,
            },
            true,
            true,
        )
    }

    pub fn quadratic_bezier_to(
        &mut self,
        point1: PointId,
        point2: PointId,
    ) -> Result<(), GeometryError> {
        self.add_segment(SegmentKind::QuadraticBezier { point1, point2 }, true, true)
    }

    pub fn poly_line_to(&mut self, points: Vec<PointId>) -> Result<(), GeometryError> {
        self.add_segment(SegmentKind::PolyLine { points }, true, true)
    }

    pub fn poly_cubic_bezier_to(&mut self, points: Vec<PointId>) -> Result<(), GeometryError> {
        self.add_segment(SegmentKind::PolyCubicBezier { points }, true, true)
    }

    pub fn poly_quadratic_bezier_to(
        &mut self,
        points: Vec<PointId>,
    ) -> Result<(), GeometryError> {
        self.add_segment(SegmentKind::PolyQuadraticBezier { points }, true, true)
    }
}
