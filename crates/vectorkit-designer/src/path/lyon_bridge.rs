//! Conversion between [`PathGeometry`] and `lyon` paths, for renderers and
//! importers that already speak lyon.

use lyon::geom::{ArcFlags, SvgArc};
use lyon::math::{point, vector, Angle, Point as LyonPoint};
use lyon::path::{Event, Path};

use vectorkit_core::{GeometryError, PointId};

use super::{PathGeometry, SegmentKind, SweepDirection};
use crate::model::{PointArena, PointLookup};

fn lyon_point(points: &impl PointLookup, id: PointId) -> Result<LyonPoint, GeometryError> {
    let (x, y) = points.require(id)?;
    Ok(point(x as f32, y as f32))
}

/// Builds a lyon path. Arcs are approximated with cubic beziers.
pub fn to_lyon_path(
    geometry: &PathGeometry,
    points: &impl PointLookup,
) -> Result<Path, GeometryError> {
    let mut builder = Path::builder();

    for figure in &geometry.figures {
        let mut current = lyon_point(points, figure.start_point)?;
        builder.begin(current);

        for segment in &figure.segments {
            match &segment.kind {
                SegmentKind::Line { point: id } => {
                    current = lyon_point(points, *id)?;
                    builder.line_to(current);
                }
                SegmentKind::Arc {
                    point: id,
                    size,
                    rotation_angle,
                    is_large_arc,
                    sweep_direction,
                } => {
                    let to = lyon_point(points, *id)?;
                    let arc = SvgArc {
                        from: current,
                        to,
                        radii: vector(size.width as f32, size.height as f32),
                        x_rotation: Angle::degrees(*rotation_angle as f32),
                        flags: ArcFlags {
                            large_arc: *is_large_arc,
                            sweep: *sweep_direction == SweepDirection::Clockwise,
                        },
                    };
                    if arc.is_straight_line() {
                        builder.line_to(to);
                    } else {
                        arc.for_each_cubic_bezier(&mut |ctrl| {
                            builder.cubic_bezier_to(ctrl.ctrl1, ctrl.ctrl2, ctrl.to);
                        });
                    }
                    current = to;
                }
                SegmentKind::CubicBezier {
                    point1,
                    point2,
                    point3,
                } => {
                    current = lyon_point(points, *point3)?;
                    builder.cubic_bezier_to(
                        lyon_point(points, *point1)?,
                        lyon_point(points, *point2)?,
                        current,
                    );
                }
                SegmentKind::QuadraticBezier { point1, point2 } => {
                    current = lyon_point(points, *point2)?;
                    builder.quadratic_bezier_to(lyon_point(points, *point1)?, current);
                }
                SegmentKind::PolyLine { points: ids } => {
                    for id in ids {
                        current = lyon_point(points, *id)?;
                        builder.line_to(current);
                    }
                }
                SegmentKind::PolyCubicBezier { points: ids } => {
                    for chunk in ids.chunks_exact(3) {
                        current = lyon_point(points, chunk[2])?;
                        builder.cubic_bezier_to(
                            lyon_point(points, chunk[0])?,
                            lyon_point(points, chunk[1])?,
                            current,
                        );
                    }
                }
                SegmentKind::PolyQuadraticBezier { points: ids } => {
                    for chunk in ids.chunks_exact(2) {
                        current = lyon_point(points, chunk[1])?;
                        builder.quadratic_bezier_to(lyon_point(points, chunk[0])?, current);
                    }
                }
            }
        }

        builder.end(figure.is_closed);
    }

    Ok(builder.build())
}

/// Replays lyon path events into a new geometry, allocating points in `points`.
pub fn from_lyon_path(path: &Path, points: &mut PointArena) -> Result<PathGeometry, GeometryError> {
    let mut geometry = PathGeometry::new();
    let mut ctx = geometry.context();
    let mut alloc = |p: LyonPoint| points.add(p.x as f64, p.y as f64);

    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                ctx.begin_figure(alloc(at), true, false);
            }
            Event::Line { to, .. } => ctx.line_to(alloc(to))?,
            Event::Quadratic { ctrl, to, .. } => {
                let ctrl = alloc(ctrl);
                ctx.quadratic_bezier_to(ctrl, alloc(to))?;
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let ctrl1 = alloc(ctrl1);
                let ctrl2 = alloc(ctrl2);
                ctx.cubic_bezier_to(ctrl1, ctrl2, alloc(to))?;
            }
            Event::End { close, .. } => {
                if close {
                    ctx.set_closed_state(true)?;
                }
            }
        }
    }

    Ok(geometry)
}
