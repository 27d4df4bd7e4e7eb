use smallvec::SmallVec;
use std::collections::HashSet;
use tracing::trace;

use vectorkit_core::{ShapeId, GEOMETRY_EPSILON};
use vectorkit_settings::{LineSnapMode, LineSnapSettings, LineSnapTarget};

use super::{emit_guides, remove_guides, PointFilter};
use crate::drawing::Drawing;
use crate::model::Shape;
use crate::shape_store::Layer;

/// A line the filter can snap against, with resolved endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCandidate {
    pub id: ShapeId,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl LineCandidate {
    fn endpoints(&self) -> [(f64, f64); 2] {
        [(self.x0, self.y0), (self.x1, self.y1)]
    }

    fn midpoint(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

type Candidates = SmallVec<[LineCandidate; 16]>;

fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

/// Intersection point of two segments, if both parameters lie in `[0, 1]`.
///
/// Parallel and zero-length segments never intersect.
pub fn segment_intersection(a: &LineCandidate, b: &LineCandidate) -> Option<(f64, f64)> {
    let (dax, day) = (a.x1 - a.x0, a.y1 - a.y0);
    let (dbx, dby) = (b.x1 - b.x0, b.y1 - b.y0);
    let denom = dax * dby - day * dbx;
    if denom.abs() < GEOMETRY_EPSILON {
        return None;
    }
    let (ox, oy) = (b.x0 - a.x0, b.y0 - a.y0);
    let t = (ox * dby - oy * dbx) / denom;
    let u = (ox * day - oy * dax) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some((a.x0 + t * dax, a.y0 + t * day))
}

/// Closest point to `(px, py)` on a segment, clamped to its endpoints.
pub fn nearest_on_segment(line: &LineCandidate, px: f64, py: f64) -> (f64, f64) {
    let (dx, dy) = (line.x1 - line.x0, line.y1 - line.y0);
    let len_sq = dx * dx + dy * dy;
    if len_sq < GEOMETRY_EPSILON {
        return (line.x0, line.y0);
    }
    let t = (((px - line.x0) * dx + (py - line.y0) * dy) / len_sq).clamp(0.0, 1.0);
    (line.x0 + t * dx, line.y0 + t * dy)
}

/// Snaps pointer positions to endpoints, midpoints and intersections of
/// lines, to their endpoint axes, or onto the lines themselves.
///
/// Strategies are tried in a fixed order and the first match wins:
/// point, middle, intersection, horizontal/vertical, nearest. Horizontal and
/// vertical are evaluated together and may both lock an axis.
#[derive(Debug, Clone, Default)]
pub struct LineSnapPointFilter {
    settings: LineSnapSettings,
    guides: Vec<ShapeId>,
    excluded: HashSet<ShapeId>,
    last_mode: Option<LineSnapMode>,
}

impl LineSnapPointFilter {
    pub fn new(settings: LineSnapSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &LineSnapSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: LineSnapSettings) {
        self.settings = settings;
    }

    /// Shapes (and group members) never used as candidates, e.g. the line
    /// being drawn.
    pub fn set_excluded(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.excluded = ids.into_iter().collect();
    }

    /// Mode that produced the last successful snap.
    pub fn last_mode(&self) -> Option<LineSnapMode> {
        self.last_mode
    }

    fn excluded_closure(&self, drawing: &Drawing) -> HashSet<ShapeId> {
        let mut excluded = HashSet::new();
        let mut stack: Vec<ShapeId> = self.excluded.iter().copied().collect();
        while let Some(id) = stack.pop() {
            if !excluded.insert(id) {
                continue;
            }
            if let Some(Shape::Group(group)) = drawing.shapes.get(id).map(|o| &o.shape) {
                stack.extend_from_slice(&group.shapes);
            }
        }
        excluded
    }

    /// Lines eligible for snapping, in draw order.
    pub fn candidates(&self, drawing: &Drawing) -> SmallVec<[LineCandidate; 16]> {
        let excluded = self.excluded_closure(drawing);
        let target = self.settings.target;
        drawing
            .shapes
            .iter()
            .filter(|obj| match obj.layer {
                Layer::Shapes => target.contains(LineSnapTarget::SHAPES),
                Layer::Guides => target.contains(LineSnapTarget::GUIDES),
                Layer::Working => false,
            })
            .filter(|obj| !excluded.contains(&obj.id))
            .filter_map(|obj| {
                let line = obj.shape.as_line()?;
                let (x0, y0, x1, y1) = line.segment(&drawing.points)?;
                Some(LineCandidate {
                    id: obj.id,
                    x0,
                    y0,
                    x1,
                    y1,
                })
            })
            .collect()
    }

    /// Runs the strategies in priority order without touching guides.
    fn find(&self, lines: &Candidates, px: f64, py: f64) -> Option<(f64, f64, LineSnapMode)> {
        let mode = self.settings.mode;
        let threshold = self.settings.threshold;
        let within = |x: f64, y: f64| distance(x, y, px, py) <= threshold;

        if mode.contains(LineSnapMode::POINT) {
            for line in lines {
                if let Some((x, y)) = line.endpoints().into_iter().find(|(x, y)| within(*x, *y)) {
                    return Some((x, y, LineSnapMode::POINT));
                }
            }
        }

        if mode.contains(LineSnapMode::MIDDLE) {
            for line in lines {
                let (x, y) = line.midpoint();
                if within(x, y) {
                    return Some((x, y, LineSnapMode::MIDDLE));
                }
            }
        }

        if mode.contains(LineSnapMode::INTERSECTION) {
            for (i, a) in lines.iter().enumerate() {
                for b in &lines[i + 1..] {
                    if let Some((x, y)) = segment_intersection(a, b) {
                        if within(x, y) {
                            return Some((x, y, LineSnapMode::INTERSECTION));
                        }
                    }
                }
            }
        }

        let mut locked = LineSnapMode::NONE;
        let (mut sx, mut sy) = (px, py);
        if mode.contains(LineSnapMode::HORIZONTAL) {
            if let Some((_, y)) = lines
                .iter()
                .flat_map(LineCandidate::endpoints)
                .find(|(_, y)| (py - y).abs() <= threshold)
            {
                sy = y;
                locked |= LineSnapMode::HORIZONTAL;
            }
        }
        if mode.contains(LineSnapMode::VERTICAL) {
            if let Some((x, _)) = lines
                .iter()
                .flat_map(LineCandidate::endpoints)
                .find(|(x, _)| (px - x).abs() <= threshold)
            {
                sx = x;
                locked |= LineSnapMode::VERTICAL;
            }
        }
        if !locked.is_empty() {
            return Some((sx, sy, locked));
        }

        if mode.contains(LineSnapMode::NEAREST) {
            let nearest = lines
                .iter()
                .map(|line| nearest_on_segment(line, px, py))
                .map(|(x, y)| (x, y, distance(x, y, px, py)))
                .min_by(|a, b| a.2.total_cmp(&b.2));
            if let Some((x, y, d)) = nearest {
                if d <= threshold {
                    return Some((x, y, LineSnapMode::NEAREST));
                }
            }
        }

        None
    }
}

impl PointFilter for LineSnapPointFilter {
    fn try_filter(&mut self, drawing: &mut Drawing, x: &mut f64, y: &mut f64) -> bool {
        self.clear(drawing);
        self.last_mode = None;
        if !self.settings.is_enabled || self.settings.mode.is_empty() {
            return false;
        }

        let lines = self.candidates(drawing);
        let Some((sx, sy, mode)) = self.find(&lines, *x, *y) else {
            return false;
        };

        trace!("Line snap {:?} to ({}, {})", mode, sx, sy);
        *x = sx;
        *y = sy;
        self.last_mode = Some(mode);
        if self.settings.enable_guides {
            emit_guides(drawing, &mut self.guides, sx, sy, &self.settings.guide_style);
        }
        true
    }

    fn clear(&mut self, drawing: &mut Drawing) {
        remove_guides(drawing, &mut self.guides);
    }

    fn guides(&self) -> &[ShapeId] {
        &self.guides
    }
}
