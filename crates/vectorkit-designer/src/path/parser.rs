//! Reader for the absolute-coordinate path mini-language written by
//! [`PathGeometry::to_path_string`](super::PathGeometry::to_path_string).

use tracing::trace;

use vectorkit_core::{GeometryError, PointId};

use super::{FillRule, GeometryContext, PathDialect, PathGeometry, PathSize, SweepDirection};
use crate::model::PointArena;

/// Parses path text into a geometry, allocating its points in `points`.
///
/// Supports `F0`/`F1` (markup dialect only), `M`, `L`, `C`, `Q`, `A` and `z`.
/// A single `L` point becomes a line segment, longer runs a poly line; `C` and
/// `Q` are split the same way. Extra coordinate pairs after `M` are implicit
/// line segments. On error no points are left behind in the arena.
pub fn parse_path_string(
    text: &str,
    points: &mut PointArena,
    dialect: PathDialect,
) -> Result<PathGeometry, GeometryError> {
    let mut allocated = Vec::new();
    let result = parse_into(text, points, dialect, &mut allocated);
    if result.is_err() {
        for id in allocated {
            points.remove(id);
        }
    }
    result
}

fn parse_error(position: usize, reason: impl Into<String>) -> GeometryError {
    GeometryError::Parse {
        position,
        reason: reason.into(),
    }
}

fn parse_into(
    text: &str,
    points: &mut PointArena,
    dialect: PathDialect,
    allocated: &mut Vec<PointId>,
) -> Result<PathGeometry, GeometryError> {
    let mut cursor = Cursor::new(text);
    let mut geometry = PathGeometry::new();

    cursor.skip_separators();
    if dialect == PathDialect::Markup && cursor.peek() == Some(b'F') {
        let position = cursor.pos;
        cursor.advance();
        geometry.fill_rule = match cursor.peek() {
            Some(b'0') => FillRule::EvenOdd,
            Some(b'1') => FillRule::Nonzero,
            _ => return Err(parse_error(position, "expected F0 or F1")),
        };
        cursor.advance();
    }

    let mut ctx = geometry.context();
    let mut alloc = |x: f64, y: f64| {
        let id = points.add(x, y);
        allocated.push(id);
        id
    };

    loop {
        cursor.skip_separators();
        let Some(command) = cursor.peek() else {
            break;
        };
        let position = cursor.pos;
        cursor.advance();
        let at = |e: GeometryError| parse_error(position, e.to_string());

        match command {
            b'M' => {
                let (x, y) = cursor.pair()?;
                ctx.begin_figure(alloc(x, y), true, false);
                let rest = cursor.points(&mut alloc)?;
                if !rest.is_empty() {
                    push_lines(&mut ctx, rest).map_err(at)?;
                }
            }
            b'L' => {
                let run = cursor.points(&mut alloc)?;
                if run.is_empty() {
                    return Err(parse_error(position, "L requires a point"));
                }
                push_lines(&mut ctx, run).map_err(at)?;
            }
            b'C' => {
                let run = cursor.points(&mut alloc)?;
                if run.len() == 3 {
                    ctx.cubic_bezier_to(run[0], run[1], run[2]).map_err(at)?;
                } else {
                    ctx.poly_cubic_bezier_to(run).map_err(at)?;
                }
            }
            b'Q' => {
                let run = cursor.points(&mut alloc)?;
                if run.len() == 2 {
                    ctx.quadratic_bezier_to(run[0], run[1]).map_err(at)?;
                } else {
                    ctx.poly_quadratic_bezier_to(run).map_err(at)?;
                }
            }
            b'A' => loop {
                let (width, height) = cursor.pair()?;
                let rotation_angle = cursor.number()?;
                let is_large_arc = cursor.flag()?;
                let sweep_direction = if cursor.flag()? {
                    SweepDirection::Clockwise
                } else {
                    SweepDirection::Counterclockwise
                };
                let (x, y) = cursor.pair()?;
                ctx.arc_to(
                    alloc(x, y),
                    PathSize::new(width, height),
                    rotation_angle,
                    is_large_arc,
                    sweep_direction,
                )
                .map_err(at)?;
                if !cursor.at_number() {
                    break;
                }
            },
            b'z' | b'Z' => ctx.set_closed_state(true).map_err(at)?,
            c if c.is_ascii_lowercase() => {
                return Err(parse_error(
                    position,
                    format!("relative command '{}' is not supported", c as char),
                ));
            }
            c => {
                return Err(parse_error(
                    position,
                    format!("unexpected character '{}'", c as char),
                ));
            }
        }
    }

    trace!("Parsed path with {} figures", geometry.figures.len());
    Ok(geometry)
}

fn push_lines(ctx: &mut GeometryContext<'_>, run: Vec<PointId>) -> Result<(), GeometryError> {
    if run.len() == 1 {
        ctx.line_to(run[0])
    } else {
        ctx.poly_line_to(run)
    }
}

struct Cursor<'s> {
    text: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn new(text: &'s str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c == b',' || c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn at_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.peek(), Some(c) if c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.'))
    }

    fn number(&mut self) -> Result<f64, GeometryError> {
        self.skip_separators();
        let start = self.pos;
        let bytes = self.text.as_bytes();
        let mut end = start;
        if matches!(bytes.get(end), Some(b'-' | b'+')) {
            end += 1;
        }
        while matches!(bytes.get(end), Some(c) if c.is_ascii_digit() || *c == b'.') {
            end += 1;
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'-' | b'+')) {
                exp += 1;
            }
            if matches!(bytes.get(exp), Some(c) if c.is_ascii_digit()) {
                while matches!(bytes.get(exp), Some(c) if c.is_ascii_digit()) {
                    exp += 1;
                }
                end = exp;
            }
        }
        let value = self.text[start..end]
            .parse::<f64>()
            .map_err(|_| parse_error(start, "expected number"))?;
        self.pos = end;
        Ok(value)
    }

    fn pair(&mut self) -> Result<(f64, f64), GeometryError> {
        Ok((self.number()?, self.number()?))
    }

    fn flag(&mut self) -> Result<bool, GeometryError> {
        self.skip_separators();
        let value = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(parse_error(self.pos, "expected arc flag 0 or 1")),
        };
        self.advance();
        Ok(value)
    }

    fn points(
        &mut self,
        alloc: &mut impl FnMut(f64, f64) -> PointId,
    ) -> Result<Vec<PointId>, GeometryError> {
        let mut run = Vec::new();
        while self.at_number() {
            let (x, y) = self.pair()?;
            run.push(alloc(x, y));
        }
        Ok(run)
    }
}
