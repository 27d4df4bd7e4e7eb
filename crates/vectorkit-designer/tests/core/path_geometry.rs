use vectorkit_core::{GeometryError, PointId};
use vectorkit_designer::{
    FillRule, PathDialect, PathGeometry, PathSize, PointArena, SegmentKind, SweepDirection,
};

fn closed_origin(fill_rule: FillRule) -> (PointArena, PathGeometry) {
    let mut arena = PointArena::new();
    let origin = arena.add(0.0, 0.0);
    let mut geometry = PathGeometry::with_fill_rule(fill_rule);
    geometry.context().begin_figure(origin, true, true);
    (arena, geometry)
}

#[test]
fn test_fill_rule_prefix() {
    let (arena, geometry) = closed_origin(FillRule::Nonzero);
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "F1M0,0z"
    );
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Svg).unwrap(),
        "M0,0z"
    );

    let (arena, geometry) = closed_origin(FillRule::EvenOdd);
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "M0,0z"
    );
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Svg).unwrap(),
        "M0,0z"
    );
}

#[test]
fn test_mixed_segments() {
    let mut arena = PointArena::new();
    let p = |arena: &mut PointArena, x: f64, y: f64| arena.add(x, y);
    let start = p(&mut arena, 0.0, 0.0);
    let l = p(&mut arena, 10.0, 0.0);
    let c1 = p(&mut arena, 10.0, 5.0);
    let c2 = p(&mut arena, 5.0, 10.0);
    let c3 = p(&mut arena, 0.0, 10.0);
    let q1 = p(&mut arena, -5.0, 5.0);
    let q2 = p(&mut arena, 0.0, 0.0);

    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, true, false);
        ctx.line_to(l).unwrap();
        ctx.cubic_bezier_to(c1, c2, c3).unwrap();
        ctx.quadratic_bezier_to(q1, q2).unwrap();
        ctx.set_closed_state(true).unwrap();
    }

    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "M0,0L10,0C10,5 5,10 0,10Q-5,5 0,0z"
    );
}

#[test]
fn test_poly_segments_join_with_spaces() {
    let mut arena = PointArena::new();
    let start = arena.add(0.0, 0.0);
    let run: Vec<PointId> = (1..=3).map(|i| arena.add(i as f64, i as f64 * 0.5)).collect();
    let quads: Vec<PointId> = (1..=4).map(|i| arena.add(i as f64, 0.0)).collect();

    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, false, false);
        ctx.poly_line_to(run).unwrap();
        ctx.poly_quadratic_bezier_to(quads).unwrap();
    }

    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Svg).unwrap(),
        "M0,0L1,0.5 2,1 3,1.5Q1,0 2,0 3,0 4,0"
    );
}

#[test]
fn test_arc_segment() {
    let mut arena = PointArena::new();
    let start = arena.add(0.0, 0.0);
    let end = arena.add(10.0, 0.0);
    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, true, false);
        ctx.arc_to(end, PathSize::new(5.0, 5.0), 0.0, false, SweepDirection::Clockwise)
            .unwrap();
    }
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "M0,0A5,5 0 0 1 10,0"
    );
}

#[test]
fn test_multiple_figures() {
    let mut arena = PointArena::new();
    let ids: Vec<PointId> = [(0.0, 0.0), (1.0, 0.0), (5.0, 5.0), (6.0, 5.0)]
        .iter()
        .map(|(x, y)| arena.add(*x, *y))
        .collect();

    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(ids[0], true, false);
        ctx.line_to(ids[1]).unwrap();
        ctx.begin_figure(ids[2], true, true);
        ctx.line_to(ids[3]).unwrap();
    }
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Svg).unwrap(),
        "M0,0L1,0M5,5L6,5z"
    );
}

#[test]
fn test_segment_flags_default_true() {
    let mut arena = PointArena::new();
    let start = arena.add(0.0, 0.0);
    let end = arena.add(1.0, 1.0);
    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, true, false);
        ctx.line_to(end).unwrap();
        ctx.add_segment(SegmentKind::Line { point: start }, false, false)
            .unwrap();
    }
    let segments = &geometry.figures[0].segments;
    assert!(segments[0].is_stroked && segments[0].is_smooth_join);
    assert!(!segments[1].is_stroked && !segments[1].is_smooth_join);
}

#[test]
fn test_arity_is_validated() {
    let mut geometry = PathGeometry::new();
    let mut ctx = geometry.context();
    assert_eq!(
        ctx.poly_cubic_bezier_to(vec![PointId(0); 3]),
        Err(GeometryError::NoCurrentFigure)
    );

    ctx.begin_figure(PointId(0), true, false);
    assert!(ctx.poly_cubic_bezier_to(vec![PointId(1); 6]).is_ok());
    assert!(matches!(
        ctx.poly_cubic_bezier_to(vec![PointId(1); 5]),
        Err(GeometryError::InvalidSegmentArity {
            count: 5,
            group: 3,
            ..
        })
    ));
    assert!(matches!(
        ctx.poly_quadratic_bezier_to(vec![PointId(1); 3]),
        Err(GeometryError::InvalidSegmentArity {
            count: 3,
            group: 2,
            ..
        })
    ));
    assert!(matches!(
        ctx.poly_line_to(Vec::new()),
        Err(GeometryError::EmptyPolySegment { .. })
    ));
}

#[test]
fn test_missing_point_is_reported() {
    let mut arena = PointArena::new();
    let start = arena.add(0.0, 0.0);
    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, true, false);
        ctx.line_to(PointId(99)).unwrap();
    }
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Svg),
        Err(GeometryError::MissingPoint(PointId(99)))
    );
}

#[test]
fn test_collect_points() {
    let mut arena = PointArena::new();
    let a = arena.add(0.0, 0.0);
    let b = arena.add(1.0, 0.0);
    let c = arena.add(2.0, 0.0);
    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(a, true, false);
        ctx.quadratic_bezier_to(b, c).unwrap();
    }
    let mut points = Vec::new();
    geometry.collect_points(&mut points);
    assert_eq!(points, vec![a, b, c]);
}
