use vectorkit_core::GeometryError;
use vectorkit_designer::model::PointLookup;
use vectorkit_designer::{
    parse_path_string, FillRule, PathDialect, PathGeometry, PointArena, SegmentKind,
    SweepDirection,
};

fn parse(text: &str, dialect: PathDialect) -> (PointArena, PathGeometry) {
    let mut arena = PointArena::new();
    let geometry = parse_path_string(text, &mut arena, dialect).unwrap();
    (arena, geometry)
}

fn round_trip(text: &str, dialect: PathDialect) -> String {
    let (arena, geometry) = parse(text, dialect);
    geometry.to_path_string(&arena, dialect).unwrap()
}

fn parse_error(text: &str) -> (usize, String) {
    let mut arena = PointArena::new();
    arena.add(1.0, 1.0);
    let err = parse_path_string(text, &mut arena, PathDialect::Markup).unwrap_err();
    // Points allocated before the error are released.
    assert_eq!(arena.len(), 1, "points leaked parsing {:?}", text);
    match err {
        GeometryError::Parse { position, reason } => (position, reason),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_round_trips() {
    for text in [
        "M0,0z",
        "F1M0,0L10,0 20,10C1,2 3,4 5,6z",
        "M0,0L10,0C10,5 5,10 0,10Q-5,5 0,0z",
        "M0,0Q1,0 2,0 3,0 4,0",
        "M0,0A5,5 30 1 0 10,0",
        "M0,0L1,0M5,5L6,5z",
        "M-2.5,0.001L0.125,-7",
    ] {
        assert_eq!(round_trip(text, PathDialect::Markup), text);
    }
}

#[test]
fn test_exponent_numbers() {
    let (arena, geometry) = parse("M-1.5e1,.5 L2E2,+3", PathDialect::Markup);
    assert_eq!(arena.coords(geometry.figures[0].start_point), Some((-15.0, 0.5)));
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "M-15,0.5L200,3"
    );
}

#[test]
fn test_svg_dialect() {
    let (arena, geometry) = parse("M0,0 L5,5 z", PathDialect::Svg);
    assert_eq!(geometry.fill_rule, FillRule::EvenOdd);
    assert_eq!(geometry.to_path_string(&arena, PathDialect::Svg).unwrap(), "M0,0L5,5z");

    let mut arena = PointArena::new();
    let err = parse_path_string("F1M0,0", &mut arena, PathDialect::Svg).unwrap_err();
    assert!(matches!(err, GeometryError::Parse { position: 0, .. }));
}

#[test]
fn test_fill_rule_prefix() {
    let (_, geometry) = parse("F1 M0,0", PathDialect::Markup);
    assert_eq!(geometry.fill_rule, FillRule::Nonzero);

    let (arena, geometry) = parse("F0M1,1z", PathDialect::Markup);
    assert_eq!(geometry.fill_rule, FillRule::EvenOdd);
    assert_eq!(geometry.to_path_string(&arena, PathDialect::Markup).unwrap(), "M1,1z");
}

#[test]
fn test_move_with_extra_pairs() {
    assert_eq!(round_trip("M0,0 10,0", PathDialect::Markup), "M0,0L10,0");
    assert_eq!(
        round_trip("M0,0 10,0 10,10", PathDialect::Markup),
        "M0,0L10,0 10,10"
    );
}

#[test]
fn test_segment_kinds() {
    let (arena, geometry) = parse("M0,0 L1,1 L2,2 3,3 C1,1 2,2 3,3 Q1,1 2,2", PathDialect::Markup);
    let figure = &geometry.figures[0];
    assert!(figure.is_filled);
    assert!(!figure.is_closed);
    assert_eq!(arena.coords(figure.start_point), Some((0.0, 0.0)));

    let kinds: Vec<_> = figure.segments.iter().map(|s| s.kind.name()).collect();
    assert_eq!(
        kinds,
        vec![
            "LineSegment",
            "PolyLineSegment",
            "CubicBezierSegment",
            "QuadraticBezierSegment"
        ]
    );
    assert!(figure.segments.iter().all(|s| s.is_stroked && s.is_smooth_join));
}

#[test]
fn test_arc_flags() {
    let (arena, geometry) = parse("M0,0 A5,4 15 11 10,0", PathDialect::Markup);
    let segment = &geometry.figures[0].segments[0];
    match &segment.kind {
        SegmentKind::Arc {
            point,
            size,
            rotation_angle,
            is_large_arc,
            sweep_direction,
        } => {
            assert_eq!(arena.coords(*point), Some((10.0, 0.0)));
            assert_eq!((size.width, size.height), (5.0, 4.0));
            assert_eq!(*rotation_angle, 15.0);
            assert!(*is_large_arc);
            assert_eq!(*sweep_direction, SweepDirection::Clockwise);
        }
        other => panic!("expected an arc, got {:?}", other),
    }
    assert_eq!(
        geometry.to_path_string(&arena, PathDialect::Markup).unwrap(),
        "M0,0A5,4 15 1 1 10,0"
    );
}

#[test]
fn test_repeated_arc_groups() {
    let (_, geometry) = parse("M0,0 A5,5 0 0 1 10,0 5,5 0 0 1 20,0", PathDialect::Markup);
    let segments = &geometry.figures[0].segments;
    assert_eq!(segments.len(), 2);
    assert!(segments
        .iter()
        .all(|s| matches!(s.kind, SegmentKind::Arc { .. })));
}

#[test]
fn test_empty_input() {
    let (arena, geometry) = parse("  ", PathDialect::Markup);
    assert!(geometry.is_empty());
    assert!(arena.is_empty());
}

#[test]
fn test_parse_errors() {
    let (position, reason) = parse_error("M0,0 m1,1");
    assert_eq!(position, 5);
    assert!(reason.contains("relative"), "{}", reason);

    let (position, reason) = parse_error("M0,0 X");
    assert_eq!(position, 5);
    assert!(reason.contains("unexpected"), "{}", reason);

    assert_eq!(parse_error("M0,0 L").0, 5);
    assert_eq!(parse_error("M0,0 L1,").0, 8);
    assert_eq!(parse_error("M0,0 A5,5 0 2 0 1,1").0, 12);
    assert_eq!(parse_error("F2M0,0").0, 0);

    let (position, reason) = parse_error("M0,0 C1,1 2,2");
    assert_eq!(position, 5);
    assert!(reason.contains("multiple of 3"), "{}", reason);

    let (position, reason) = parse_error("L1,1");
    assert_eq!(position, 0);
    assert!(reason.contains("No current figure"), "{}", reason);
}
