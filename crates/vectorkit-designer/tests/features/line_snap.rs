use vectorkit_core::ShapeId;
use vectorkit_designer::{Drawing, Layer, LineSnapPointFilter, PointFilter};
use vectorkit_settings::{LineSnapMode, LineSnapSettings, LineSnapTarget, StrokeStyle};

fn filter(mode: LineSnapMode, threshold: f64) -> LineSnapPointFilter {
    LineSnapPointFilter::new(LineSnapSettings {
        mode,
        threshold,
        ..LineSnapSettings::default()
    })
}

fn snap(
    filter: &mut LineSnapPointFilter,
    drawing: &mut Drawing,
    x: f64,
    y: f64,
) -> Option<(f64, f64)> {
    let (mut x, mut y) = (x, y);
    filter
        .try_filter(drawing, &mut x, &mut y)
        .then_some((x, y))
}

fn assert_near(actual: Option<(f64, f64)>, expected: (f64, f64)) {
    let (x, y) = actual.expect("pointer should snap");
    assert!(
        (x - expected.0).abs() < 1e-9 && (y - expected.1).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        (x, y)
    );
}

#[test]
fn test_point_before_middle() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 8.0, 0.0);

    let mut both = filter(LineSnapMode::POINT | LineSnapMode::MIDDLE, 10.0);
    assert_eq!(snap(&mut both, &mut drawing, 3.0, 1.0), Some((0.0, 0.0)));
    assert_eq!(both.last_mode(), Some(LineSnapMode::POINT));

    let mut middle = filter(LineSnapMode::MIDDLE, 10.0);
    assert_eq!(snap(&mut middle, &mut drawing, 3.0, 1.0), Some((4.0, 0.0)));
    assert_eq!(middle.last_mode(), Some(LineSnapMode::MIDDLE));
}

#[test]
fn test_intersection() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 100.0, 100.0);
    drawing.add_line(0.0, 60.0, 120.0, 0.0);

    let mut f = filter(LineSnapMode::ALL, 5.0);
    assert_near(snap(&mut f, &mut drawing, 42.0, 39.0), (40.0, 40.0));
    assert_eq!(f.last_mode(), Some(LineSnapMode::INTERSECTION));
}

#[test]
fn test_horizontal_and_vertical_lock_together() {
    let mut drawing = Drawing::new();
    drawing.add_line(200.0, 300.0, 400.0, 0.0);

    let mut f = filter(LineSnapMode::ALL, 5.0);
    assert_eq!(snap(&mut f, &mut drawing, 203.0, 4.0), Some((200.0, 0.0)));
    assert_eq!(
        f.last_mode(),
        Some(LineSnapMode::HORIZONTAL | LineSnapMode::VERTICAL)
    );

    // Only one axis within reach: the other coordinate is kept.
    assert_eq!(snap(&mut f, &mut drawing, 250.0, 297.0), Some((250.0, 300.0)));
    assert_eq!(f.last_mode(), Some(LineSnapMode::HORIZONTAL));
}

#[test]
fn test_nearest_on_line() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 100.0, 100.0);

    let mut f = filter(LineSnapMode::ALL, 5.0);
    assert_near(snap(&mut f, &mut drawing, 42.0, 38.0), (40.0, 40.0));
    assert_eq!(f.last_mode(), Some(LineSnapMode::NEAREST));
}

#[test]
fn test_threshold_is_inclusive() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 50.0, 50.0);

    let mut f = filter(LineSnapMode::POINT, 5.0);
    assert_eq!(snap(&mut f, &mut drawing, 3.0, 4.0), Some((0.0, 0.0)));
    assert_eq!(snap(&mut f, &mut drawing, 3.0, 4.1), None);
}

#[test]
fn test_miss_leaves_position() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 10.0, 0.0);

    let mut f = filter(LineSnapMode::ALL, 5.0);
    let (mut x, mut y) = (300.0, 300.0);
    assert!(!f.try_filter(&mut drawing, &mut x, &mut y));
    assert_eq!((x, y), (300.0, 300.0));
    assert_eq!(f.last_mode(), None);
}

#[test]
fn test_disabled_filter() {
    let mut drawing = Drawing::new();
    drawing.add_line(0.0, 0.0, 10.0, 0.0);

    let mut f = LineSnapPointFilter::new(LineSnapSettings {
        is_enabled: false,
        ..LineSnapSettings::default()
    });
    assert_eq!(snap(&mut f, &mut drawing, 0.0, 1.0), None);

    let mut f = filter(LineSnapMode::NONE, 10.0);
    assert_eq!(snap(&mut f, &mut drawing, 0.0, 1.0), None);
}

#[test]
fn test_targets() {
    let mut drawing = Drawing::new();
    drawing.add_guide(0.0, 0.0, 100.0, 0.0);
    drawing.add_line(0.0, 200.0, 100.0, 200.0);

    let mut f = LineSnapPointFilter::new(LineSnapSettings {
        target: LineSnapTarget::SHAPES,
        ..LineSnapSettings::default()
    });
    assert_eq!(f.candidates(&drawing).len(), 1);
    assert_eq!(snap(&mut f, &mut drawing, 50.0, 1.0), None);

    let mut f = LineSnapPointFilter::new(LineSnapSettings {
        target: LineSnapTarget::GUIDES,
        ..LineSnapSettings::default()
    });
    assert_eq!(snap(&mut f, &mut drawing, 50.0, 1.0), Some((50.0, 0.0)));
    assert_eq!(f.last_mode(), Some(LineSnapMode::MIDDLE));
}

#[test]
fn test_working_lines_are_ignored() {
    let mut drawing = Drawing::new();
    drawing.add_working_line(0.0, 0.0, 100.0, 0.0, &StrokeStyle::default());

    let mut f = LineSnapPointFilter::default();
    assert!(f.candidates(&drawing).is_empty());
    assert_eq!(snap(&mut f, &mut drawing, 1.0, 1.0), None);
}

#[test]
fn test_excluded_group_members() {
    let mut drawing = Drawing::new();
    let drawn = drawing.add_line(0.0, 0.0, 100.0, 0.0);
    let group = drawing.add_group(vec![drawn]).unwrap();
    let other = drawing.add_line(0.0, 50.0, 100.0, 50.0);

    let mut f = LineSnapPointFilter::default();
    assert_eq!(f.candidates(&drawing).len(), 2);

    f.set_excluded([group]);
    let candidates = f.candidates(&drawing);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, other);
    assert_eq!(snap(&mut f, &mut drawing, 50.0, 3.0), None);

    f.set_excluded(Vec::<ShapeId>::new());
    assert_eq!(snap(&mut f, &mut drawing, 50.0, 3.0), Some((50.0, 0.0)));
}

#[test]
fn test_guides_are_replaced_and_cleared() {
    let mut drawing = Drawing::with_size(500.0, 400.0);
    drawing.add_line(0.0, 0.0, 100.0, 0.0);

    let mut f = LineSnapPointFilter::new(LineSnapSettings {
        enable_guides: true,
        ..LineSnapSettings::default()
    });
    assert_eq!(snap(&mut f, &mut drawing, 99.0, 2.0), Some((100.0, 0.0)));
    assert_eq!(f.guides().len(), 2);
    assert_eq!(drawing.shapes.iter_layer(Layer::Working).count(), 2);

    // Guides never become candidates for the next move.
    assert_eq!(f.candidates(&drawing).len(), 1);

    assert_eq!(snap(&mut f, &mut drawing, 300.0, 300.0), None);
    assert!(f.guides().is_empty());
    assert_eq!(drawing.shapes.iter_layer(Layer::Working).count(), 0);
}
