use vectorkit_core::{GeometryError, ShapeId, StateFlags};
use vectorkit_designer::model::{DesignerShape, PointLookup, Shape, ShapeType};
use vectorkit_designer::{Drawing, Layer, PathGeometry};

#[test]
fn test_shape_kinds() {
    let mut drawing = Drawing::new();
    let point = drawing.add_point(1.0, 2.0);
    let line = drawing.add_line(0.0, 0.0, 5.0, 5.0);
    let rect = drawing.add_rectangle(0.0, 0.0, 10.0, 20.0);
    let ellipse = drawing.add_ellipse(5.0, 5.0, 4.0, 2.0);
    let group = drawing.add_group(vec![line, rect]).unwrap();

    let kind = |id: ShapeId| drawing.shapes.get(id).map(|o| o.shape.shape_type());
    assert_eq!(kind(point), Some(ShapeType::Point));
    assert_eq!(kind(line), Some(ShapeType::Line));
    assert_eq!(kind(rect), Some(ShapeType::Rectangle));
    assert_eq!(kind(ellipse), Some(ShapeType::Ellipse));
    assert_eq!(kind(group), Some(ShapeType::Group));

    assert_eq!(drawing.shapes.get(rect).unwrap().name, "Rectangle");
    assert_eq!(drawing.shapes.get(rect).unwrap().layer, Layer::Shapes);
}

#[test]
fn test_rectangle_corners() {
    let mut drawing = Drawing::new();
    let rect = drawing.add_rectangle(10.0, 20.0, 30.0, 40.0);
    let points = drawing.shape_points(rect).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(drawing.points.coords(points[0]), Some((10.0, 20.0)));
    assert_eq!(drawing.points.coords(points[1]), Some((40.0, 60.0)));
}

#[test]
fn test_group_closure_is_deduplicated() {
    let mut drawing = Drawing::new();
    let rect = drawing.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let corners = drawing.shape_points(rect).unwrap();
    let diagonal = drawing.add_line_between(corners[0], corners[1]).unwrap();
    let group = drawing.add_group(vec![rect, diagonal]).unwrap();

    // Raw enumeration sees the shared corners twice.
    let mut raw = Vec::new();
    let obj = drawing.shapes.get(group).unwrap();
    obj.shape.collect_points(&drawing.shapes, &mut raw);
    assert_eq!(raw.len(), 4);

    assert_eq!(drawing.shape_points(group).unwrap(), corners);
}

#[test]
fn test_nested_groups() {
    let mut drawing = Drawing::new();
    let a = drawing.add_line(0.0, 0.0, 1.0, 0.0);
    let b = drawing.add_line(2.0, 0.0, 3.0, 0.0);
    let inner = drawing.add_group(vec![a]).unwrap();
    let outer = drawing.add_group(vec![inner, b]).unwrap();
    let connector = drawing.add_connector(outer, 9.0, 9.0).unwrap();

    let points = drawing.shape_points(outer).unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points.last(), Some(&connector));
}

#[test]
fn test_missing_shape_and_point() {
    let mut drawing = Drawing::new();
    assert_eq!(
        drawing.shape_points(ShapeId(42)),
        Err(GeometryError::MissingShape(ShapeId(42)))
    );
    assert_eq!(
        drawing.add_group(vec![ShapeId(7)]),
        Err(GeometryError::MissingShape(ShapeId(7)))
    );

    let line = drawing.add_line(0.0, 0.0, 1.0, 1.0);
    let points = drawing.shape_points(line).unwrap();
    drawing.remove_shape(line);
    assert_eq!(
        drawing.add_line_between(points[0], points[1]),
        Err(GeometryError::MissingPoint(points[0]))
    );
}

#[test]
fn test_lock_flags() {
    let mut drawing = Drawing::new();
    let rect = drawing.add_rectangle(0.0, 0.0, 10.0, 10.0);
    assert!(!drawing.is_locked(rect));

    drawing.set_locked(rect, true).unwrap();
    assert!(drawing.is_locked(rect));
    let state = drawing.shapes.get(rect).unwrap().state;
    assert!(state.contains(StateFlags::LOCKED | StateFlags::VISIBLE));

    drawing.set_locked(rect, false).unwrap();
    assert!(!drawing.is_locked(rect));
}

#[test]
fn test_path_points_are_claimed() {
    let mut drawing = Drawing::new();
    let start = drawing.points.add(0.0, 0.0);
    let end = drawing.points.add(5.0, 5.0);
    let mut geometry = PathGeometry::new();
    {
        let mut ctx = geometry.context();
        ctx.begin_figure(start, true, false);
        ctx.line_to(end).unwrap();
    }
    let path = drawing.add_path(geometry);

    assert_eq!(drawing.points.get(start).unwrap().owner, Some(path));
    assert!(matches!(
        drawing.shapes.get(path).map(|o| &o.shape),
        Some(Shape::Path(_))
    ));

    drawing.remove_shape(path);
    assert!(drawing.points.is_empty());
}

#[test]
fn test_drawing_serde() {
    let mut drawing = Drawing::with_size(320.0, 200.0);
    let line = drawing.add_line(0.0, 0.0, 10.0, 10.0);
    drawing.add_guide(0.0, 50.0, 320.0, 50.0);

    let json = serde_json::to_string(&drawing).unwrap();
    let restored: Drawing = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.width, 320.0);
    assert_eq!(restored.shapes.len(), 2);
    assert_eq!(
        restored.shape_points(line).unwrap(),
        drawing.shape_points(line).unwrap()
    );
    assert_eq!(restored.shapes.iter_layer(Layer::Guides).count(), 1);
}
