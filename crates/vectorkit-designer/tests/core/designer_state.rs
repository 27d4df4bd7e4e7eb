use vectorkit_core::{GeometryError, ShapeId};
use vectorkit_designer::model::PointLookup;
use vectorkit_designer::{
    AlignMode, DesignerState, DistributeMode, FlipMode, Layer, Outcome, PointFilter, SkipReason,
    StackMode,
};
use vectorkit_settings::{Config, LineSnapMode};

fn state_with_boxes() -> (DesignerState, Vec<ShapeId>) {
    let mut state = DesignerState::default();
    let ids = vec![
        state.drawing.add_rectangle(0.0, 0.0, 10.0, 10.0),
        state.drawing.add_rectangle(40.0, 20.0, 10.0, 10.0),
        state.drawing.add_rectangle(100.0, 5.0, 10.0, 10.0),
    ];
    state.select(&ids).unwrap();
    (state, ids)
}

fn all_coords(state: &DesignerState, ids: &[ShapeId]) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    for id in ids {
        for point in state.drawing.shape_points(*id).unwrap() {
            coords.push(state.drawing.points.coords(point).unwrap());
        }
    }
    coords
}

#[test]
fn test_designer_state_new() {
    let state = DesignerState::default();
    assert!(state.drawing.shapes.is_empty());
    assert!(state.selected().is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

#[test]
fn test_select_rejects_missing() {
    let (mut state, _) = state_with_boxes();
    assert_eq!(
        state.select(&[ShapeId(99)]),
        Err(GeometryError::MissingShape(ShapeId(99)))
    );
    assert_eq!(state.selected().len(), 3);
    state.clear_selection();
    assert!(state.selected().is_empty());
}

#[test]
fn test_align_undoes_in_one_step() {
    let (mut state, ids) = state_with_boxes();
    let before = all_coords(&state, &ids);

    assert_eq!(state.align_selected(AlignMode::Top), Ok(Outcome::Applied));
    assert!(state.is_modified);
    assert_eq!(state.history.undo_depth(), 1);

    assert_eq!(state.undo(), Some("Align Top".to_string()));
    let after = all_coords(&state, &ids);
    assert_eq!(before, after);

    assert!(state.redo().is_some());
    assert!(!state.can_redo());
}

#[test]
fn test_layout_shortcuts() {
    let (mut state, ids) = state_with_boxes();
    assert!(state.stack_selected(StackMode::Horizontal).unwrap().is_applied());
    assert!(state
        .distribute_selected(DistributeMode::Vertical)
        .unwrap()
        .is_applied());
    assert!(state.flip_selected(FlipMode::Vertical).unwrap().is_applied());
    assert!(state.rotate_selected(45.0).unwrap().is_applied());
    assert!(state.move_selected(1.0, 1.0).unwrap().is_applied());
    assert_eq!(state.history.undo_depth(), 5);

    state.select(&ids[..1]).unwrap();
    assert_eq!(
        state.align_selected(AlignMode::Left),
        Ok(Outcome::Skipped(SkipReason::TooFewShapes))
    );
    assert_eq!(state.history.undo_depth(), 5);
}

#[test]
fn test_filter_pointer_prefers_lines() {
    let mut state = DesignerState::default();
    state.drawing.add_line(0.0, 0.0, 100.0, 0.0);

    // Near the line's start: the endpoint wins over the 15 unit grid.
    assert_eq!(state.filter_pointer(2.0, 3.0), (0.0, 0.0, true));
    assert_eq!(state.line_filter.last_mode(), Some(LineSnapMode::POINT));

    // Far from every line: the grid rounds.
    assert_eq!(state.filter_pointer(52.0, 200.0), (45.0, 195.0, true));
    assert_eq!(state.line_filter.last_mode(), None);
}

#[test]
fn test_guides_are_cleared() {
    let mut config = Config::default();
    config.grid.enable_guides = true;
    config.line.enable_guides = true;
    let mut state = DesignerState::new(&config);
    state.drawing.add_line(0.0, 0.0, 100.0, 0.0);

    state.filter_pointer(1.0, 1.0);
    assert_eq!(state.drawing.shapes.iter_layer(Layer::Working).count(), 2);
    state.filter_pointer(300.0, 300.0);
    assert_eq!(state.drawing.shapes.iter_layer(Layer::Working).count(), 2);
    assert_eq!(state.grid_filter.guides().len(), 2);

    state.clear_guides();
    assert_eq!(state.drawing.shapes.iter_layer(Layer::Working).count(), 0);
}

#[test]
fn test_apply_config() {
    let mut state = DesignerState::default();
    let mut config = Config::default();
    config.history_depth = 7;
    config.line.is_enabled = false;
    config.grid.grid_size_x = 50.0;
    state.apply_config(&config);

    assert_eq!(state.history.max_depth(), 7);
    state.drawing.add_line(0.0, 0.0, 100.0, 0.0);
    let (x, _, snapped) = state.filter_pointer(30.0, 1.0);
    assert!(snapped);
    assert_eq!(x, 50.0);
}

#[test]
fn test_move_selected_moves_shared_corner_once() {
    let mut state = DesignerState::default();
    let rect = state.drawing.add_rectangle(0.0, 0.0, 10.0, 10.0);
    let corners = state.drawing.shape_points(rect).unwrap();
    let line = state.drawing.add_line_between(corners[0], corners[1]).unwrap();
    state.select(&[rect, line]).unwrap();

    assert_eq!(state.move_selected(5.0, 0.0), Ok(Outcome::Applied));
    assert_eq!(state.drawing.points.coords(corners[0]), Some((5.0, 0.0)));
    assert_eq!(state.drawing.points.coords(corners[1]), Some((15.0, 10.0)));
    assert_eq!(state.history.undo_depth(), 1);

    assert!(state.undo().is_some());
    assert_eq!(state.drawing.points.coords(corners[0]), Some((0.0, 0.0)));
    assert_eq!(state.drawing.points.coords(corners[1]), Some((10.0, 10.0)));
    assert!(!state.can_undo());
}

#[test]
fn test_move_selected_group_and_child() {
    let mut state = DesignerState::default();
    let line = state.drawing.add_line(0.0, 0.0, 10.0, 0.0);
    let ends = state.drawing.shape_points(line).unwrap();
    let group = state.drawing.add_group(vec![line]).unwrap();
    let connector = state.drawing.add_connector(group, 5.0, 5.0).unwrap();
    state.select(&[group, line]).unwrap();

    assert_eq!(state.move_selected(5.0, 0.0), Ok(Outcome::Applied));
    assert_eq!(state.drawing.points.coords(ends[0]), Some((5.0, 0.0)));
    assert_eq!(state.drawing.points.coords(ends[1]), Some((15.0, 0.0)));
    assert_eq!(state.drawing.points.coords(connector), Some((10.0, 5.0)));
    assert_eq!(state.history.undo_depth(), 1);

    assert!(state.undo().is_some());
    assert_eq!(state.drawing.points.coords(ends[0]), Some((0.0, 0.0)));
    assert_eq!(state.drawing.points.coords(connector), Some((5.0, 5.0)));
}

#[test]
fn test_move_selected_zero_offset_is_skipped() {
    let (mut state, _) = state_with_boxes();
    assert_eq!(
        state.move_selected(0.0, 0.0),
        Ok(Outcome::Skipped(SkipReason::NothingToMove))
    );
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}
