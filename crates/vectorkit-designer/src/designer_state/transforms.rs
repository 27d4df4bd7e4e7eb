use vectorkit_core::{GeometryError, ShapeId};

use super::DesignerState;
use crate::drawing::Drawing;
use crate::history::UndoRedoManager;
use crate::layout::{self, AlignMode, DistributeMode, FlipMode, StackMode};
use crate::outcome::Outcome;

impl DesignerState {
    /// Runs an operator over the selection as a single undo step.
    fn run_batched<F>(&mut self, description: String, op: F) -> Result<Outcome, GeometryError>
    where
        F: FnOnce(&mut Drawing, &[ShapeId], &mut UndoRedoManager) -> Result<Outcome, GeometryError>,
    {
        self.history.begin_batch(description);
        let result = op(&mut self.drawing, &self.selection, &mut self.history);
        self.history.end_batch();
        if matches!(result, Ok(Outcome::Applied)) {
            self.is_modified = true;
        }
        result
    }

    /// Moves the selection by one offset; shared points move once.
    pub fn move_selected(&mut self, dx: f64, dy: f64) -> Result<Outcome, GeometryError> {
        self.run_batched(format!("Move ({}, {})", dx, dy), |drawing, shapes, history| {
            layout::translate(drawing, shapes, dx, dy, history)
        })
    }

    pub fn align_selected(&mut self, mode: AlignMode) -> Result<Outcome, GeometryError> {
        self.run_batched(format!("Align {:?}", mode), |drawing, shapes, history| {
            layout::align(drawing, shapes, mode, history)
        })
    }

    pub fn distribute_selected(&mut self, mode: DistributeMode) -> Result<Outcome, GeometryError> {
        self.run_batched(format!("Distribute {:?}", mode), |drawing, shapes, history| {
            layout::distribute(drawing, shapes, mode, history)
        })
    }

    pub fn stack_selected(&mut self, mode: StackMode) -> Result<Outcome, GeometryError> {
        self.run_batched(format!("Stack {:?}", mode), |drawing, shapes, history| {
            layout::stack(drawing, shapes, mode, history)
        })
    }

    pub fn flip_selected(&mut self, mode: FlipMode) -> Result<Outcome, GeometryError> {
        self.run_batched(format!("Flip {:?}", mode), |drawing, shapes, history| {
            layout::flip(drawing, shapes, mode, history)
        })
    }

    pub fn rotate_selected(&mut self, angle_degrees: f64) -> Result<Outcome, GeometryError> {
        self.run_batched(
            format!("Rotate {}°", angle_degrees),
            |drawing, shapes, history| layout::rotate(drawing, shapes, angle_degrees, history),
        )
    }
}
