//! Designer state manager for editor integration.
//!
//! Ties a drawing to its selection, undo history and snap filters:
//! - `transforms`: layout operators over the selection, batched for undo
//! - `snapping`: pointer filtering through the line and grid filters

mod snapping;
mod transforms;

use tracing::debug;

use vectorkit_core::{GeometryError, ShapeId};
use vectorkit_settings::Config;

use crate::drawing::Drawing;
use crate::history::UndoRedoManager;
use crate::snap::{GridSnapPointFilter, LineSnapPointFilter};

/// Designer state for editor integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub drawing: Drawing,
    pub selection: Vec<ShapeId>,
    pub history: UndoRedoManager,
    pub grid_filter: GridSnapPointFilter,
    pub line_filter: LineSnapPointFilter,
    pub is_modified: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl DesignerState {
    pub fn new(config: &Config) -> Self {
        Self {
            drawing: Drawing::new(),
            selection: Vec::new(),
            history: UndoRedoManager::new(config.history_depth),
            grid_filter: GridSnapPointFilter::new(config.grid.clone()),
            line_filter: LineSnapPointFilter::new(config.line.clone()),
            is_modified: false,
        }
    }

    /// Replaces the snap settings and history depth.
    pub fn apply_config(&mut self, config: &Config) {
        self.history.set_max_depth(config.history_depth);
        self.grid_filter.set_settings(config.grid.clone());
        self.line_filter.set_settings(config.line.clone());
    }

    /// Replaces the selection. Every id must exist in the drawing.
    pub fn select(&mut self, ids: &[ShapeId]) -> Result<(), GeometryError> {
        if let Some(missing) = ids.iter().find(|id| !self.drawing.shapes.contains(**id)) {
            return Err(GeometryError::MissingShape(*missing));
        }
        self.selection = ids.to_vec();
        debug!("Selected {} shapes", self.selection.len());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> &[ShapeId] {
        &self.selection
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last step, returning its description
    pub fn undo(&mut self) -> Option<String> {
        let description = self.history.undo(&mut self.drawing.points)?;
        self.is_modified = true;
        Some(description)
    }

    /// Redo the last undone step, returning its description
    pub fn redo(&mut self) -> Option<String> {
        let description = self.history.redo(&mut self.drawing.points)?;
        self.is_modified = true;
        Some(description)
    }
}
