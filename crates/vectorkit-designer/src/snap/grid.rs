use tracing::trace;

use vectorkit_core::ShapeId;
use vectorkit_settings::{GridSnapMode, GridSnapSettings};

use super::{emit_guides, remove_guides, PointFilter};
use crate::drawing::Drawing;

/// Rounds `value` to the nearest multiple of `size`; midpoints round up.
///
/// A non-positive or NaN `size` leaves `value` unchanged.
pub fn grid_round(value: f64, size: f64) -> f64 {
    if size.is_nan() || size <= 0.0 {
        return value;
    }
    let c = value.rem_euclid(size);
    if c >= size / 2.0 {
        value + size - c
    } else {
        value - c
    }
}

/// Snaps pointer positions to a rectangular grid.
#[derive(Debug, Clone, Default)]
pub struct GridSnapPointFilter {
    settings: GridSnapSettings,
    guides: Vec<ShapeId>,
}

impl GridSnapPointFilter {
    pub fn new(settings: GridSnapSettings) -> Self {
        Self {
            settings,
            guides: Vec::new(),
        }
    }

    pub fn settings(&self) -> &GridSnapSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: GridSnapSettings) {
        self.settings = settings;
    }
}

impl PointFilter for GridSnapPointFilter {
    fn try_filter(&mut self, drawing: &mut Drawing, x: &mut f64, y: &mut f64) -> bool {
        self.clear(drawing);
        if !self.settings.is_enabled {
            return false;
        }

        let mut snapped = false;
        if self.settings.mode.contains(GridSnapMode::HORIZONTAL) {
            *x = grid_round(*x, self.settings.grid_size_x);
            snapped = true;
        }
        if self.settings.mode.contains(GridSnapMode::VERTICAL) {
            *y = grid_round(*y, self.settings.grid_size_y);
            snapped = true;
        }

        if snapped {
            trace!("Grid snap to ({}, {})", x, y);
            if self.settings.enable_guides {
                emit_guides(drawing, &mut self.guides, *x, *y, &self.settings.guide_style);
            }
        }
        snapped
    }

    fn clear(&mut self, drawing: &mut Drawing) {
        remove_guides(drawing, &mut self.guides);
    }

    fn guides(&self) -> &[ShapeId] {
        &self.guides
    }
}
