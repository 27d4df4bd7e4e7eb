use super::DesignerState;
use crate::snap::PointFilter;

impl DesignerState {
    /// Filters a pointer position: line snapping first, the grid only when no
    /// line matched. Returns the position and whether it snapped.
    pub fn filter_pointer(&mut self, x: f64, y: f64) -> (f64, f64, bool) {
        let (mut fx, mut fy) = (x, y);
        self.grid_filter.clear(&mut self.drawing);
        if self
            .line_filter
            .try_filter(&mut self.drawing, &mut fx, &mut fy)
        {
            return (fx, fy, true);
        }
        let snapped = self
            .grid_filter
            .try_filter(&mut self.drawing, &mut fx, &mut fy);
        (fx, fy, snapped)
    }

    /// Removes every guide either filter emitted.
    pub fn clear_guides(&mut self) {
        self.line_filter.clear(&mut self.drawing);
        self.grid_filter.clear(&mut self.drawing);
    }
}
