/// Width of the square slot each cell occupies at zoom 1.0
pub const CELL_SLOT: f32 = 10.0;
/// Drawn size of a cell inside its slot at zoom 1.0
pub const CELL_SIZE: f32 = 8.0;

const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 10.0;
const ZOOM_STEP: f32 = 0.1;

/// Camera owns the view-side state: zoom factor and how far the board has
/// been panned. Panning itself shifts grid contents, this only keeps count.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub zoom: f32,
    pub pan_x: i64,
    pub pan_y: i64,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan_x: 0,
            pan_y: 0,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Zoom out, never below 1.0
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Record a one-cell shift of the board contents by (dx, dy)
    pub fn record_shift(&mut self, dx: i32, dy: i32) {
        self.pan_x -= i64::from(dx.signum());
        self.pan_y -= i64::from(dy.signum());
    }

    /// Size of one cell slot on screen
    pub fn slot_size(&self) -> f32 {
        CELL_SLOT * self.zoom
    }

    /// Convert screen coordinates to grid coordinates (may be off-grid)
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i64, i64) {
        let slot = self.slot_size();
        ((screen_x / slot).floor() as i64, (screen_y / slot).floor() as i64)
    }

    /// Screen rectangle `(x, y, size)` of the cell drawn at grid position.
    /// The cell is centered in its slot.
    pub fn cell_rect(&self, grid_x: usize, grid_y: usize) -> (f32, f32, f32) {
        let slot = self.slot_size();
        let size = CELL_SIZE * self.zoom;
        let padding = (slot - size) / 2.0;
        (
            grid_x as f32 * slot + padding,
            grid_y as f32 * slot + padding,
            size,
        )
    }

    /// Number of columns and rows that fit in the viewport, clamped to the grid
    pub fn visible_extent(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        grid_dimensions: (usize, usize),
    ) -> (usize, usize) {
        let slot = self.slot_size();
        let cols = (viewport_width / slot).ceil().max(0.0) as usize;
        let rows = (viewport_height / slot).ceil().max(0.0) as usize;
        (cols.min(grid_dimensions.0), rows.min(grid_dimensions.1))
    }

    /// Reset zoom and pan counters
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_never_below_one() {
        let mut camera = Camera::new();
        camera.zoom_out();
        assert_eq!(camera.zoom, 1.0);
        camera.zoom_in();
        camera.zoom_in();
        assert!((camera.zoom - 1.2).abs() < 1e-5);
        for _ in 0..200 {
            camera.zoom_in();
        }
        assert_eq!(camera.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_screen_to_grid() {
        let mut camera = Camera::new();
        assert_eq!(camera.screen_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(camera.screen_to_grid(19.9, 25.0), (1, 2));
        assert_eq!(camera.screen_to_grid(-3.0, 5.0), (-1, 0));

        camera.zoom = 2.0;
        assert_eq!(camera.screen_to_grid(39.0, 40.0), (1, 2));
    }

    #[test]
    fn test_cell_rect_is_centered_in_slot() {
        let camera = Camera::new();
        assert_eq!(camera.cell_rect(0, 0), (1.0, 1.0, 8.0));
        assert_eq!(camera.cell_rect(3, 2), (31.0, 21.0, 8.0));
    }

    #[test]
    fn test_visible_extent_clamps_to_grid() {
        let camera = Camera::new();
        assert_eq!(camera.visible_extent(1000.0, 1000.0, (100, 100)), (100, 100));
        assert_eq!(camera.visible_extent(305.0, 200.0, (100, 100)), (31, 20));
    }

    #[test]
    fn test_record_shift_tracks_pan() {
        let mut camera = Camera::new();
        camera.record_shift(0, -1);
        camera.record_shift(0, -1);
        camera.record_shift(1, 0);
        assert_eq!((camera.pan_x, camera.pan_y), (-1, 2));
        camera.reset();
        assert_eq!(camera, Camera::new());
    }
}
