use crate::domain::Point;

/// Camera manages viewport and zoom over the unbounded grid
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
    /// Last pointer position while a pan drag is in progress
    drag_from: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_from: None,
        }
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.2, 10.0);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.2, 10.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Continue a drag to `pos`, panning by the distance since the last call
    pub fn drag_to(&mut self, pos: (f32, f32)) {
        if let Some((last_x, last_y)) = self.drag_from {
            self.pan(pos.0 - last_x, pos.1 - last_y);
        }
        self.drag_from = Some(pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Convert screen coordinates to the grid cell under them.
    /// Floors so cells left of or above the origin get negative coordinates.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Point {
        let size = cell_size * self.zoom;
        Point::new(
            ((screen_x - self.offset_x) / size).floor() as i64,
            ((screen_y - self.offset_y) / size).floor() as i64,
        )
    }

    /// Top-left screen corner of a grid cell
    pub fn grid_to_screen(&self, point: Point, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (
            point.x as f32 * size + self.offset_x,
            point.y as f32 * size + self.offset_y,
        )
    }

    /// Grid cells at the viewport corners, for culling
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (Point, Point) {
        (
            self.screen_to_grid(0.0, 0.0, cell_size),
            self.screen_to_grid(viewport_width, viewport_height, cell_size),
        )
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
        self.drag_from = None;
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
    fn test_screen_to_grid_floors_negative_cells() {
        let mut camera = Camera::new();
        camera.pan(100.0, 100.0);

        assert_eq!(camera.screen_to_grid(105.0, 105.0, 10.0), Point::new(0, 0));
        assert_eq!(camera.screen_to_grid(95.0, 85.0, 10.0), Point::new(-1, -2));
    }

    #[test]
    fn test_grid_to_screen_round_trips_cell_corner() {
        let mut camera = Camera::new();
        camera.pan(-30.0, 12.0);
        camera.zoom_in(2.0);

        let cell = Point::new(-7, 4);
        let (sx, sy) = camera.grid_to_screen(cell, 10.0);
        assert_eq!(camera.screen_to_grid(sx + 1.0, sy + 1.0, 10.0), cell);
    }

    #[test]
    fn test_drag_pans_by_pointer_delta() {
        let mut camera = Camera::new();
        camera.drag_to((10.0, 10.0));
        camera.drag_to((25.0, 5.0));
        assert_eq!((camera.offset_x, camera.offset_y), (15.0, -5.0));

        camera.end_drag();
        camera.drag_to((100.0, 100.0));
        assert_eq!((camera.offset_x, camera.offset_y), (15.0, -5.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in(1.5);
        }
        assert_eq!(camera.zoom, 10.0);
        camera.reset();
        assert_eq!(camera.zoom, 1.0);
    }
}
