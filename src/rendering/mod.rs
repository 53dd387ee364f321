use macroquad::prelude::*;

use crate::application::{Camera, Controller, View};
use crate::domain::{Life, Point};
use crate::ui::{Button, Dropdown, CELL_SIZE, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Snapshot of the last rendered generation.
/// The controller refreshes it after every mutation; drawing reads only this.
#[derive(Default)]
pub struct Frame {
    points: Vec<Point>,
    generation: u64,
}

impl Frame {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.points.len()
    }
}

impl View for Frame {
    fn render(&mut self, life: &Life) {
        self.points.clear();
        self.points.extend(life.alive_points());
        self.generation = life.generation();
    }
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw grid lines and alive cells, clipped to the grid area
pub fn draw_grid(frame: &Frame, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let (min, max) = camera.visible_bounds(area_width, area_height, CELL_SIZE);

    // Grid lines only when cells are big enough to tell apart
    if cell_size >= 4.0 {
        for x in min.x..=max.x + 1 {
            let (sx, _) = camera.grid_to_screen(Point::new(x, min.y), CELL_SIZE);
            draw_line(sx, 0.0, sx, area_height, 1.0, GRID_LINE_COLOR);
        }
        for y in min.y..=max.y + 1 {
            let (_, sy) = camera.grid_to_screen(Point::new(min.x, y), CELL_SIZE);
            draw_line(0.0, sy, area_width, sy, 1.0, GRID_LINE_COLOR);
        }
    }

    let visible = |p: &&Point| (min.x..=max.x).contains(&p.x) && (min.y..=max.y).contains(&p.y);
    for &point in frame.points().iter().filter(visible) {
        let (sx, sy) = camera.grid_to_screen(point, CELL_SIZE);
        // Clip the cell straddling the panel edge
        let width = cell_size.min(area_width - sx);
        if width > 0.0 {
            draw_rectangle(sx, sy, width, cell_size, ALIVE_COLOR);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons, dropdown, and status
pub fn draw_controls(
    controller: &Controller<Frame>,
    camera: &Camera,
    buttons: &[Button],
    dropdown: &Dropdown,
    mouse_pos: (f32, f32)
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let frame = controller.view();
    let (status, status_color) = if controller.is_playing() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    let value_color = Color::from_rgba(180, 180, 180, 255);

    let labels: [(&str, f32, f32, Color); 13] = [
        ("Controls:", 80.0, 14.0, WHITE),
        ("LMB: Toggle cell", 95.0, 12.0, GRAY),
        ("RMB: Erase", 108.0, 12.0, GRAY),
        ("Space: Play  N: Step", 121.0, 12.0, GRAY),
        ("Up/Down: Speed", 134.0, 12.0, GRAY),
        ("Wheel: Zoom  H: Home", 147.0, 12.0, GRAY),
        ("Mid-drag: Pan", 160.0, 12.0, GRAY),
        ("Speed:", 190.0, 16.0, WHITE),
        (&format!("{:.0} gen/s", controller.speed()), 208.0, 14.0, value_color),
        ("Generation:", 232.0, 16.0, WHITE),
        (&format!("{}", frame.generation()), 252.0, 20.0, ALIVE_COLOR),
        ("Population:", 276.0, 16.0, WHITE),
        (&format_number(frame.population()), 294.0, 14.0, value_color),
    ];
    // Status and zoom sit below the buttons
    let footer_y = buttons.last().map_or(300.0, Button::bottom) + 30.0;
    let footer: [(&str, f32, f32, Color); 4] = [
        ("Status:", footer_y, 16.0, WHITE),
        (status, footer_y + 20.0, 16.0, status_color),
        ("Zoom:", footer_y + 45.0, 14.0, WHITE),
        (&format!("{:.1}x", camera.zoom), footer_y + 60.0, 14.0, value_color),
    ];

    labels.iter().chain(footer.iter()).for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Dropdown last so its open menu covers everything else
    dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_frame_tracks_latest_generation() {
        let mut life = Life::new();
        life.add_alive_points([Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);

        let mut frame = Frame::default();
        frame.render(&life);
        assert_eq!(frame.population(), 3);

        life.update();
        frame.render(&life);
        assert_eq!(frame.generation(), 1);
        let mut points = frame.points().to_vec();
        points.sort();
        assert_eq!(points, vec![Point::new(1, -1), Point::new(1, 0), Point::new(1, 1)]);
    }
}
