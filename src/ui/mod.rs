mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{Color, screen_height, screen_width};

use crate::input::Action;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const CELL_SIZE: f32 = 10.0;

const BUTTON_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, top to bottom, below the pattern dropdown
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    let layout = [
        ("Play/Pause", Action::TogglePlaying),
        ("Step", Action::Step),
        ("Clear", Action::Clear),
        ("Random", Action::Randomize),
        ("Slower", Action::SlowDown),
        ("Faster", Action::SpeedUp),
    ];
    layout
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| {
            Button::new(px, 300.0 + i as f32 * (BUTTON_HEIGHT + 8.0), PANEL_WIDTH, BUTTON_HEIGHT, label, action)
        })
        .collect()
}
