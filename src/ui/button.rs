use macroquad::prelude::*;

use crate::input::Action;

/// Panel button that triggers one [`Action`] when clicked
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: &'static str,
    action: Action,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: &'static str, action: Action) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label,
            action,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Screen y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) { super::HOVER_COLOR } else { super::BUTTON_COLOR };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(self.label, None, 20, 1.0);
        draw_text(self.label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, WHITE);
    }
}
