use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector; reports a selection only when it changes
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    label: &'static str,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: &'static str, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label,
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Header row, then one row per item when open
    fn row(&self, index: Option<usize>) -> Rect {
        let offset = index.map_or(0.0, |i| (i + 1) as f32 * ROW_HEIGHT);
        Rect::new(self.x, self.y + offset, self.width, ROW_HEIGHT)
    }

    fn hovered_item(&self, mouse_pos: Vec2) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.row(Some(i)).contains(mouse_pos))
    }

    /// Handle clicks; returns the newly selected index, if any
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let mouse = vec2(mouse_pos.0, mouse_pos.1);

        if self.row(None).contains(mouse) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }

        self.is_open = false;
        // Re-picking the current item counts as a selection: it reloads the pattern
        let picked = self.hovered_item(mouse)?;
        self.selected = picked;
        Some(picked)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let mouse = vec2(mouse_pos.0, mouse_pos.1);
        draw_text(self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.row(None);
        let fill = if header.contains(mouse) { super::HOVER_COLOR } else { super::BUTTON_COLOR };
        draw_rectangle(header.x, header.y, header.w, header.h, fill);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);
        draw_text(&fit_text(&self.items[self.selected], header.w - 30.0), header.x + 5.0, header.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", header.x + header.w - 18.0, header.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.hovered_item(mouse);
        for (i, item) in self.items.iter().enumerate() {
            let row = self.row(Some(i));
            let fill = if hovered == Some(i) {
                super::HOVER_COLOR
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, fill);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(item, row.w - 10.0), row.x + 5.0, row.y + 21.0, FONT_SIZE, WHITE);
        }
    }
}

/// Truncate with an ellipsis until the text fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}
