use ::rand::Rng;
use log::warn;
use macroquad::prelude::*;

use crate::application::{Camera, Controller, SoupConfig, View};
use crate::domain::{Point, random_soup};
use crate::ui::{Button, CELL_SIZE, grid_area_width};

/// Speed range reachable from the UI, in generations per second
pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 60.0;

/// User commands, independent of the key or button that raised them
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    TogglePlaying,
    Step,
    Clear,
    Randomize,
    SpeedUp,
    SlowDown,
    ResetCamera,
}

/// Keyboard shortcuts
const KEY_BINDINGS: [(KeyCode, Action); 7] = [
    (KeyCode::Space, Action::TogglePlaying),
    (KeyCode::N, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::R, Action::Randomize),
    (KeyCode::Up, Action::SpeedUp),
    (KeyCode::Down, Action::SlowDown),
    (KeyCode::H, Action::ResetCamera),
];

/// Actions raised this frame by keys and panel buttons
pub fn collect_actions(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Action> {
    let keys = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action);
    let clicks = buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::action);
    keys.chain(clicks).collect()
}

/// Carry out one action against the controller and camera
pub fn apply<V: View, R: Rng + ?Sized>(
    action: Action,
    controller: &mut Controller<V>,
    camera: &mut Camera,
    soup: &SoupConfig,
    rng: &mut R,
) {
    match action {
        Action::TogglePlaying => controller.toggle_playing(),
        Action::Step => controller.step(),
        Action::Clear => {
            controller.pause();
            controller.clear();
        }
        Action::Randomize => {
            controller.pause();
            let cells = random_soup(rng, Point::new(0, 0), soup.width, soup.height, soup.density);
            controller.load_pattern(cells);
        }
        Action::SpeedUp => adjust_speed(controller, 1.0),
        Action::SlowDown => adjust_speed(controller, -1.0),
        Action::ResetCamera => camera.reset(),
    }
}

/// Nudge the speed by `delta` steps per second within the UI range
pub fn adjust_speed<V: View>(controller: &mut Controller<V>, delta: f64) {
    let target = (controller.speed().round() + delta).clamp(MIN_SPEED, MAX_SPEED);
    if let Err(err) = controller.set_speed(target) {
        warn!("speed change ignored: {}", err);
    }
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        camera.drag_to(mouse_pos);
    } else {
        camera.end_drag();
    }
}

/// Left click toggles the cell under the pointer; right drag erases.
/// Editing works whether or not playback is running.
pub fn handle_pointer<V: View>(controller: &mut Controller<V>, camera: &Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let cell = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);

    if is_mouse_button_pressed(MouseButton::Left) {
        controller.toggle(cell);
    } else if is_mouse_button_down(MouseButton::Right) {
        controller.set_state(cell, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Life;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;
    use std::time::Duration;

    fn controller() -> Controller<()> {
        Controller::new(Life::new(), (), Duration::from_millis(100)).unwrap()
    }

    #[test]
    fn test_adjust_speed_is_clamped() {
        let mut controller = controller();
        adjust_speed(&mut controller, 1.0);
        assert!((controller.speed() - 11.0).abs() < 1e-3);

        for _ in 0..100 {
            adjust_speed(&mut controller, 1.0);
        }
        assert!((controller.speed() - MAX_SPEED).abs() < 1e-3);

        for _ in 0..100 {
            adjust_speed(&mut controller, -1.0);
        }
        assert_eq!(controller.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_randomize_pauses_and_seeds_inside_soup() {
        let mut controller = controller();
        let mut camera = Camera::new();
        let mut rng = StdRng::seed_from_u64(3);
        let soup = SoupConfig { width: 8, height: 4, density: 1.0 };

        controller.play();
        apply(Action::Randomize, &mut controller, &mut camera, &soup, &mut rng);

        assert!(!controller.is_playing());
        assert_eq!(controller.life().population(), 32);
        assert!(controller.alive_points().all(|p| (0..8).contains(&p.x) && (0..4).contains(&p.y)));
    }

    #[test]
    fn test_step_and_clear_actions() {
        let mut controller = controller();
        let mut camera = Camera::new();
        let mut rng = StdRng::seed_from_u64(0);
        let soup = SoupConfig::default();

        controller.load_pattern([Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        apply(Action::Step, &mut controller, &mut camera, &soup, &mut rng);
        assert_eq!(controller.generation(), 1);
        assert!(controller.life().is_alive(Point::new(1, -1)));

        apply(Action::TogglePlaying, &mut controller, &mut camera, &soup, &mut rng);
        assert!(controller.is_playing());
        apply(Action::Clear, &mut controller, &mut camera, &soup, &mut rng);
        assert!(!controller.is_playing());
        assert_eq!(controller.life().population(), 0);
    }
}
