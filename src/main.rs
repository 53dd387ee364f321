use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;
use sparse_life::{
    Camera, Controller, Frame, Life, PlaybackConfig, presets,
    ui::{self, Dropdown},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Sparse Grid".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = PlaybackConfig::default();
    if let Err(err) = config.validate() {
        error!("invalid configuration: {}", err);
        return;
    }

    let mut controller = match Controller::new(Life::new(), Frame::default(), config.interval) {
        Ok(controller) => controller,
        Err(err) => {
            error!("cannot start playback: {}", err);
            return;
        }
    };
    let mut camera = Camera::new();
    let mut rng = ::rand::rng();

    let patterns = presets::all_patterns();
    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(ui::panel_x(), 30.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    if let Some(index) = patterns.iter().position(|p| p.name == config.initial_pattern) {
        pattern_dropdown.set_selected(index);
        controller.load_pattern(patterns[index].cells.iter().copied());
    }
    if config.start_playing {
        controller.play();
    }
    info!(
        "starting with {:?} at {:.0} gen/s",
        config.initial_pattern,
        config.steps_per_second()
    );

    loop {
        let mouse_pos = mouse_position();

        pattern_dropdown.set_position(ui::panel_x(), 30.0);
        let buttons = ui::create_buttons();

        // Picking a pattern pauses, like loading any other seed
        let dropdown_was_open = pattern_dropdown.is_open();
        if let Some(index) = pattern_dropdown.update(mouse_pos) {
            controller.pause();
            controller.load_pattern(patterns[index].cells.iter().copied());
            info!("loaded pattern {:?}", patterns[index].name);
        }

        // Clicks that land on the open menu must not reach the grid or buttons
        if !dropdown_was_open && !pattern_dropdown.is_open() {
            for action in input::collect_actions(&buttons, mouse_pos) {
                input::apply(action, &mut controller, &mut camera, &config.soup, &mut rng);
            }
            input::handle_pointer(&mut controller, &camera, mouse_pos);
        }
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);

        controller.tick(Duration::from_secs_f64(get_time()));

        clear_background(BLACK);
        rendering::draw_grid(controller.view(), &camera);
        rendering::draw_controls(&controller, &camera, &buttons, &pattern_dropdown, mouse_pos);

        next_frame().await;
    }
}
