use clap::Parser;
use macroquad::prelude::*;
use table_life::{
    Camera, GameState, SimConfig,
    application::{Args, ConfigError},
    input, rendering, ui,
};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automaton".to_owned(),
        window_width: 1000 + ui::PANEL_WIDTH as i32,
        window_height: 1000,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    // Arguments are resolved before a window exists so bad input never flashes one
    let (state, camera) = match startup() {
        Ok(ready) => ready,
        Err(ConfigError::Args(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            tracing::error!(%err, "simulator failed to start");
            std::process::exit(2);
        }
    };

    macroquad::Window::from_config(window_conf(), run(state, camera));
}

fn startup() -> Result<(GameState, Camera), ConfigError> {
    let config = SimConfig::from_args(Args::try_parse()?)?;
    tracing::info!(
        width = config.width,
        height = config.height,
        speed = config.updates_per_second,
        "starting simulator"
    );

    Ok((GameState::new(&config)?, Camera::new()))
}

async fn run(mut state: GameState, mut camera: Camera) {
    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        input::handle_mouse_paint(&mut state, &camera, mouse_pos);
        input::handle_pan(&mut state, &mut camera);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &camera);
        rendering::draw_pattern_preview(&state, &camera, mouse_pos);
        rendering::draw_controls(&state, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
