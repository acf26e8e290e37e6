use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::ui::{Button, ButtonAction, grid_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in();
    } else if wheel < 0.0 {
        camera.zoom_out();
    }
}

/// Pan with W/A/S/D: one cell per frame while held
pub fn handle_pan(state: &mut GameState, camera: &mut Camera) {
    let moves = [
        (KeyCode::W, (0, -1)),
        (KeyCode::S, (0, 1)),
        (KeyCode::A, (-1, 0)),
        (KeyCode::D, (1, 0)),
    ];

    for (key, (dx, dy)) in moves {
        if is_key_down(key) {
            state.pan(camera, dx, dy);
        }
    }
}

/// Left click stamps the pending pattern; otherwise the left button paints
/// cells alive (paused only). Right click drops the pending pattern.
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let (gx, gy) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
    if state.pending_pattern_index.is_some() {
        if is_mouse_button_pressed(MouseButton::Left) && state.stamp_pattern(gx, gy) {
            tracing::debug!(x = gx, y = gy, "stamped pattern");
        } else if is_mouse_button_pressed(MouseButton::Right) {
            state.pending_pattern_index = None;
        }
        return;
    }

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(gx, gy);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::R, GameState::reset),
        (KeyCode::C, GameState::randomize),
        (KeyCode::P, GameState::cycle_pattern),
        (KeyCode::Escape, GameState::cancel_pattern),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset zoom and pan counters with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action {
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Reset => s.reset(),
            ButtonAction::Randomize => s.randomize(),
        })
}
