mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create the side-panel buttons
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        (ButtonAction::PlayPause, "Play/Pause"),
        (ButtonAction::Reset, "Reset"),
        (ButtonAction::Randomize, "Random"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, label))| {
        Button::new(px, 470.0 + 50.0 * i as f32, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
