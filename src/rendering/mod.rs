use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Cell, Grid};
use crate::ui::{Button, grid_area_height, grid_area_width, panel_x, PANEL_WIDTH};

/// Fill colors for states 1..=8; higher states use the last entry
const STATE_PALETTE: [(u8, u8, u8); 8] = [
    (110, 110, 130),
    (120, 120, 140),
    (130, 130, 150),
    (140, 140, 160),
    (150, 150, 170),
    (160, 160, 180),
    (170, 170, 190),
    (180, 180, 200),
];

/// Color a cell is drawn with
pub fn state_color(cell: Cell) -> Color {
    match cell.state() {
        0 => DARKGRAY,
        n => {
            let idx = (n as usize - 1).min(STATE_PALETTE.len() - 1);
            let (r, g, b) = STATE_PALETTE[idx];
            Color::from_rgba(r, g, b, 255)
        }
    }
}

/// Draw every visible cell of the grid
pub fn draw_grid(grid: &Grid, camera: &Camera) {
    let (cols, rows) = camera.visible_extent(grid_area_width(), grid_area_height(), grid.dimensions());

    for y in 0..rows {
        for x in 0..cols {
            let Some(cell) = grid.state_at(x, y) else {
                continue;
            };
            let (sx, sy, size) = camera.cell_rect(x, y);
            draw_rectangle(sx, sy, size, size, state_color(cell));
        }
    }
}

/// Outline where the pending pattern would land under the cursor
pub fn draw_pattern_preview(state: &GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    let Some(pattern) = state.pending_pattern() else {
        return;
    };
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let (cx, cy) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
    let (ox, oy) = pattern.origin_centered_on(cx, cy);
    let (gw, gh) = state.grid.dimensions();
    let ghost = Color::from_rgba(100, 200, 255, 140);

    for (x, y) in pattern.cells_at(ox, oy) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            continue;
        };
        if x < gw && y < gh {
            let (sx, sy, size) = camera.cell_rect(x, y);
            draw_rectangle(sx, sy, size, size, ghost);
        }
    }
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel and the on-grid status text
pub fn draw_controls(state: &GameState, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_text(&format!("FPS: {}", get_fps()), 10.0, 15.0, 20.0, GREEN);
    draw_text("Press SPACE to pause", 10.0, 35.0, 20.0, WHITE);

    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let help = [
        "Controls:",
        "LMB: Paint (paused)",
        "WASD: Pan",
        "Wheel: Zoom",
        "R: Reset  C: Random",
        "P: Pattern  Esc: Cancel",
        "Up/Down: Speed",
        "H: Home",
    ];
    for (i, line) in help.iter().enumerate() {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(line, px, 40.0 + 14.0 * i as f32, size, color);
    }

    let (gw, gh) = state.grid.dimensions();
    let status = if state.fault.is_some() {
        ("Fault", RED)
    } else if state.is_running {
        ("Running", GREEN)
    } else {
        ("Paused", ORANGE)
    };

    let lines = [
        (format!("Grid: {gw}x{gh}"), GRAY),
        (format!("Rules: {} entries", state.grid.rules().len()), GRAY),
        (format!("Generation: {}", state.generation), WHITE),
        (format!("Population: {}", state.grid.population()), WHITE),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), WHITE),
        (format!("Evolve: {:.1}ms", state.last_evolution_time_ms), GRAY),
        (format!("Zoom: {:.1}x", camera.zoom), GRAY),
        (format!("Pan: ({}, {})", camera.pan_x, camera.pan_y), GRAY),
        (format!("Status: {}", status.0), status.1),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text(text, px, 180.0 + 20.0 * i as f32, 16.0, *color);
    }

    if let Some(pattern) = state.pending_pattern() {
        let text = format!("Pattern: {} - {} (click to place)", pattern.name, pattern.description);
        draw_text(&text, 10.0, 75.0, 18.0, SKYBLUE);
    }

    if let Some(err) = &state.fault {
        draw_text(&err.to_string(), 10.0, 55.0, 18.0, RED);
    }
}
