use macroquad::prelude::*;
use trajectory_lab::render::summary_lines;

use crate::constants::{CALCULATE_KEY, PANEL_H, PANEL_X, PANEL_Y, RESET_KEY, TITLE_Y};
use crate::controls::key_hint;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Projectile Trajectory",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    let hint = format!(
        "{}: calculate | {}: reset",
        key_hint(CALCULATE_KEY),
        key_hint(RESET_KEY)
    );
    draw_ui_text(
        &hint,
        left,
        TITLE_Y + 28.0,
        18,
        DARKGRAY,
        font,
    );

    draw_results_block(state, font);
}

fn draw_results_block(state: &AppRuntime, font: Option<&Font>) {
    let x = PANEL_X + 4.0;
    let mut y = PANEL_Y + PANEL_H + 34.0;

    if let Some(trajectory) = &state.trajectory {
        for line in summary_lines(&trajectory.result) {
            draw_ui_text(&line, x, y, 20, BLUE, font);
            y += 26.0;
        }
    }

    draw_ui_text(&state.status_line, x, y + 8.0, 18, DARKGRAY, font);
}
