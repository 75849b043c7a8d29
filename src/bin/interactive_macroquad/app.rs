use macroquad::prelude::*;
use trajectory_lab::render::Renderer;

use crate::constants::{
    BACKGROUND_COLOR, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{CanvasRenderer, PlotRect, draw_axes};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!(path = UI_FONT_PATH, %err, "could not load font, using default");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let rect = PlotRect {
            left: LEFT_MARGIN,
            right: screen_width() - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_height() - BOTTOM_MARGIN,
        };

        clear_background(BACKGROUND_COLOR);

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        match &state.trajectory {
            Some(trajectory) => {
                let mut canvas = CanvasRenderer {
                    rect,
                    window: state.window,
                    input: trajectory.input,
                    font: ui_font.as_ref(),
                };
                if let Err(err) = canvas.render(&trajectory.result, &trajectory.points) {
                    tracing::error!(%err, "canvas render failed");
                }
            }
            None => draw_axes(rect, &state.window, ui_font.as_ref()),
        }

        draw_hud(&state, rect.left, ui_font.as_ref());

        next_frame().await;
    }
}
