use macroquad::prelude::*;
use trajectory_lab::TrajectoryError;
use trajectory_lab::core::trajectory::{TrajectoryInput, TrajectoryPoint, TrajectoryResult};
use trajectory_lab::core::window::AxisWindow;
use trajectory_lab::render::Renderer;

use crate::constants::{
    AXIS_ARROW_PX, AXIS_COLOR, AXIS_OVERHANG_PX, LAUNCH_ARROW_HEAD_PX, LAUNCH_ARROW_PX,
    START_MARKER_RADIUS, TICK_HALF_PX, TRAJECTORY_COLOR,
};

/// Screen rectangle the data window is mapped onto.
#[derive(Clone, Copy)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    pub(crate) fn world_to_screen(&self, window: &AxisWindow, x: f64, y: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let tx = ((x - window.x_min) / window.width().max(1e-9)) as f32;
        let ty = ((y - window.y_min) / window.height().max(1e-9)) as f32;
        vec2(self.left + tx * plot_w, self.bottom - ty * plot_h)
    }
}

fn format_axis_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_arrow_head(tip: Vec2, direction_rad: f32, size: f32, color: Color) {
    // Screen y grows downward, so the direction is mirrored vertically.
    let back_left = direction_rad + std::f32::consts::PI * 0.75;
    let back_right = direction_rad - std::f32::consts::PI * 0.75;
    let a = tip + vec2(back_left.cos(), -back_left.sin()) * size;
    let b = tip + vec2(back_right.cos(), -back_right.sin()) * size;
    draw_triangle(tip, a, b, color);
}

/// Arrowed axes through the data origin with a tick and label every step.
pub(crate) fn draw_axes(rect: PlotRect, window: &AxisWindow, font: Option<&Font>) {
    let origin = rect.world_to_screen(
        window,
        0.0f64.clamp(window.x_min, window.x_max),
        0.0f64.clamp(window.y_min, window.y_max),
    );
    let x_end = vec2(rect.right + AXIS_OVERHANG_PX, origin.y);
    let y_end = vec2(origin.x, rect.top - AXIS_OVERHANG_PX);

    draw_line(rect.left, origin.y, x_end.x, x_end.y, 1.5, AXIS_COLOR);
    draw_line(origin.x, rect.bottom, y_end.x, y_end.y, 1.5, AXIS_COLOR);
    draw_arrow_head(x_end, 0.0, AXIS_ARROW_PX, AXIS_COLOR);
    draw_arrow_head(y_end, std::f32::consts::FRAC_PI_2, AXIS_ARROW_PX, AXIS_COLOR);

    let tick_font_size: u16 = 16;
    for value in window.x_ticks() {
        let p = rect.world_to_screen(window, value, 0.0f64.clamp(window.y_min, window.y_max));
        draw_line(p.x, p.y - TICK_HALF_PX, p.x, p.y + TICK_HALF_PX, 1.0, AXIS_COLOR);
        let label = format_axis_value(value);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            p.x - size.width * 0.5,
            p.y + 22.0,
            tick_font_size,
            AXIS_COLOR,
            font,
        );
    }
    for value in window.y_ticks() {
        let p = rect.world_to_screen(window, 0.0f64.clamp(window.x_min, window.x_max), value);
        draw_line(p.x - TICK_HALF_PX, p.y, p.x + TICK_HALF_PX, p.y, 1.0, AXIS_COLOR);
        let label = format_axis_value(value);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            p.x - 10.0 - size.width,
            p.y + size.height * 0.35,
            tick_font_size,
            AXIS_COLOR,
            font,
        );
    }

    draw_ui_text("x (m)", x_end.x - 30.0, x_end.y + 40.0, 18, AXIS_COLOR, font);
    draw_ui_text("y (m)", y_end.x - 50.0, y_end.y + 10.0, 18, AXIS_COLOR, font);
}

/// Draws the sampled path, the start marker and the launch direction.
pub(crate) struct CanvasRenderer<'a> {
    pub(crate) rect: PlotRect,
    pub(crate) window: AxisWindow,
    pub(crate) input: TrajectoryInput,
    pub(crate) font: Option<&'a Font>,
}

impl Renderer for CanvasRenderer<'_> {
    fn render(
        &mut self,
        _result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError> {
        draw_axes(self.rect, &self.window, self.font);
        if points.is_empty() {
            return Ok(());
        }

        let mut prev = self.rect.world_to_screen(&self.window, points[0].x, points[0].y);
        for point in &points[1..] {
            let cur = self.rect.world_to_screen(&self.window, point.x, point.y);
            draw_line(prev.x, prev.y, cur.x, cur.y, 2.0, TRAJECTORY_COLOR);
            prev = cur;
        }

        let start = self
            .rect
            .world_to_screen(&self.window, self.input.x0, self.input.y0);
        draw_circle(start.x, start.y, START_MARKER_RADIUS, AXIS_COLOR);

        let angle_rad = self.input.angle_deg.to_radians() as f32;
        let tip = start + vec2(angle_rad.cos(), -angle_rad.sin()) * LAUNCH_ARROW_PX;
        draw_line(start.x, start.y, tip.x, tip.y, 2.0, AXIS_COLOR);
        draw_arrow_head(tip, angle_rad, LAUNCH_ARROW_HEAD_PX, AXIS_COLOR);
        Ok(())
    }
}
