use macroquad::prelude::{Color, KeyCode};

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

// Letter keys would fire while typing into the form, so reset stays on Esc.
pub const CALCULATE_KEY: KeyCode = KeyCode::Enter;
pub const RESET_KEY: KeyCode = KeyCode::Escape;

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 90.0;
pub const PANEL_W: f32 = 320.0;
pub const PANEL_H: f32 = 270.0;

pub const LEFT_MARGIN: f32 = 430.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 80.0;
pub const TITLE_Y: f32 = 46.0;

pub const TICK_HALF_PX: f32 = 5.0;
pub const AXIS_ARROW_PX: f32 = 10.0;
pub const AXIS_OVERHANG_PX: f32 = 20.0;
pub const START_MARKER_RADIUS: f32 = 5.0;
pub const LAUNCH_ARROW_PX: f32 = 30.0;
pub const LAUNCH_ARROW_HEAD_PX: f32 = 8.0;

pub const BACKGROUND_COLOR: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const AXIS_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.204, 0.596, 0.859, 1.0);
