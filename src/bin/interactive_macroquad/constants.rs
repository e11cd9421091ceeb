use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 120.0;
pub const TITLE_Y: f32 = 46.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const INITIAL_SPEED_MPS: f32 = 20.0;
pub const INITIAL_ANGLE_DEG: f32 = 45.0;
pub const TIME_STEP_S: f64 = 0.01;
pub const MAX_TIME_S: f64 = 10.0;
pub const SPEED_RANGE_MPS: std::ops::Range<f32> = 0.0..100.0;
pub const ANGLE_RANGE_DEG: std::ops::Range<f32> = 0.0..90.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.90, 0.93, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const DRAG_ON_COLOR: Color = Color::new(0.85, 0.33, 0.10, 1.0);
