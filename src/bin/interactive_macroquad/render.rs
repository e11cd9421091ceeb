use dynamic_projectile::Trajectory;
use dynamic_projectile::core::window::PlotWindow;
use macroquad::prelude::*;

use crate::constants::{X_GRID_LINES, Y_GRID_LINES};

/// Screen rectangle the plot is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn to_screen(self, window: &PlotWindow, x_m: f64, y_m: f64) -> Vec2 {
        let (x, y) = window.world_to_screen(x_m, y_m, self.left, self.right, self.top, self.bottom);
        vec2(x, y)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
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

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, window: &PlotWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = area.left + t as f32 * (area.right - area.left);
        let label = format_axis_value(t * window.max_x_m, window.max_x_m);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = area.bottom - t as f32 * (area.bottom - area.top);
        let label = format_axis_value(t * window.max_y_m, window.max_y_m);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

/// Draws the curve, clipping the final below-ground sample to the axis.
pub(crate) fn draw_trajectory(
    trajectory: &Trajectory,
    window: &PlotWindow,
    area: PlotArea,
    thickness: f32,
    color: Color,
) {
    let mut points = trajectory
        .samples()
        .map(|s| area.to_screen(window, s.x_m, s.y_m.max(0.0)));
    let Some(mut prev) = points.next() else {
        return;
    };
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }

    let landing = trajectory.last();
    let end = area.to_screen(window, landing.x_m, landing.y_m.max(0.0));
    draw_circle(end.x, end.y, 5.0, color);
}
