use macroquad::prelude::*;

use crate::constants::TITLE_Y;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text("Projectile Motion", left, TITLE_Y, 30, header_color, font);
    draw_ui_text(
        "Sliders set angle and velocity | D toggles air drag | R resets",
        left,
        TITLE_Y + 30.0,
        18,
        DARKGRAY,
        font,
    );

    let params = state.simulator.params();
    draw_ui_text(
        &format!(
            "Angle: {:.1} deg | Velocity: {:.1} m/s | Drag: {}",
            params.angle_deg,
            params.speed_mps,
            if params.drag_enabled { "on" } else { "off" }
        ),
        left,
        screen_h - 45.0,
        24,
        header_color,
        font,
    );
    draw_ui_text(
        &format!(
            "Flight: {:.2} s | Range: {:.2} m | Max height: {:.2} m | {}",
            state.simulator.time_of_flight(),
            state.simulator.max_range().max(0.0),
            state.simulator.max_height(),
            state.status_line
        ),
        left,
        screen_h - 14.0,
        20,
        BLUE,
        font,
    );
}
