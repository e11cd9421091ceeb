use macroquad::prelude::*;
use tracing::{error, warn};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, DRAG_ON_COLOR, GRID_COLOR, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, TRAJECTORY_COLOR,
    UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{PlotArea, draw_axis_tick_labels, draw_grid, draw_trajectory};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Dynamic Projectile Motion".to_string(),
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
            warn!("could not load '{UI_FONT_PATH}': {err}; falling back to default font");
            None
        }
    };

    let mut state = match AppRuntime::new() {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "initial launch controls rejected");
            return;
        }
    };

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        state.refresh();

        clear_background(BACKGROUND);
        draw_grid(area, GRID_COLOR);
        draw_axis_tick_labels(area, &state.window, ui_font.as_ref());

        let curve_color = if state.simulator.params().drag_enabled {
            DRAG_ON_COLOR
        } else {
            TRAJECTORY_COLOR
        };
        draw_trajectory(
            state.simulator.simulate(),
            &state.window,
            area,
            3.0,
            curve_color,
        );

        draw_hud(&state, area.left, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
