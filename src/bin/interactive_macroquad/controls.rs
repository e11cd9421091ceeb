use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{ANGLE_RANGE_DEG, SPEED_RANGE_MPS};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) toggle_drag: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            toggle_drag: self.toggle_drag || other.toggle_drag,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        toggle_drag: is_key_pressed(KeyCode::D),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(360.0, 210.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Launch Angle",
                ANGLE_RANGE_DEG,
                &mut state.controls.angle_deg,
            );
            ui.slider(
                hash!(),
                "Initial Velocity",
                SPEED_RANGE_MPS,
                &mut state.controls.speed_mps,
            );
            ui.separator();
            if ui.button(None, "Air Drag (D)") {
                actions.toggle_drag = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            ui.label(
                None,
                if state.controls.drag_enabled {
                    "Drag: on"
                } else {
                    "Drag: off"
                },
            );
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }
    if actions.toggle_drag {
        state.toggle_drag();
    }
}
