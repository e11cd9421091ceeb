use dynamic_projectile::core::window::PlotWindow;
use dynamic_projectile::{Result, SimulationParameters, Simulator};
use tracing::{debug, warn};

use crate::constants::{INITIAL_ANGLE_DEG, INITIAL_SPEED_MPS, MAX_TIME_S, TIME_STEP_S};

/// Values the user edits through the control panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LaunchControls {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) drag_enabled: bool,
}

impl LaunchControls {
    pub(crate) fn initial() -> Self {
        Self {
            speed_mps: INITIAL_SPEED_MPS,
            angle_deg: INITIAL_ANGLE_DEG,
            drag_enabled: false,
        }
    }

    pub(crate) fn parameters(self) -> SimulationParameters {
        SimulationParameters::new(
            f64::from(self.speed_mps),
            f64::from(self.angle_deg),
            TIME_STEP_S,
            MAX_TIME_S,
        )
        .with_drag(self.drag_enabled)
    }
}

pub(crate) struct AppRuntime {
    pub(crate) controls: LaunchControls,
    pub(crate) simulator: Simulator,
    pub(crate) window: PlotWindow,
    pub(crate) status_line: String,
    applied: LaunchControls,
}

impl AppRuntime {
    pub(crate) fn new() -> Result<Self> {
        let controls = LaunchControls::initial();
        let simulator = Simulator::new(controls.parameters())?;
        let window = PlotWindow::fit(simulator.simulate());
        Ok(Self {
            controls,
            simulator,
            window,
            status_line: "Ready".to_string(),
            applied: controls,
        })
    }

    pub(crate) fn toggle_drag(&mut self) {
        self.controls.drag_enabled = !self.controls.drag_enabled;
    }

    pub(crate) fn reset(&mut self) {
        self.controls = LaunchControls::initial();
    }

    /// Re-simulates and rescales the plot when the controls moved since the
    /// last applied run. Returns whether a new trajectory was produced.
    pub(crate) fn refresh(&mut self) -> bool {
        if self.controls == self.applied {
            return false;
        }

        match Simulator::new(self.controls.parameters()) {
            Ok(simulator) => {
                self.window = PlotWindow::fit(simulator.simulate());
                self.simulator = simulator;
                self.applied = self.controls;
                self.status_line = if self.controls.drag_enabled {
                    "Air drag on".to_string()
                } else {
                    "Air drag off".to_string()
                };
                debug!(controls = ?self.controls, "trajectory refreshed");
                true
            }
            Err(err) => {
                warn!(%err, "keeping previous trajectory");
                self.controls = self.applied;
                self.status_line = err.to_string();
                false
            }
        }
    }
}
