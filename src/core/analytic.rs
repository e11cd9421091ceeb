use crate::core::simulator::SimulationParameters;

/// Closed-form flight from ground level without drag, used to sanity-check
/// the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFreeFlight {
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub gravity_mps2: f64,
}

impl DragFreeFlight {
    pub fn new(params: &SimulationParameters) -> Self {
        let theta = params.angle_deg.to_radians();
        Self {
            vx_mps: params.speed_mps * theta.cos(),
            vy_mps: params.speed_mps * theta.sin(),
            gravity_mps2: params.environment.gravity_mps2,
        }
    }

    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let x = self.vx_mps * time_s;
        let y = (self.vy_mps * time_s) - (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }

    pub fn time_of_flight(&self) -> f64 {
        2.0 * self.vy_mps / self.gravity_mps2
    }

    pub fn range(&self) -> f64 {
        self.vx_mps * self.time_of_flight()
    }

    pub fn max_height(&self) -> f64 {
        (self.vy_mps * self.vy_mps) / (2.0 * self.gravity_mps2)
    }
}
