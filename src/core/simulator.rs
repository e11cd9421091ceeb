use std::sync::OnceLock;

use tracing::debug;

use crate::core::config::Environment;
use crate::error::{Result, SimulationError};

/// Upper bound on the number of samples reserved before integrating.
const MAX_PRESIZED_SAMPLES: usize = 1 << 20;

/// Launch and integration settings for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub time_step_s: f64,
    pub max_time_s: f64,
    pub drag_enabled: bool,
    pub environment: Environment,
}

impl SimulationParameters {
    /// Drag-free parameters under the default [`Environment`].
    pub fn new(speed_mps: f64, angle_deg: f64, time_step_s: f64, max_time_s: f64) -> Self {
        Self {
            speed_mps,
            angle_deg,
            time_step_s,
            max_time_s,
            drag_enabled: false,
            environment: Environment::default(),
        }
    }

    pub fn with_drag(mut self, drag_enabled: bool) -> Self {
        self.drag_enabled = drag_enabled;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Checks the launch and step settings. Environment constants are trusted.
    pub fn validate(&self) -> Result<()> {
        if !self.speed_mps.is_finite() || self.speed_mps < 0.0 {
            return Err(SimulationError::invalid(
                "speed_mps",
                format!("initial speed must be a finite value >= 0, got {}", self.speed_mps),
            ));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(SimulationError::invalid(
                "angle_deg",
                format!("launch angle must be between 0 and 90 degrees, got {}", self.angle_deg),
            ));
        }
        if !self.time_step_s.is_finite() || self.time_step_s <= 0.0 {
            return Err(SimulationError::invalid(
                "time_step_s",
                format!("time step must be finite and greater than zero, got {}", self.time_step_s),
            ));
        }
        if !self.max_time_s.is_finite() || self.max_time_s <= 0.0 {
            return Err(SimulationError::invalid(
                "max_time_s",
                format!("maximum time must be finite and greater than zero, got {}", self.max_time_s),
            ));
        }
        Ok(())
    }

    fn expected_samples(&self) -> usize {
        let steps = (self.max_time_s / self.time_step_s).ceil();
        if steps < MAX_PRESIZED_SAMPLES as f64 {
            steps as usize + 1
        } else {
            MAX_PRESIZED_SAMPLES
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Time/position history of one run, stored as three lockstep sequences.
///
/// Never empty: the first sample is always `(0, 0, 0)`. When the projectile
/// reached the ground, the last sample is the first one with `y < 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    landed: bool,
}

impl Trajectory {
    fn with_capacity(capacity: usize) -> Self {
        let mut trajectory = Self {
            times: Vec::with_capacity(capacity),
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
            landed: false,
        };
        trajectory.push(0.0, 0.0, 0.0);
        trajectory
    }

    fn push(&mut self, time_s: f64, x_m: f64, y_m: f64) {
        self.times.push(time_s);
        self.xs.push(x_m);
        self.ys.push(y_m);
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Whether the run ended by crossing below ground rather than by the time budget.
    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn samples(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        self.times
            .iter()
            .zip(&self.xs)
            .zip(&self.ys)
            .map(|((&time_s, &x_m), &y_m)| TrajectorySample { time_s, x_m, y_m })
    }

    pub fn last(&self) -> TrajectorySample {
        let idx = self.len() - 1;
        TrajectorySample {
            time_s: self.times[idx],
            x_m: self.xs[idx],
            y_m: self.ys[idx],
        }
    }

    pub fn max_height(&self) -> f64 {
        self.ys.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_range(&self) -> f64 {
        self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn time_of_flight(&self) -> f64 {
        self.last().time_s
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.times, self.xs, self.ys)
    }
}

/// Acceleration from quadratic drag on a unit mass, opposing the velocity.
fn drag_acceleration(vx: f64, vy: f64, environment: &Environment) -> (f64, f64) {
    let speed = vx.hypot(vy);
    if speed > 0.0 {
        let force = environment.drag_factor() * speed * speed;
        (-force * vx / speed, -force * vy / speed)
    } else {
        (0.0, 0.0)
    }
}

/// Validates the parameters, then runs the semi-implicit Euler integration
/// and returns a fresh trajectory.
///
/// Velocity is advanced first and the updated velocity moves the position.
/// The loop stops at the first sample below ground (kept in the output) or
/// once `max_time_s` is reached.
pub fn integrate(params: &SimulationParameters) -> Result<Trajectory> {
    params.validate()?;
    Ok(run_euler(params))
}

/// Integration loop proper. Terminates only for validated parameters.
fn run_euler(params: &SimulationParameters) -> Trajectory {
    let theta = params.angle_deg.to_radians();
    let dt = params.time_step_s;
    let env = &params.environment;

    let mut vx = params.speed_mps * theta.cos();
    let mut vy = params.speed_mps * theta.sin();
    let mut t = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;

    let mut trajectory = Trajectory::with_capacity(params.expected_samples());

    while t < params.max_time_s && y >= 0.0 {
        let (ax_drag, ay_drag) = if params.drag_enabled {
            drag_acceleration(vx, vy, env)
        } else {
            (0.0, 0.0)
        };

        let ax = ax_drag;
        let ay = -env.gravity_mps2 + ay_drag;
        vx += ax * dt;
        vy += ay * dt;
        x += vx * dt;
        y += vy * dt;
        t += dt;

        trajectory.push(t, x, y);

        if y < 0.0 {
            trajectory.landed = true;
            break;
        }
    }

    debug!(
        samples = trajectory.len(),
        landed = trajectory.landed,
        flight_time_s = t,
        range_m = x,
        drag = params.drag_enabled,
        "trajectory integrated"
    );

    trajectory
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorState {
    Unsimulated,
    Simulated,
}

/// Validated parameters plus a lazily computed, write-once trajectory.
#[derive(Debug)]
pub struct Simulator {
    params: SimulationParameters,
    trajectory: OnceLock<Trajectory>,
}

impl Simulator {
    pub fn new(params: SimulationParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            trajectory: OnceLock::new(),
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn state(&self) -> SimulatorState {
        if self.trajectory.get().is_some() {
            SimulatorState::Simulated
        } else {
            SimulatorState::Unsimulated
        }
    }

    /// Integrates on first use; every later call returns the cached trajectory.
    pub fn simulate(&self) -> &Trajectory {
        self.trajectory.get_or_init(|| run_euler(&self.params))
    }

    pub fn max_height(&self) -> f64 {
        self.simulate().max_height()
    }

    pub fn max_range(&self) -> f64 {
        self.simulate().max_range()
    }

    pub fn time_of_flight(&self) -> f64 {
        self.simulate().time_of_flight()
    }

    /// Consumes the simulator, integrating first if nothing is cached yet.
    pub fn into_trajectory(self) -> Trajectory {
        let params = self.params;
        self.trajectory
            .into_inner()
            .unwrap_or_else(|| run_euler(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::STANDARD_GRAVITY_MPS2;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn reference_shot() -> SimulationParameters {
        SimulationParameters::new(20.0, 45.0, 0.01, 10.0)
    }

    #[test]
    fn rejects_out_of_range_launch_settings() {
        let cases = [
            SimulationParameters::new(-1.0, 45.0, 0.01, 10.0),
            SimulationParameters::new(20.0, 91.0, 0.01, 10.0),
            SimulationParameters::new(20.0, -1.0, 0.01, 10.0),
            SimulationParameters::new(20.0, 45.0, 0.0, 10.0),
            SimulationParameters::new(20.0, 45.0, 0.01, 0.0),
        ];
        for params in cases {
            let err = Simulator::new(params).expect_err("construction should fail");
            assert!(
                matches!(err, SimulationError::InvalidParameter { .. }),
                "unexpected error for {params:?}: {err}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        let cases = [
            SimulationParameters::new(f64::NAN, 45.0, 0.01, 10.0),
            SimulationParameters::new(20.0, f64::NAN, 0.01, 10.0),
            SimulationParameters::new(20.0, 45.0, f64::NAN, 10.0),
            SimulationParameters::new(20.0, 45.0, 0.01, f64::INFINITY),
            SimulationParameters::new(f64::INFINITY, 45.0, 0.01, 10.0),
        ];
        for params in cases {
            assert!(Simulator::new(params).is_err(), "accepted {params:?}");
        }
    }

    #[test]
    fn accepts_boundary_values() {
        for params in [
            SimulationParameters::new(0.0, 0.0, 0.01, 10.0),
            SimulationParameters::new(100.0, 90.0, 0.01, 10.0),
        ] {
            assert!(Simulator::new(params).is_ok(), "rejected {params:?}");
        }
    }

    #[test]
    fn drag_constants_are_not_validated() {
        let env = Environment {
            drag_coefficient: -3.0,
            ..Environment::default()
        };
        let params = reference_shot().with_drag(true).with_environment(env);
        assert!(Simulator::new(params).is_ok());
    }

    #[test]
    fn sequences_share_length_and_start_at_origin() {
        let trajectory = run_euler(&reference_shot());
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.times().len(), trajectory.xs().len());
        assert_eq!(trajectory.xs().len(), trajectory.ys().len());

        let first = trajectory.samples().next().expect("first sample");
        assert_eq!(
            first,
            TrajectorySample {
                time_s: 0.0,
                x_m: 0.0,
                y_m: 0.0
            }
        );
    }

    #[test]
    fn reference_shot_matches_analytic_flight() {
        let simulator = Simulator::new(reference_shot()).expect("valid params");

        assert_close(simulator.time_of_flight(), 2.88, 0.02);
        assert_close(simulator.max_range(), 40.8, 0.3);
        assert_close(simulator.max_height(), 10.2, 0.15);
        assert!(simulator.simulate().landed());
    }

    #[test]
    fn keeps_the_sample_that_crosses_the_ground() {
        let trajectory = run_euler(&reference_shot());
        let ys = trajectory.ys();
        let (last, rest) = ys.split_last().expect("non-empty");
        assert!(*last < 0.0);
        assert!(rest.iter().all(|y| *y >= 0.0));
    }

    #[test]
    fn times_advance_by_one_step() {
        let params = reference_shot();
        let trajectory = run_euler(&params);
        for (idx, window) in trajectory.times().windows(2).enumerate() {
            assert!(window[1] > window[0]);
            assert_close(window[1], (idx + 1) as f64 * params.time_step_s, 1e-9);
        }
    }

    #[test]
    fn stops_at_the_time_budget_when_still_airborne() {
        let params = SimulationParameters::new(50.0, 80.0, 0.01, 1.0);
        let trajectory = run_euler(&params);
        assert!(!trajectory.landed());
        assert!(trajectory.time_of_flight() >= params.max_time_s);
        assert!(trajectory.time_of_flight() < params.max_time_s + 2.0 * params.time_step_s);
    }

    #[test]
    fn zero_speed_with_drag_falls_straight_down() {
        let params = SimulationParameters::new(0.0, 30.0, 0.01, 10.0).with_drag(true);
        let trajectory = run_euler(&params);
        assert!(trajectory.xs().iter().all(|x| *x == 0.0));
        assert!(trajectory.ys().iter().all(|y| y.is_finite()));
        assert!(trajectory.last().y_m < 0.0);
    }

    #[test]
    fn drag_opposes_velocity() {
        let env = Environment::default();
        let (ax, ay) = drag_acceleration(3.0, -4.0, &env);
        let expected = env.drag_factor() * 25.0;
        assert_close(ax, -expected * 0.6, 1e-12);
        assert_close(ay, expected * 0.8, 1e-12);
        assert_eq!(drag_acceleration(0.0, 0.0, &env), (0.0, 0.0));
    }

    #[test]
    fn first_step_uses_updated_velocity() {
        let params = SimulationParameters::new(10.0, 90.0, 0.1, 1.0);
        let trajectory = run_euler(&params);
        let vy1 = 10.0 - STANDARD_GRAVITY_MPS2 * 0.1;
        assert_close(trajectory.ys()[1], vy1 * 0.1, 1e-12);
    }

    #[test]
    fn accessors_fill_cache_once() {
        let simulator = Simulator::new(reference_shot()).expect("valid params");
        assert_eq!(simulator.state(), SimulatorState::Unsimulated);

        let height = simulator.max_height();
        assert_eq!(simulator.state(), SimulatorState::Simulated);
        let cached: *const Trajectory = simulator.simulate();

        assert_eq!(simulator.max_height(), height);
        assert_eq!(simulator.max_range(), simulator.max_range());
        assert_eq!(simulator.time_of_flight(), simulator.time_of_flight());
        assert!(std::ptr::eq(cached, simulator.simulate()));
    }

    #[test]
    fn cached_trajectory_matches_fresh_integration() {
        let params = reference_shot().with_drag(true);
        let simulator = Simulator::new(params).expect("valid params");
        let fresh = integrate(&params).expect("valid params");
        assert_eq!(simulator.simulate(), &fresh);
        assert_eq!(simulator.into_trajectory(), fresh);
    }

    #[test]
    fn integrate_rejects_parameters_that_would_never_terminate() {
        let cases = [
            SimulationParameters::new(0.0, 0.0, 0.0, 10.0),
            SimulationParameters::new(20.0, 45.0, 0.01, f64::INFINITY),
            SimulationParameters::new(20.0, 45.0, f64::NAN, 10.0),
        ];
        for params in cases {
            let err = integrate(&params).expect_err("unbounded loop must be rejected");
            assert!(
                matches!(err, SimulationError::InvalidParameter { .. }),
                "unexpected error for {params:?}: {err}"
            );
        }
    }

    #[test]
    fn presize_is_capped() {
        let params = SimulationParameters::new(1.0, 45.0, 1e-12, 1e6);
        assert_eq!(params.expected_samples(), MAX_PRESIZED_SAMPLES);
        assert_eq!(reference_shot().expected_samples(), 1001);
    }
}
