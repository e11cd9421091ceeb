//! Two-dimensional projectile motion with optional quadratic air drag.
//!
//! The [`core::simulator`] module holds the integrator; the remaining modules
//! are shared by the CLI and the interactive viewer.

pub mod core;
pub mod error;

pub use crate::core::config::Environment;
pub use crate::core::simulator::{
    SimulationParameters, Simulator, SimulatorState, Trajectory, TrajectorySample, integrate,
};
pub use crate::error::{Result, SimulationError};
