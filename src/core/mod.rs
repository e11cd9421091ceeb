pub mod analytic;
pub mod chart;
pub mod config;
pub mod simulator;
pub mod window;
