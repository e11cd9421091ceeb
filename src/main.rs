use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dynamic_projectile::core::analytic::DragFreeFlight;
use dynamic_projectile::core::chart::{ChartSeries, render_svg};
use dynamic_projectile::core::config::{
    DEFAULT_CROSS_SECTION_M2, SEA_LEVEL_AIR_DENSITY_KGPM3, SPHERE_DRAG_COEFFICIENT,
    STANDARD_GRAVITY_MPS2,
};
use dynamic_projectile::{Environment, SimulationParameters, Simulator, integrate};

/// Simulate a projectile launched from the origin, with optional air drag.
#[derive(Parser, Debug)]
#[command(name = "dynamic_projectile")]
#[command(version)]
struct Args {
    /// Initial speed (m/s)
    #[arg(short, long, default_value_t = 20.0)]
    speed: f64,

    /// Launch angle above the horizon (degrees, 0-90)
    #[arg(short, long, default_value_t = 45.0, allow_negative_numbers = true)]
    angle: f64,

    /// Integration step (s)
    #[arg(long, default_value_t = 0.01)]
    time_step: f64,

    /// Simulation time budget (s)
    #[arg(long, default_value_t = 10.0)]
    max_time: f64,

    /// Enable quadratic air drag
    #[arg(long)]
    drag: bool,

    /// Gravitational acceleration (m/s^2)
    #[arg(long, default_value_t = STANDARD_GRAVITY_MPS2)]
    gravity: f64,

    /// Drag coefficient (dimensionless)
    #[arg(long, default_value_t = SPHERE_DRAG_COEFFICIENT)]
    drag_coefficient: f64,

    /// Air density (kg/m^3)
    #[arg(long, default_value_t = SEA_LEVEL_AIR_DENSITY_KGPM3)]
    air_density: f64,

    /// Cross-sectional area (m^2)
    #[arg(long, default_value_t = DEFAULT_CROSS_SECTION_M2)]
    cross_section: f64,

    /// Print every (t, x, y) sample
    #[arg(long)]
    samples: bool,

    /// Write an SVG chart; defaults to a timestamped file name
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    plot: Option<Option<PathBuf>>,

    /// Overlay the drag-free and drag runs on the chart
    #[arg(long, requires = "plot")]
    compare: bool,
}

impl Args {
    fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.speed, self.angle, self.time_step, self.max_time)
            .with_drag(self.drag)
            .with_environment(Environment {
                gravity_mps2: self.gravity,
                drag_coefficient: self.drag_coefficient,
                air_density_kgpm3: self.air_density,
                cross_section_m2: self.cross_section,
            })
    }
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.svg",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn print_samples(simulator: &Simulator) {
    println!("\n{:>10} {:>12} {:>12}", "t (s)", "x (m)", "y (m)");
    for sample in simulator.simulate().samples() {
        println!(
            "{:>10.4} {:>12.4} {:>12.4}",
            sample.time_s, sample.x_m, sample.y_m
        );
    }
}

fn write_plot(args: &Args, simulator: &Simulator, path: PathBuf) -> Result<()> {
    let params = simulator.params();
    let rendered = if args.compare {
        let plain = integrate(&params.with_drag(false))?;
        let dragged = integrate(&params.with_drag(true))?;
        render_svg(
            &path,
            &[
                ChartSeries {
                    label: "No drag",
                    trajectory: &plain,
                },
                ChartSeries {
                    label: "Air drag",
                    trajectory: &dragged,
                },
            ],
        )
    } else {
        render_svg(
            &path,
            &[ChartSeries {
                label: "Trajectory",
                trajectory: simulator.simulate(),
            }],
        )
    };
    rendered.with_context(|| format!("could not write chart to {}", path.display()))?;

    println!("Chart written to {}", path.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let simulator = Simulator::new(args.parameters())?;

    println!("Time of flight: {:.4} s", simulator.time_of_flight());
    println!("Horizontal distance: {:.4} m", simulator.max_range());
    println!("Maximum height: {:.4} m", simulator.max_height());
    if !args.drag {
        let analytic = DragFreeFlight::new(simulator.params());
        println!(
            "Closed form: {:.4} s, {:.4} m, {:.4} m",
            analytic.time_of_flight(),
            analytic.range(),
            analytic.max_height()
        );
    }
    if !simulator.simulate().landed() {
        println!("Still airborne when the {:.2} s budget ran out.", args.max_time);
    }

    if args.samples {
        print_samples(&simulator);
    }

    if let Some(plot) = args.plot.clone() {
        let path = plot.unwrap_or_else(default_plot_path);
        write_plot(&args, &simulator, path)?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
