use aero_perf::constants::{DEFAULT_ALTITUDE_SAMPLES, MAX_ALTITUDE_M};
use aero_perf::{
    atmosphere, cli_api, plot, AircraftParameters, ParameterOverrides, PerformanceCalculator,
    PerformanceConfig, LAYER_BANDS,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aero-cli")]
#[command(version)]
#[command(about = "Standard atmosphere profiles and level flight performance", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tabulate and plot the standard atmosphere from sea level upward
    Atmosphere {
        /// Number of altitude samples
        #[arg(short = 'n', long, default_value_t = DEFAULT_ALTITUDE_SAMPLES)]
        samples: usize,

        /// Top of the profile (meters, at most 86000)
        #[arg(long, default_value_t = MAX_ALTITUDE_M)]
        max_altitude: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every sample in table output
        #[arg(long)]
        full: bool,

        /// Write the annotated profile plot to this file (.png or .svg)
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// Atmospheric state at a single altitude
    State {
        /// Altitude (meters, 0 to 86000)
        #[arg(short = 'a', long, allow_negative_numbers = true)]
        altitude: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// List the atmospheric layers
    Layers,

    /// Sweep airspeeds in steady level flight
    Performance {
        /// JSON file with "aircraft" and "sweep" sections
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Aircraft weight (N)
        #[arg(long)]
        weight: Option<f64>,

        /// Air density (kg/m³)
        #[arg(long, conflicts_with = "altitude")]
        density: Option<f64>,

        /// Take air density from the standard atmosphere at this altitude (m)
        #[arg(long)]
        altitude: Option<f64>,

        /// Wing area (m²)
        #[arg(long)]
        wing_area: Option<f64>,

        /// Wingspan (m)
        #[arg(long)]
        span: Option<f64>,

        /// Oswald efficiency factor
        #[arg(long)]
        oswald: Option<f64>,

        /// Zero-lift drag coefficient
        #[arg(long)]
        cd0: Option<f64>,

        /// Lowest airspeed (m/s)
        #[arg(long, allow_negative_numbers = true)]
        v_min: Option<f64>,

        /// Highest airspeed (m/s)
        #[arg(long, allow_negative_numbers = true)]
        v_max: Option<f64>,

        /// Number of airspeed samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Explicit airspeeds (m/s), comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        speeds: Option<Vec<f64>>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every sample in table output
        #[arg(long)]
        full: bool,

        /// Write the thrust required plot to this file (.png or .svg)
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// Display model information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl From<OutputFormat> for cli_api::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => cli_api::OutputFormat::Table,
            OutputFormat::Csv => cli_api::OutputFormat::Csv,
            OutputFormat::Json => cli_api::OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Atmosphere {
            samples, max_altitude, output, full, plot: plot_path
        } => {
            let states = atmosphere::profile_to(max_altitude, samples)?;
            println!("{}", cli_api::format_atmosphere(&states, output.into(), full)?);

            if let Some(path) = plot_path {
                plot::render_atmosphere_profiles(&path, &states, LAYER_BANDS)?;
            }
        },

        Commands::State { altitude, output } => {
            let state = atmosphere::try_evaluate(altitude)?;
            println!("{}", cli_api::format_state(&state, output.into())?);
        },

        Commands::Layers => {
            println!("{}", cli_api::format_layers(LAYER_BANDS));
        },

        Commands::Performance {
            config, weight, density, altitude, wing_area, span, oswald, cd0,
            v_min, v_max, samples, speeds, output, full, plot: plot_path
        } => {
            let mut settings = match config {
                Some(path) => PerformanceConfig::from_file(&path)?,
                None => PerformanceConfig::default(),
            };
            settings.apply(&ParameterOverrides {
                weight,
                air_density: density,
                wing_area,
                wingspan: span,
                oswald_efficiency: oswald,
                zero_lift_drag: cd0,
                v_min,
                v_max,
                samples,
                speeds,
            });

            let aircraft: AircraftParameters = match altitude {
                Some(h) => settings.aircraft.at_altitude(h)?,
                None => settings.aircraft,
            };

            let calculator = PerformanceCalculator::new(aircraft)?;
            let airspeeds = settings.sweep.airspeeds()?;
            let points = calculator.sweep(&airspeeds)?;
            let summary = calculator.summarize(&points);

            if let Some(s) = &summary {
                if (s.min_thrust_airspeed - airspeeds[0]).abs() < f64::EPSILON
                    || (s.min_thrust_airspeed - airspeeds[airspeeds.len() - 1]).abs() < f64::EPSILON
                {
                    tracing::warn!(
                        airspeed = s.min_thrust_airspeed,
                        "minimum thrust required lies on the edge of the sweep"
                    );
                }
            }

            println!(
                "{}",
                cli_api::format_performance(calculator.parameters(), summary.as_ref(), &points, output.into(), full)?
            );

            if let Some(path) = plot_path {
                plot::render_thrust_required(&path, &points)?;
            }
        },

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║          AERO PERF v{:<8}           ║", env!("CARGO_PKG_VERSION"));
            println!("╠════════════════════════════════════════╣");
            println!("║ International Standard Atmosphere      ║");
            println!("║ • 7 layers, sea level to 86 km         ║");
            println!("║ • Temperature, pressure, density       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Steady level flight performance        ║");
            println!("║ • Parabolic drag polar                 ║");
            println!("║ • CL, CD, L/D, thrust required         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Output: table, CSV, JSON, PNG/SVG plot ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}
