//! # Aero Perf
//!
//! International Standard Atmosphere profiles from sea level to 86 km and steady
//! level flight performance sweeps over a parabolic drag polar.

// Re-export the main types and functions
pub use atmosphere::{AtmosphereLayer, AtmosphereState};
pub use cli_api::{format_atmosphere, format_layers, format_performance, format_state, OutputFormat};
pub use config::{ParameterOverrides, PerformanceConfig, SweepConfig};
pub use error::{AeroError, AeroResult};
pub use layers::{LayerBand, LAYER_BANDS};
pub use performance::{
    minimum_thrust, AircraftParameters, PerformanceCalculator, PerformancePoint, PerformanceSummary,
};
pub use sampling::linspace;

// Module declarations
pub mod atmosphere;
pub mod cli_api;
pub mod config;
pub mod constants;
mod error;
pub mod layers;
pub mod performance;
pub mod plot;
pub mod sampling;
