//! Performance sweep configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_AIRSPEED_SAMPLES, DEFAULT_MAX_AIRSPEED_MPS, DEFAULT_MIN_AIRSPEED_MPS};
use crate::error::{AeroError, AeroResult};
use crate::performance::AircraftParameters;
use crate::sampling::linspace;

/// Airspeed sweep definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub v_min: f64,                 // m/s
    pub v_max: f64,                 // m/s
    pub samples: usize,
    /// Explicit airspeeds; replaces the linear range when present
    pub speeds: Option<Vec<f64>>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            v_min: DEFAULT_MIN_AIRSPEED_MPS,
            v_max: DEFAULT_MAX_AIRSPEED_MPS,
            samples: DEFAULT_AIRSPEED_SAMPLES,
            speeds: None,
        }
    }
}

impl SweepConfig {
    pub fn airspeeds(&self) -> AeroResult<Vec<f64>> {
        match &self.speeds {
            Some(speeds) if speeds.is_empty() => Err(AeroError::InvalidSampling(
                "explicit airspeed list is empty".to_string(),
            )),
            Some(speeds) => Ok(speeds.clone()),
            None => linspace(self.v_min, self.v_max, self.samples),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    pub aircraft: AircraftParameters,
    pub sweep: SweepConfig,
}

impl PerformanceConfig {
    pub fn from_file(path: &Path) -> AeroResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AeroError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded performance config");
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> AeroResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn apply(&mut self, overrides: &ParameterOverrides) {
        let aircraft = &mut self.aircraft;
        let sweep = &mut self.sweep;

        set_if(&mut aircraft.weight, overrides.weight);
        set_if(&mut aircraft.air_density, overrides.air_density);
        set_if(&mut aircraft.wing_area, overrides.wing_area);
        set_if(&mut aircraft.wingspan, overrides.wingspan);
        set_if(&mut aircraft.oswald_efficiency, overrides.oswald_efficiency);
        set_if(&mut aircraft.zero_lift_drag, overrides.zero_lift_drag);
        set_if(&mut sweep.v_min, overrides.v_min);
        set_if(&mut sweep.v_max, overrides.v_max);
        set_if(&mut sweep.samples, overrides.samples);
        if let Some(speeds) = &overrides.speeds {
            sweep.speeds = Some(speeds.clone());
        }
    }
}

fn set_if<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ParameterOverrides {
    pub weight: Option<f64>,
    pub air_density: Option<f64>,
    pub wing_area: Option<f64>,
    pub wingspan: Option<f64>,
    pub oswald_efficiency: Option<f64>,
    pub zero_lift_drag: Option<f64>,
    pub v_min: Option<f64>,
    pub v_max: Option<f64>,
    pub samples: Option<usize>,
    pub speeds: Option<Vec<f64>>,
}
