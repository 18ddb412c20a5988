//! International Standard Atmosphere from sea level to 86 km.
//!
//! Temperature follows a 7-segment piecewise-linear lapse-rate profile. Pressure
//! is the barometric formula of each segment, referenced to the pressure at the
//! segment base. Those base pressures are chained from sea level upward once and
//! kept in a lazily built table. Density is the ideal gas relation evaluated
//! pointwise.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    G_ACCEL_MPS2, MAX_ALTITUDE_M, MOLAR_MASS_AIR, R_UNIVERSAL, SEA_LEVEL_PRESSURE_PA,
    SEA_LEVEL_TEMPERATURE_K,
};
use crate::error::{AeroError, AeroResult};
use crate::sampling::linspace;

/// ISA layer definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereLayer {
    /// Base altitude of this layer (m)
    pub base_altitude: f64,
    /// Top altitude of this layer (m), inclusive
    pub top_altitude: f64,
    /// Temperature at the layer base (K)
    pub base_temperature: f64,
    /// Temperature lapse rate (K/m)
    pub lapse_rate: f64,
}

impl AtmosphereLayer {
    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate == 0.0
    }

    fn temperature_at(&self, altitude_m: f64) -> f64 {
        if self.is_isothermal() {
            self.base_temperature
        } else {
            self.base_temperature + self.lapse_rate * (altitude_m - self.base_altitude)
        }
    }

    /// Pressure at `altitude_m` given the pressure at this layer's base.
    fn pressure_at(&self, altitude_m: f64, base_pressure: f64) -> f64 {
        let height_diff = altitude_m - self.base_altitude;
        let gm_over_r = G_ACCEL_MPS2 * MOLAR_MASS_AIR / R_UNIVERSAL;

        if self.is_isothermal() {
            base_pressure * (-gm_over_r * height_diff / self.base_temperature).exp()
        } else {
            let temp_ratio = 1.0 + self.lapse_rate * height_diff / self.base_temperature;
            base_pressure * temp_ratio.powf(-gm_over_r / self.lapse_rate)
        }
    }
}

/// ISA layers, bottom to top
static ISA_LAYERS: [AtmosphereLayer; 7] = [
    // Troposphere (0 - 11 km)
    AtmosphereLayer {
        base_altitude: 0.0,
        top_altitude: 11000.0,
        base_temperature: SEA_LEVEL_TEMPERATURE_K,
        lapse_rate: -0.0065,        // -6.5 K/km
    },
    // Tropopause (11 - 20 km)
    AtmosphereLayer {
        base_altitude: 11000.0,
        top_altitude: 20000.0,
        base_temperature: 216.65,   // -56.5°C
        lapse_rate: 0.0,            // Isothermal
    },
    // Stratosphere 1 (20 - 32 km)
    AtmosphereLayer {
        base_altitude: 20000.0,
        top_altitude: 32000.0,
        base_temperature: 216.65,
        lapse_rate: 0.001,          // +1 K/km
    },
    // Stratosphere 2 (32 - 47 km)
    AtmosphereLayer {
        base_altitude: 32000.0,
        top_altitude: 47000.0,
        base_temperature: 228.65,   // -44.5°C
        lapse_rate: 0.0028,         // +2.8 K/km
    },
    // Stratopause (47 - 51 km)
    AtmosphereLayer {
        base_altitude: 47000.0,
        top_altitude: 51000.0,
        base_temperature: 270.65,   // -2.5°C
        lapse_rate: 0.0,            // Isothermal
    },
    // Mesosphere 1 (51 - 71 km)
    AtmosphereLayer {
        base_altitude: 51000.0,
        top_altitude: 71000.0,
        base_temperature: 270.65,
        lapse_rate: -0.0028,        // -2.8 K/km
    },
    // Mesosphere 2 (71 - 86 km)
    AtmosphereLayer {
        base_altitude: 71000.0,
        top_altitude: MAX_ALTITUDE_M,
        base_temperature: 214.65,   // -58.5°C
        lapse_rate: -0.002,         // -2.0 K/km
    },
];

/// Pressure at the base of each layer (Pa), chained from sea level upward.
static BASE_PRESSURES: Lazy<[f64; 7]> = Lazy::new(|| {
    let mut pressures = [0.0; 7];
    let mut pressure = SEA_LEVEL_PRESSURE_PA;
    for (slot, layer) in pressures.iter_mut().zip(ISA_LAYERS.iter()) {
        *slot = pressure;
        pressure = layer.pressure_at(layer.top_altitude, pressure);
    }
    tracing::debug!(?pressures, "built ISA base pressure table");
    pressures
});

/// Atmospheric state at one altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereState {
    /// Altitude (m)
    pub altitude: f64,
    /// Temperature (K)
    pub temperature: f64,
    /// Pressure (Pa)
    pub pressure: f64,
    /// Density (kg/m³)
    pub density: f64,
}

/// All ISA layers, bottom to top.
pub fn layers() -> &'static [AtmosphereLayer] {
    &ISA_LAYERS
}

/// Pressure at the base of layer `index` (Pa).
pub fn base_pressure(index: usize) -> Option<f64> {
    BASE_PRESSURES.get(index).copied()
}

/// Index of the layer whose formula applies at `altitude_m`.
///
/// Boundaries belong to the lower layer: 11000 m is evaluated with the
/// troposphere formula. Altitudes above 86 km extrapolate the top layer and
/// negative altitudes extrapolate the troposphere.
pub fn layer_index(altitude_m: f64) -> usize {
    ISA_LAYERS
        .iter()
        .position(|layer| altitude_m <= layer.top_altitude)
        .unwrap_or(ISA_LAYERS.len() - 1)
}

/// Temperature (K) at `altitude_m`.
pub fn temperature(altitude_m: f64) -> f64 {
    ISA_LAYERS[layer_index(altitude_m)].temperature_at(altitude_m)
}

/// Pressure (Pa) at `altitude_m`.
pub fn pressure(altitude_m: f64) -> f64 {
    let index = layer_index(altitude_m);
    ISA_LAYERS[index].pressure_at(altitude_m, BASE_PRESSURES[index])
}

/// Density (kg/m³) from the ideal gas relation ρ = P·M/(R·T).
pub fn density(altitude_m: f64) -> f64 {
    density_from(pressure(altitude_m), temperature(altitude_m))
}

#[inline]
fn density_from(pressure_pa: f64, temperature_k: f64) -> f64 {
    pressure_pa * MOLAR_MASS_AIR / (R_UNIVERSAL * temperature_k)
}

/// Evaluate temperature, pressure and density at `altitude_m`.
pub fn evaluate(altitude_m: f64) -> AtmosphereState {
    let index = layer_index(altitude_m);
    let layer = &ISA_LAYERS[index];
    let temperature = layer.temperature_at(altitude_m);
    let pressure = layer.pressure_at(altitude_m, BASE_PRESSURES[index]);

    AtmosphereState {
        altitude: altitude_m,
        temperature,
        pressure,
        density: density_from(pressure, temperature),
    }
}

/// Like [`evaluate`], but rejects altitudes outside [0, 86000] m.
pub fn try_evaluate(altitude_m: f64) -> AeroResult<AtmosphereState> {
    if !altitude_m.is_finite() || !(0.0..=MAX_ALTITUDE_M).contains(&altitude_m) {
        return Err(AeroError::AltitudeOutOfRange(altitude_m));
    }
    Ok(evaluate(altitude_m))
}

/// Evaluate every altitude in `altitudes`.
pub fn profile(altitudes: &[f64]) -> Vec<AtmosphereState> {
    altitudes.iter().map(|&h| evaluate(h)).collect()
}

/// Profile over `samples` evenly spaced altitudes from sea level to 86 km.
pub fn standard_profile(samples: usize) -> AeroResult<Vec<AtmosphereState>> {
    profile_to(MAX_ALTITUDE_M, samples)
}

/// Profile over `samples` evenly spaced altitudes from sea level to `max_altitude_m`.
pub fn profile_to(max_altitude_m: f64, samples: usize) -> AeroResult<Vec<AtmosphereState>> {
    if !(0.0..=MAX_ALTITUDE_M).contains(&max_altitude_m) {
        return Err(AeroError::AltitudeOutOfRange(max_altitude_m));
    }
    let altitudes = linspace(0.0, max_altitude_m, samples)?;
    tracing::debug!(samples, max_altitude_m, "evaluating ISA profile");
    Ok(profile(&altitudes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level() {
        let state = evaluate(0.0);
        assert_eq!(state.temperature, 288.15);
        assert_eq!(state.pressure, 101325.0);
        assert!((state.density - 1.225).abs() < 1e-4);
    }

    #[test]
    fn test_boundaries_use_lower_layer() {
        assert_eq!(layer_index(0.0), 0);
        assert_eq!(layer_index(11000.0), 0);
        assert_eq!(layer_index(11000.5), 1);
        assert_eq!(layer_index(20000.0), 1);
        assert_eq!(layer_index(47000.0), 3);
        assert_eq!(layer_index(71000.0), 5);
        assert_eq!(layer_index(86000.0), 6);
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        assert_eq!(layer_index(-100.0), 0);
        assert_eq!(layer_index(90000.0), 6);
        assert!(temperature(-100.0) > 288.15);
    }

    #[test]
    fn test_base_pressures_chain() {
        assert_eq!(base_pressure(0), Some(101325.0));
        // Published ISA values at 11, 20, 32, 47, 51 and 71 km
        let expected = [22632.1, 5474.89, 868.02, 110.91, 66.94, 3.96];
        for (index, &published) in expected.iter().enumerate() {
            let computed = base_pressure(index + 1).unwrap();
            assert!(
                (computed - published).abs() / published < 1e-3,
                "layer {} base pressure {} vs {}",
                index + 1,
                computed,
                published
            );
        }
        assert!(base_pressure(7).is_none());
    }

    #[test]
    fn test_temperature_continuous_at_boundaries() {
        for layer in layers().iter().take(6) {
            let below = temperature(layer.top_altitude);
            let above = temperature(layer.top_altitude + 1e-6);
            assert!((below - above).abs() < 1e-6);
        }
    }

    #[test]
    fn test_stratosphere_warms() {
        assert!(temperature(30000.0) > temperature(20000.0));
        assert!((temperature(32000.0) - 228.65).abs() < 1e-9);
        assert!((temperature(47000.0) - 270.65).abs() < 1e-9);
    }

    #[test]
    fn test_try_evaluate_range() {
        assert!(try_evaluate(0.0).is_ok());
        assert!(try_evaluate(86000.0).is_ok());
        assert!(matches!(try_evaluate(-1.0), Err(AeroError::AltitudeOutOfRange(_))));
        assert!(try_evaluate(86000.1).is_err());
        assert!(try_evaluate(f64::NAN).is_err());
    }

    #[test]
    fn test_standard_profile() {
        let states = standard_profile(500).unwrap();
        assert_eq!(states.len(), 500);
        assert_eq!(states[0].altitude, 0.0);
        assert_eq!(states[499].altitude, 86000.0);
        assert!(profile_to(90000.0, 10).is_err());
    }
}
