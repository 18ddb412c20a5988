//! Steady level flight performance with a parabolic drag polar.
//!
//! In level flight lift equals weight, so for a given airspeed
//!
//! ```text
//! CL  = W / (0.5 · ρ · V² · S)
//! CD  = CD0 + k · CL²,   k = 1 / (π · e · AR),   AR = b² / S
//! L/D = CL / CD
//! TR  = W / (L/D)
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::atmosphere;
use crate::constants::{
    DEFAULT_OSWALD_EFFICIENCY, DEFAULT_WEIGHT_N, DEFAULT_WINGSPAN_M, DEFAULT_WING_AREA_M2,
    DEFAULT_ZERO_LIFT_DRAG, STANDARD_AIR_DENSITY,
};
use crate::error::{AeroError, AeroResult};

/// Aircraft and flight condition parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AircraftParameters {
    pub weight: f64,              // N
    pub air_density: f64,         // kg/m³
    pub wing_area: f64,           // m²
    pub wingspan: f64,            // m
    pub oswald_efficiency: f64,
    pub zero_lift_drag: f64,      // CD0
}

impl Default for AircraftParameters {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT_N,
            air_density: STANDARD_AIR_DENSITY,
            wing_area: DEFAULT_WING_AREA_M2,
            wingspan: DEFAULT_WINGSPAN_M,
            oswald_efficiency: DEFAULT_OSWALD_EFFICIENCY,
            zero_lift_drag: DEFAULT_ZERO_LIFT_DRAG,
        }
    }
}

impl AircraftParameters {
    /// Same aircraft flying in ISA air at `altitude_m`.
    pub fn at_altitude(self, altitude_m: f64) -> AeroResult<Self> {
        let state = atmosphere::try_evaluate(altitude_m)?;
        Ok(Self {
            air_density: state.density,
            ..self
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.wingspan * self.wingspan / self.wing_area
    }

    /// Reject parameter sets that make the polar undefined.
    pub fn validate(&self) -> AeroResult<()> {
        let positive = [
            ("weight", self.weight),
            ("air_density", self.air_density),
            ("wing_area", self.wing_area),
            ("wingspan", self.wingspan),
            ("oswald_efficiency", self.oswald_efficiency),
            // The analytic optimum divides by CD0
            ("zero_lift_drag", self.zero_lift_drag),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(AeroError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Aerodynamic state at one airspeed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub airspeed: f64,            // m/s
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub lift_to_drag: f64,
    pub thrust_required: f64,     // N
}

/// Optimum conditions of a sweep and of the underlying polar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub aspect_ratio: f64,
    pub induced_drag_factor: f64,
    /// Lowest sampled thrust required (N) and its airspeed (m/s)
    pub min_thrust_required: f64,
    pub min_thrust_airspeed: f64,
    /// Highest sampled lift-to-drag ratio
    pub max_sampled_lift_to_drag: f64,
    /// Analytic minimum-drag airspeed (m/s)
    pub minimum_drag_airspeed: f64,
    /// Analytic maximum lift-to-drag ratio
    pub max_lift_to_drag: f64,
}

/// Level flight evaluator for one aircraft
#[derive(Debug, Clone)]
pub struct PerformanceCalculator {
    params: AircraftParameters,
    aspect_ratio: f64,
    induced_drag_factor: f64,
}

impl PerformanceCalculator {
    pub fn new(params: AircraftParameters) -> AeroResult<Self> {
        params.validate()?;
        let aspect_ratio = params.aspect_ratio();
        let induced_drag_factor = 1.0 / (PI * params.oswald_efficiency * aspect_ratio);

        Ok(Self {
            params,
            aspect_ratio,
            induced_drag_factor,
        })
    }

    pub fn parameters(&self) -> &AircraftParameters {
        &self.params
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// k in CD = CD0 + k·CL²
    pub fn induced_drag_factor(&self) -> f64 {
        self.induced_drag_factor
    }

    /// Lift, drag, L/D and thrust required at `airspeed` (m/s).
    pub fn evaluate(&self, airspeed: f64) -> AeroResult<PerformancePoint> {
        if !airspeed.is_finite() || airspeed <= 0.0 {
            return Err(AeroError::NonPositiveAirspeed(airspeed));
        }

        let p = &self.params;
        let dynamic_pressure = 0.5 * p.air_density * airspeed * airspeed;
        let lift_coefficient = p.weight / (dynamic_pressure * p.wing_area);
        let drag_coefficient =
            p.zero_lift_drag + self.induced_drag_factor * lift_coefficient * lift_coefficient;
        let lift_to_drag = lift_coefficient / drag_coefficient;
        let thrust_required = p.weight / lift_to_drag;

        Ok(PerformancePoint {
            airspeed,
            lift_coefficient,
            drag_coefficient,
            lift_to_drag,
            thrust_required,
        })
    }

    /// Evaluate every airspeed, stopping at the first invalid one.
    pub fn sweep(&self, airspeeds: &[f64]) -> AeroResult<Vec<PerformancePoint>> {
        tracing::debug!(samples = airspeeds.len(), "sweeping airspeeds");
        airspeeds.iter().map(|&v| self.evaluate(v)).collect()
    }

    /// Airspeed where induced and zero-lift drag are equal: sqrt(2W/(ρS))·(k/CD0)^¼
    pub fn minimum_drag_airspeed(&self) -> f64 {
        let p = &self.params;
        (2.0 * p.weight / (p.air_density * p.wing_area)).sqrt()
            * (self.induced_drag_factor / p.zero_lift_drag).powf(0.25)
    }

    /// 1 / (2·sqrt(k·CD0))
    pub fn max_lift_to_drag(&self) -> f64 {
        1.0 / (2.0 * (self.induced_drag_factor * self.params.zero_lift_drag).sqrt())
    }

    /// Summarise a sweep. Returns `None` for an empty sweep.
    pub fn summarize(&self, points: &[PerformancePoint]) -> Option<PerformanceSummary> {
        let min_thrust = minimum_thrust(points)?;
        let max_sampled_lift_to_drag = points
            .iter()
            .map(|p| p.lift_to_drag)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(PerformanceSummary {
            aspect_ratio: self.aspect_ratio,
            induced_drag_factor: self.induced_drag_factor,
            min_thrust_required: min_thrust.thrust_required,
            min_thrust_airspeed: min_thrust.airspeed,
            max_sampled_lift_to_drag,
            minimum_drag_airspeed: self.minimum_drag_airspeed(),
            max_lift_to_drag: self.max_lift_to_drag(),
        })
    }
}

/// Point with the lowest thrust required.
pub fn minimum_thrust(points: &[PerformancePoint]) -> Option<&PerformancePoint> {
    points
        .iter()
        .min_by(|a, b| a.thrust_required.total_cmp(&b.thrust_required))
}
