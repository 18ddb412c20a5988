/// Physical constants and reference values shared by the evaluators

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.80665;

/// Universal gas constant in J/(mol·K)
///
/// Value: 8.3144598 (CODATA 2014). The ISA layer formulas use the molar form
/// R·T/M rather than the specific gas constant for dry air.
pub const R_UNIVERSAL: f64 = 8.3144598;

/// Molar mass of dry air in kg/mol
pub const MOLAR_MASS_AIR: f64 = 0.0289644;

/// Sea level standard temperature (K), 15°C
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

/// Sea level standard pressure (Pa), 1013.25 hPa
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101325.0;

/// Sea level standard air density (kg/m³)
///
/// Reference value only. The ISA evaluator derives density from the ideal gas
/// relation, which gives 1.22498 kg/m³ at sea level with the constants above.
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Upper limit of the modelled atmosphere (m)
pub const MAX_ALTITUDE_M: f64 = 86000.0;

/// Meters per kilometer, for plot axes
pub const METERS_PER_KM: f64 = 1000.0;

// Default aircraft: light single-engine trainer used in the performance sweep

/// Aircraft weight (N)
pub const DEFAULT_WEIGHT_N: f64 = 13127.5;

/// Wing reference area (m²)
pub const DEFAULT_WING_AREA_M2: f64 = 16.165;

/// Wingspan (m)
pub const DEFAULT_WINGSPAN_M: f64 = 10.912;

/// Oswald span efficiency factor
pub const DEFAULT_OSWALD_EFFICIENCY: f64 = 0.8;

/// Zero-lift drag coefficient
pub const DEFAULT_ZERO_LIFT_DRAG: f64 = 0.025;

/// Airspeed sweep bounds (m/s): 100 ft/s to 350 ft/s
pub const DEFAULT_MIN_AIRSPEED_MPS: f64 = 30.48;
pub const DEFAULT_MAX_AIRSPEED_MPS: f64 = 106.68;

/// Number of airspeed samples in the default sweep
pub const DEFAULT_AIRSPEED_SAMPLES: usize = 100;

/// Number of altitude samples in the default atmosphere profile
pub const DEFAULT_ALTITUDE_SAMPLES: usize = 500;
