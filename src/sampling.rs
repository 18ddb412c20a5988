//! Evenly spaced sample generation for altitude and airspeed sweeps.

use crate::error::{AeroError, AeroResult};

/// Generate `samples` evenly spaced values over `[start, end]`.
///
/// Both endpoints are included and the last value is exactly `end`, so a
/// sweep over `[0, 86000]` always reaches the top of the atmosphere table.
///
/// # Arguments
/// * `start` - First value
/// * `end` - Last value (may be smaller than `start` for a descending sweep)
/// * `samples` - Number of values to generate
pub fn linspace(start: f64, end: f64, samples: usize) -> AeroResult<Vec<f64>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(AeroError::InvalidSampling(format!(
            "bounds must be finite, got [{start}, {end}]"
        )));
    }

    match samples {
        0 => Err(AeroError::InvalidSampling(
            "at least one sample is required".to_string(),
        )),
        1 => Ok(vec![start]),
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            Ok(values)
        }
    }
}
