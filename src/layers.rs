//! Named atmospheric bands used to annotate profile plots.
//!
//! These records are presentation data only. The physics segments live in
//! [`crate::atmosphere`] and are not derived from this list.

use serde::Serialize;

/// A labelled altitude band (km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerBand {
    pub lower_km: f64,
    pub upper_km: f64,
    pub label: &'static str,
}

impl LayerBand {
    /// Altitude at which the band label is drawn
    pub fn midpoint_km(&self) -> f64 {
        (self.lower_km + self.upper_km) / 2.0
    }

    pub fn contains_km(&self, altitude_km: f64) -> bool {
        altitude_km >= self.lower_km && altitude_km <= self.upper_km
    }
}

/// Layer bands, bottom to top
pub const LAYER_BANDS: &[LayerBand] = &[
    LayerBand { lower_km: 0.0, upper_km: 11.0, label: "Troposphere" },
    LayerBand { lower_km: 11.0, upper_km: 20.0, label: "Tropopause" },
    LayerBand { lower_km: 20.0, upper_km: 32.0, label: "Stratosphere (1)" },
    LayerBand { lower_km: 32.0, upper_km: 47.0, label: "Stratosphere (2)" },
    LayerBand { lower_km: 47.0, upper_km: 51.0, label: "Stratopause" },
    LayerBand { lower_km: 51.0, upper_km: 71.0, label: "Mesosphere (1)" },
    LayerBand { lower_km: 71.0, upper_km: 86.0, label: "Mesosphere (2)" },
];

/// Band containing `altitude_km`. Shared boundaries resolve to the lower band.
pub fn band_at(altitude_km: f64) -> Option<&'static LayerBand> {
    LAYER_BANDS.iter().find(|band| band.contains_km(altitude_km))
}

/// Every distinct boundary altitude (km), bottom to top.
pub fn boundaries_km() -> Vec<f64> {
    let mut boundaries: Vec<f64> = LAYER_BANDS
        .iter()
        .flat_map(|band| [band.lower_km, band.upper_km])
        .collect();
    boundaries.dedup();
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere;
    use crate::constants::METERS_PER_KM;

    #[test]
    fn test_bands_are_contiguous() {
        assert_eq!(LAYER_BANDS.len(), 7);
        assert_eq!(LAYER_BANDS[0].lower_km, 0.0);
        assert_eq!(LAYER_BANDS[6].upper_km, 86.0);
        for pair in LAYER_BANDS.windows(2) {
            assert_eq!(pair[0].upper_km, pair[1].lower_km);
        }
    }

    #[test]
    fn test_bands_match_physics_layers() {
        for (band, layer) in LAYER_BANDS.iter().zip(atmosphere::layers()) {
            assert_eq!(band.lower_km * METERS_PER_KM, layer.base_altitude);
            assert_eq!(band.upper_km * METERS_PER_KM, layer.top_altitude);
        }
    }

    #[test]
    fn test_band_lookup() {
        assert_eq!(band_at(5.0).map(|b| b.label), Some("Troposphere"));
        assert_eq!(band_at(11.0).map(|b| b.label), Some("Troposphere"));
        assert_eq!(band_at(48.0).map(|b| b.label), Some("Stratopause"));
        assert!(band_at(90.0).is_none());
    }

    #[test]
    fn test_midpoint_and_boundaries() {
        assert_eq!(LAYER_BANDS[0].midpoint_km(), 5.5);
        assert_eq!(
            boundaries_km(),
            vec![0.0, 11.0, 20.0, 32.0, 47.0, 51.0, 71.0, 86.0]
        );
    }
}
