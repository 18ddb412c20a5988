// CLI API module - renders evaluator results as tables, CSV or JSON
use crate::atmosphere::{self, AtmosphereState};
use crate::error::AeroResult;
use crate::layers::LayerBand;
use crate::performance::{AircraftParameters, PerformancePoint, PerformanceSummary};
use serde::Serialize;

// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct AtmosphereReport<'a> {
    samples: usize,
    points: &'a [AtmosphereState],
}

#[derive(Serialize)]
struct PerformanceReport<'a> {
    parameters: &'a AircraftParameters,
    summary: Option<&'a PerformanceSummary>,
    points: &'a [PerformancePoint],
}

/// Rows shown in a table: all of them, or about ten evenly spaced plus the last.
fn table_rows<T>(rows: &[T], full: bool) -> Vec<&T> {
    if full {
        return rows.iter().collect();
    }
    let step = (rows.len() / 10).max(1);
    rows.iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == rows.len() - 1)
        .map(|(_, row)| row)
        .collect()
}

/// Render an ISA profile.
pub fn format_atmosphere(
    states: &[AtmosphereState],
    format: OutputFormat,
    full: bool,
) -> AeroResult<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&AtmosphereReport {
            samples: states.len(),
            points: states,
        })?,

        OutputFormat::Csv => {
            let mut lines = vec!["altitude_m,temperature_k,pressure_pa,density_kg_m3".to_string()];
            lines.extend(states.iter().map(|s| {
                format!("{:.2},{:.4},{:.6e},{:.6e}", s.altitude, s.temperature, s.pressure, s.density)
            }));
            lines.join("\n")
        }

        OutputFormat::Table => {
            let mut lines = vec![
                "╔════════════════════════════════════════╗".to_string(),
                "║    INTERNATIONAL STANDARD ATMOSPHERE   ║".to_string(),
                "╠════════════════════════════════════════╣".to_string(),
                format!("║ Samples:           {:>8}            ║", states.len()),
            ];
            if let (Some(first), Some(last)) = (states.first(), states.last()) {
                lines.push(format!("║ Altitude range:    {:>7.0} - {:<7.0} m ║", first.altitude, last.altitude));
            }
            lines.push("╚════════════════════════════════════════╝".to_string());
            lines.push(String::new());
            lines.push("┌────────────┬────────────┬──────────────┬──────────────┐".to_string());
            lines.push("│ Alt (m)    │ T (K)      │ P (Pa)       │ ρ (kg/m³)    │".to_string());
            lines.push("├────────────┼────────────┼──────────────┼──────────────┤".to_string());
            for s in table_rows(states, full) {
                lines.push(format!(
                    "│ {:>10.1} │ {:>10.3} │ {:>12.4e} │ {:>12.4e} │",
                    s.altitude, s.temperature, s.pressure, s.density
                ));
            }
            lines.push("└────────────┴────────────┴──────────────┴──────────────┘".to_string());
            lines.join("\n")
        }
    };

    Ok(text)
}

/// Render the atmosphere at a single altitude.
pub fn format_state(state: &AtmosphereState, format: OutputFormat) -> AeroResult<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(state)?,
        OutputFormat::Csv => format!(
            "altitude_m,temperature_k,pressure_pa,density_kg_m3\n{:.2},{:.4},{:.6e},{:.6e}",
            state.altitude, state.temperature, state.pressure, state.density
        ),
        OutputFormat::Table => {
            let layer = atmosphere::layer_index(state.altitude);
            [
                "╔════════════════════════════════════════╗".to_string(),
                "║         ATMOSPHERE AT ALTITUDE         ║".to_string(),
                "╠════════════════════════════════════════╣".to_string(),
                format!("║ Altitude:       {:>12.1} m         ║", state.altitude),
                format!("║ ISA layer:      {:>12}           ║", layer),
                format!("║ Temperature:    {:>12.3} K         ║", state.temperature),
                format!("║ Pressure:       {:>12.3} Pa        ║", state.pressure),
                format!("║ Density:        {:>12.6} kg/m³     ║", state.density),
                "╚════════════════════════════════════════╝".to_string(),
            ]
            .join("\n")
        }
    };

    Ok(text)
}

/// Render the annotation bands with the physics layer data behind them.
pub fn format_layers(bands: &[LayerBand]) -> String {
    let mut lines = vec![
        "┌──────────────────┬──────────┬──────────┬──────────────┬──────────────┐".to_string(),
        "│ Layer            │ Base(km) │ Top (km) │ Lapse (K/km) │ Base P (Pa)  │".to_string(),
        "├──────────────────┼──────────┼──────────┼──────────────┼──────────────┤".to_string(),
    ];
    for (index, band) in bands.iter().enumerate() {
        let lapse = atmosphere::layers().get(index).map(|l| l.lapse_rate * 1000.0);
        let base_pressure = atmosphere::base_pressure(index);
        lines.push(format!(
            "│ {:<16} │ {:>8.1} │ {:>8.1} │ {:>12} │ {:>12} │",
            band.label,
            band.lower_km,
            band.upper_km,
            lapse.map_or_else(|| "-".to_string(), |l| format!("{:+.1}", l)),
            base_pressure.map_or_else(|| "-".to_string(), |p| format!("{:.3}", p)),
        ));
    }
    lines.push("└──────────────────┴──────────┴──────────┴──────────────┴──────────────┘".to_string());
    lines.join("\n")
}

/// Render a performance sweep.
pub fn format_performance(
    parameters: &AircraftParameters,
    summary: Option<&PerformanceSummary>,
    points: &[PerformancePoint],
    format: OutputFormat,
    full: bool,
) -> AeroResult<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&PerformanceReport {
            parameters,
            summary,
            points,
        })?,

        OutputFormat::Csv => {
            let mut lines = vec!["v_inf_mps,cl,cd,l_d,tr_n".to_string()];
            lines.extend(points.iter().map(|p| {
                format!(
                    "{:.4},{:.6},{:.6},{:.4},{:.3}",
                    p.airspeed, p.lift_coefficient, p.drag_coefficient, p.lift_to_drag, p.thrust_required
                )
            }));
            lines.join("\n")
        }

        OutputFormat::Table => {
            let mut lines = vec![
                "╔════════════════════════════════════════╗".to_string(),
                "║     STEADY LEVEL FLIGHT PERFORMANCE    ║".to_string(),
                "╠════════════════════════════════════════╣".to_string(),
                format!("║ Weight:            {:>8.1} N          ║", parameters.weight),
                format!("║ Air density:       {:>8.4} kg/m³      ║", parameters.air_density),
                format!("║ Wing area:         {:>8.3} m²         ║", parameters.wing_area),
                format!("║ Wingspan:          {:>8.3} m          ║", parameters.wingspan),
                format!("║ Oswald factor:     {:>8.3}            ║", parameters.oswald_efficiency),
                format!("║ CD0:               {:>8.4}            ║", parameters.zero_lift_drag),
            ];
            if let Some(s) = summary {
                lines.extend([
                    "╠════════════════════════════════════════╣".to_string(),
                    format!("║ Aspect ratio:      {:>8.3}            ║", s.aspect_ratio),
                    format!("║ Induced factor k:  {:>8.5}            ║", s.induced_drag_factor),
                    format!("║ Min TR (sampled):  {:>8.2} N          ║", s.min_thrust_required),
                    format!("║   at V_inf:        {:>8.2} m/s        ║", s.min_thrust_airspeed),
                    format!("║ Max L/D (sampled): {:>8.3}            ║", s.max_sampled_lift_to_drag),
                    format!("║ V min drag:        {:>8.2} m/s        ║", s.minimum_drag_airspeed),
                    format!("║ Max L/D:           {:>8.3}            ║", s.max_lift_to_drag),
                ]);
            }
            lines.push("╚════════════════════════════════════════╝".to_string());
            lines.push(String::new());
            lines.push("┌──────────┬──────────┬──────────┬──────────┬──────────┐".to_string());
            lines.push("│ V (m/s)  │    CL    │    CD    │   L/D    │  TR (N)  │".to_string());
            lines.push("├──────────┼──────────┼──────────┼──────────┼──────────┤".to_string());
            for p in table_rows(points, full) {
                lines.push(format!(
                    "│ {:>8.2} │ {:>8.4} │ {:>8.5} │ {:>8.3} │ {:>8.2} │",
                    p.airspeed, p.lift_coefficient, p.drag_coefficient, p.lift_to_drag, p.thrust_required
                ));
            }
            lines.push("└──────────┴──────────┴──────────┴──────────┴──────────┘".to_string());
            lines.join("\n")
        }
    };

    Ok(text)
}
