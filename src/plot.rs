//! Static chart rendering with plotters.
//!
//! The output format follows the file extension: `.svg` renders through the SVG
//! backend, anything else through the bitmap backend (PNG).

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;

use crate::atmosphere::AtmosphereState;
use crate::constants::{MAX_ALTITUDE_M, METERS_PER_KM};
use crate::error::{AeroError, AeroResult};
use crate::layers::LayerBand;
use crate::performance::PerformancePoint;

const PROFILE_SIZE: (u32, u32) = (1800, 1000);
const THRUST_SIZE: (u32, u32) = (1000, 600);
const FONT: &str = "sans-serif";

const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
const TAB_GREEN: RGBColor = RGBColor(44, 160, 44);

/// Horizontal position of band labels as a fraction of the panel width
const LABEL_POSITION: f64 = 0.6;
/// Dash length and gap of layer boundary lines (px)
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => PlotFormat::Svg,
            _ => PlotFormat::Png,
        }
    }
}

fn plot_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> AeroError {
    AeroError::Plot(err.to_string())
}

/// Axis range covering `values`, padded by `padding` of the span on each side.
pub fn axis_range(values: impl IntoIterator<Item = f64>, padding: f64) -> AeroResult<Range<f64>> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return Err(AeroError::Plot("no finite data points".to_string()));
    }

    let span = max - min;
    // Flat series still need a visible axis
    let pad = if span > 0.0 { span * padding } else { min.abs().max(1.0) * 0.05 };
    Ok((min - pad)..(max + pad))
}

/// Horizontal coordinate of band labels in a panel spanning `range`.
pub fn label_x(range: &Range<f64>) -> f64 {
    range.start + LABEL_POSITION * (range.end - range.start)
}

struct Panel<'a> {
    x_desc: &'a str,
    color: RGBColor,
    values: Vec<f64>,
}

/// Temperature, pressure and density profiles side by side, annotated by layer.
pub fn render_atmosphere_profiles(
    path: &Path,
    states: &[AtmosphereState],
    bands: &[LayerBand],
) -> AeroResult<()> {
    match PlotFormat::from_path(path) {
        PlotFormat::Svg => draw_profiles(SVGBackend::new(path, PROFILE_SIZE).into_drawing_area(), states, bands)?,
        PlotFormat::Png => draw_profiles(BitMapBackend::new(path, PROFILE_SIZE).into_drawing_area(), states, bands)?,
    }
    tracing::info!(path = %path.display(), samples = states.len(), "wrote atmosphere profile plot");
    Ok(())
}

fn draw_profiles<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    states: &[AtmosphereState],
    bands: &[LayerBand],
) -> AeroResult<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let altitudes_km: Vec<f64> = states.iter().map(|s| s.altitude / METERS_PER_KM).collect();
    let altitude_range = 0.0..(MAX_ALTITUDE_M / METERS_PER_KM);

    let panels = [
        Panel {
            x_desc: "T(h) [K]",
            color: TAB_BLUE,
            values: states.iter().map(|s| s.temperature).collect(),
        },
        Panel {
            x_desc: "P(h) [Pa]",
            color: TAB_ORANGE,
            values: states.iter().map(|s| s.pressure).collect(),
        },
        Panel {
            x_desc: "ρ(h) [kg/m³]",
            color: TAB_GREEN,
            values: states.iter().map(|s| s.density).collect(),
        },
    ];

    let areas = root.split_evenly((1, panels.len()));
    for (index, (area, panel)) in areas.iter().zip(panels.iter()).enumerate() {
        let x_range = axis_range(panel.values.iter().copied(), 0.05)?;

        let mut chart = ChartBuilder::on(area)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(if index == 0 { 60 } else { 40 })
            .build_cartesian_2d(x_range.clone(), altitude_range.clone())
            .map_err(plot_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(panel.x_desc)
            .x_labels(6)
            .axis_desc_style((FONT, 18));
        if index == 0 {
            mesh.y_desc("Altitude [km]");
        }
        mesh.draw().map_err(plot_err)?;

        chart
            .draw_series(LineSeries::new(
                panel.values.iter().copied().zip(altitudes_km.iter().copied()),
                panel.color.stroke_width(2),
            ))
            .map_err(plot_err)?;

        for band in bands {
            for boundary in [band.lower_km, band.upper_km] {
                chart
                    .draw_series(DashedLineSeries::new(
                        [(x_range.start, boundary), (x_range.end, boundary)],
                        DASH_SIZE,
                        DASH_SPACING,
                        BLACK.stroke_width(1),
                    ))
                    .map_err(plot_err)?;
            }
            chart
                .draw_series(std::iter::once(Text::new(
                    band.label,
                    (label_x(&x_range), band.midpoint_km()),
                    (FONT, 14).into_font(),
                )))
                .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Thrust required against airspeed, line with circle markers.
pub fn render_thrust_required(path: &Path, points: &[PerformancePoint]) -> AeroResult<()> {
    match PlotFormat::from_path(path) {
        PlotFormat::Svg => draw_thrust(SVGBackend::new(path, THRUST_SIZE).into_drawing_area(), points)?,
        PlotFormat::Png => draw_thrust(BitMapBackend::new(path, THRUST_SIZE).into_drawing_area(), points)?,
    }
    tracing::info!(path = %path.display(), samples = points.len(), "wrote thrust required plot");
    Ok(())
}

fn draw_thrust<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    points: &[PerformancePoint],
) -> AeroResult<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let x_range = axis_range(points.iter().map(|p| p.airspeed), 0.02)?;
    let y_range = axis_range(points.iter().map(|p| p.thrust_required), 0.05)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Thrust Required (TR) vs. Flight Velocity (V_inf)", (FONT, 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("V_inf (m/s)")
        .y_desc("TR (N)")
        .axis_desc_style((FONT, 18))
        .draw()
        .map_err(plot_err)?;

    let series = || points.iter().map(|p| (p.airspeed, p.thrust_required));
    chart
        .draw_series(LineSeries::new(series(), BLUE.stroke_width(2)))
        .map_err(plot_err)?;
    chart
        .draw_series(series().map(|coord| Circle::new(coord, 4, BLUE.filled())))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::standard_profile;
    use crate::layers::LAYER_BANDS;
    use crate::performance::{AircraftParameters, PerformanceCalculator};
    use crate::sampling::linspace;

    #[test]
    fn test_plot_format_from_extension() {
        assert_eq!(PlotFormat::from_path(Path::new("isa.svg")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("isa.SVG")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("isa.png")), PlotFormat::Png);
        assert_eq!(PlotFormat::from_path(Path::new("isa")), PlotFormat::Png);
    }

    #[test]
    fn test_axis_range_padding() {
        let range = axis_range([0.0, 10.0], 0.1).unwrap();
        assert!((range.start + 1.0).abs() < 1e-12);
        assert!((range.end - 11.0).abs() < 1e-12);

        let flat = axis_range([216.65, 216.65], 0.1).unwrap();
        assert!(flat.start < 216.65 && flat.end > 216.65);

        assert!(axis_range(Vec::<f64>::new(), 0.1).is_err());
        assert!(axis_range([f64::NAN], 0.1).is_err());
    }

    fn sample_sweep() -> Vec<PerformancePoint> {
        let calc = PerformanceCalculator::new(AircraftParameters::default()).unwrap();
        calc.sweep(&linspace(30.48, 106.68, 25).unwrap()).unwrap()
    }

    #[test]
    fn test_render_svg_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let states = standard_profile(100).unwrap();
        let points = sample_sweep();

        for ext in ["svg", "png"] {
            let isa_path = dir.path().join(format!("isa.{ext}"));
            render_atmosphere_profiles(&isa_path, &states, LAYER_BANDS).unwrap();
            assert!(std::fs::metadata(&isa_path).unwrap().len() > 0, "{}", isa_path.display());

            let tr_path = dir.path().join(format!("tr.{ext}"));
            render_thrust_required(&tr_path, &points).unwrap();
            assert!(std::fs::metadata(&tr_path).unwrap().len() > 0, "{}", tr_path.display());
        }

        let svg = std::fs::read_to_string(dir.path().join("isa.svg")).unwrap();
        assert!(svg.contains("Stratopause"));
    }

    #[test]
    fn test_render_rejects_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_thrust_required(&dir.path().join("empty.svg"), &[]);
        assert!(matches!(result, Err(AeroError::Plot(_))));
    }

    #[test]
    fn test_label_x_inside_panel() {
        // Temperature panel: label must land inside the axis, not at 0.6 × max
        let range = 180.0..300.0;
        let x = label_x(&range);
        assert!(range.contains(&x));
        assert!((x - 252.0).abs() < 1e-9);
    }
}
