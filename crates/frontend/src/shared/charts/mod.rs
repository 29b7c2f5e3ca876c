//! Hand-built SVG chart components.
//!
//! Every chart renders once from `'static` literal series data; there is no
//! reactivity inside a chart and no external charting dependency. Geometry
//! helpers are plain functions so the coordinate math stays testable.

pub mod area;
pub mod bars;
pub mod composed;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scale;

pub use area::StackedAreaChart;
pub use bars::GroupedBarChart;
pub use composed::ComposedChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use radar::RadarChart;

use leptos::prelude::*;

use self::scale::LinearScale;

/// One named series over the chart's shared category labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: &'static [f64],
    pub dashed: bool,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// One spoke of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub label: &'static str,
    pub value: f64,
    pub full_mark: f64,
}

pub(crate) const CHART_W: f64 = 480.0;
pub(crate) const CHART_H: f64 = 280.0;
pub(crate) const PAD_LEFT: f64 = 46.0;
pub(crate) const PAD_RIGHT: f64 = 18.0;
pub(crate) const PAD_TOP: f64 = 14.0;
pub(crate) const PAD_BOTTOM: f64 = 30.0;

pub(crate) fn plot_width() -> f64 {
    CHART_W - PAD_LEFT - PAD_RIGHT
}

pub(crate) fn plot_height() -> f64 {
    CHART_H - PAD_TOP - PAD_BOTTOM
}

/// X coordinate of the i-th of n category points (line/area charts).
pub(crate) fn x_point(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return PAD_LEFT + plot_width() / 2.0;
    }
    PAD_LEFT + plot_width() * i as f64 / (n - 1) as f64
}

/// Left edge and width of the i-th of n category bands (bar charts).
pub(crate) fn x_band(i: usize, n: usize) -> (f64, f64) {
    let band = plot_width() / n.max(1) as f64;
    (PAD_LEFT + band * i as f64, band)
}

/// Y coordinate of a value under the scale.
pub(crate) fn y_value(scale: &LinearScale, value: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - scale.norm(value))
}

/// Shared legend strip under a chart.
pub(crate) fn legend(entries: Vec<(String, &'static str)>) -> AnyView {
    view! {
        <div class="chart__legend">
            {entries.into_iter().map(|(name, color)| view! {
                <span class="chart__legend-item">
                    <span class="chart__legend-swatch" style=format!("background:{}", color)></span>
                    {name}
                </span>
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_point_spans_plot() {
        assert_eq!(x_point(0, 6), PAD_LEFT);
        assert_eq!(x_point(5, 6), CHART_W - PAD_RIGHT);
    }

    #[test]
    fn test_x_point_single_category_centers() {
        assert_eq!(x_point(0, 1), PAD_LEFT + plot_width() / 2.0);
    }

    #[test]
    fn test_x_bands_tile_the_plot() {
        let (x0, w) = x_band(0, 4);
        let (x3, _) = x_band(3, 4);
        assert_eq!(x0, PAD_LEFT);
        assert!((x3 + w - (CHART_W - PAD_RIGHT)).abs() < 1e-9);
    }

    #[test]
    fn test_y_value_maps_bounds_to_plot_edges() {
        let scale = LinearScale { min: 0.0, max: 100.0 };
        assert_eq!(y_value(&scale, 0.0), CHART_H - PAD_BOTTOM);
        assert_eq!(y_value(&scale, 100.0), PAD_TOP);
    }
}
