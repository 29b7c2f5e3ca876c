use leptos::prelude::*;

use super::scale::{format_tick, LinearScale};
use super::{legend, x_point, y_value, Series, CHART_H, CHART_W, PAD_LEFT, PAD_RIGHT};

/// Points string of one polyline under the scale.
pub(crate) fn polyline_points(scale: &LinearScale, values: &[f64], n: usize) -> String {
    values
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, value)| format!("{:.1},{:.1}", x_point(i, n), y_value(scale, *value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-series polyline chart over shared category labels.
#[component]
pub fn LineChart(
    labels: &'static [&'static str],
    series: Vec<Series>,
    /// Explicit Y bounds override the fitted scale (e.g. the LPI trend's 3.0..4.0 window).
    #[prop(into, optional)]
    y_min: Option<f64>,
    #[prop(into, optional)]
    y_max: Option<f64>,
) -> impl IntoView {
    let mut scale = LinearScale::spanning(
        series.iter().flat_map(|s| s.values.iter().copied()),
        false,
    )
    .nice(5);
    if let Some(min) = y_min {
        scale.min = min;
    }
    if let Some(max) = y_max {
        scale.max = max;
    }

    let n = labels.len();
    let ticks = scale.ticks(5);
    let legend_entries: Vec<_> = series.iter().map(|s| (s.name.to_string(), s.color)).collect();

    view! {
        <div class="chart">
            <svg viewBox=format!("0 0 {CHART_W} {CHART_H}") class="chart__svg" preserveAspectRatio="xMidYMid meet">
                {ticks.iter().map(|tick| {
                    let y = y_value(&scale, *tick);
                    view! {
                        <g>
                            <line x1=PAD_LEFT y1=y x2={CHART_W - PAD_RIGHT} y2=y class="chart__grid" stroke-dasharray="3 3"/>
                            <text x={PAD_LEFT - 6.0} y={y + 3.0} class="chart__tick" text-anchor="end">{format_tick(*tick)}</text>
                        </g>
                    }
                }).collect_view()}

                {labels.iter().enumerate().map(|(i, label)| view! {
                    <text x={x_point(i, n)} y={CHART_H - 8.0} class="chart__tick" text-anchor="middle">{*label}</text>
                }).collect_view()}

                {series.iter().map(|s| view! {
                    <polyline
                        points=polyline_points(&scale, s.values, n)
                        fill="none"
                        stroke=s.color
                        stroke-width="3"
                        stroke-linecap="round"
                        stroke-dasharray={if s.dashed { "5 5" } else { "none" }}
                    />
                }).collect_view()}
            </svg>
            {legend(legend_entries)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::{PAD_BOTTOM, PAD_TOP};

    #[test]
    fn test_polyline_has_one_point_per_category() {
        let scale = LinearScale { min: 0.0, max: 10.0 };
        let points = polyline_points(&scale, &[1.0, 5.0, 10.0], 3);
        assert_eq!(points.split(' ').count(), 3);
    }

    #[test]
    fn test_polyline_extremes_touch_plot_edges() {
        let scale = LinearScale { min: 0.0, max: 10.0 };
        let points = polyline_points(&scale, &[0.0, 10.0], 2);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert!(pairs[0].ends_with(&format!("{:.1}", CHART_H - PAD_BOTTOM)));
        assert!(pairs[1].ends_with(&format!("{:.1}", PAD_TOP)));
    }
}
