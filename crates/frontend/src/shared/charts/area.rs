use leptos::prelude::*;

use super::scale::{format_tick, LinearScale};
use super::{legend, x_point, y_value, Series, CHART_H, CHART_W, PAD_LEFT, PAD_RIGHT};

/// Per-layer (low, high) cumulative bounds at every category point.
pub(crate) fn stack_layers(series: &[Series], n: usize) -> Vec<Vec<(f64, f64)>> {
    let mut running = vec![0.0; n];
    series
        .iter()
        .map(|s| {
            (0..n)
                .map(|i| {
                    let low = running[i];
                    let high = low + s.values.get(i).copied().unwrap_or(0.0);
                    running[i] = high;
                    (low, high)
                })
                .collect()
        })
        .collect()
}

/// Polygon points of one layer: top edge left-to-right, bottom edge back.
pub(crate) fn layer_polygon(scale: &LinearScale, layer: &[(f64, f64)]) -> String {
    let n = layer.len();
    let mut points = Vec::with_capacity(n * 2);
    for (i, (_, high)) in layer.iter().enumerate() {
        points.push(format!("{:.1},{:.1}", x_point(i, n), y_value(scale, *high)));
    }
    for (i, (low, _)) in layer.iter().enumerate().rev() {
        points.push(format!("{:.1},{:.1}", x_point(i, n), y_value(scale, *low)));
    }
    points.join(" ")
}

/// Stacked area chart with a zero baseline.
#[component]
pub fn StackedAreaChart(labels: &'static [&'static str], series: Vec<Series>) -> impl IntoView {
    let n = labels.len();
    let layers = stack_layers(&series, n);
    let scale = LinearScale::spanning(
        layers.iter().flatten().map(|(_, high)| *high),
        true,
    )
    .nice(5);

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

                {series.iter().zip(layers.iter()).map(|(s, layer)| view! {
                    <polygon
                        points=layer_polygon(&scale, layer)
                        fill=s.color
                        fill-opacity="0.75"
                        stroke=s.color
                        stroke-width="1.5"
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

    const A: Series = Series { name: "a", color: "#000", values: &[1.0, 2.0], dashed: false };
    const B: Series = Series { name: "b", color: "#111", values: &[3.0, 4.0], dashed: false };

    #[test]
    fn test_layers_accumulate() {
        let layers = stack_layers(&[A, B], 2);
        assert_eq!(layers[0], vec![(0.0, 1.0), (0.0, 2.0)]);
        assert_eq!(layers[1], vec![(1.0, 4.0), (2.0, 6.0)]);
    }

    #[test]
    fn test_layer_polygon_closes_with_double_points() {
        let scale = LinearScale { min: 0.0, max: 6.0 };
        let layers = stack_layers(&[A, B], 2);
        let polygon = layer_polygon(&scale, &layers[1]);
        assert_eq!(polygon.split(' ').count(), 4);
    }
}
