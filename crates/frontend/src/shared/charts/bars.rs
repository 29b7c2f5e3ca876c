use leptos::prelude::*;

use super::scale::{format_tick, LinearScale};
use super::{legend, x_band, y_value, Series, CHART_H, CHART_W, PAD_BOTTOM, PAD_LEFT, PAD_RIGHT};

/// Fraction of each category band occupied by bars (the rest is gutter).
const BAND_FILL: f64 = 0.72;

/// X position and width of one bar: series `s` of `s_count`, category `i` of `n`.
pub(crate) fn bar_rect(i: usize, n: usize, s: usize, s_count: usize) -> (f64, f64) {
    let (band_x, band_w) = x_band(i, n);
    let group_w = band_w * BAND_FILL;
    let bar_w = group_w / s_count.max(1) as f64;
    let x = band_x + (band_w - group_w) / 2.0 + bar_w * s as f64;
    (x, bar_w)
}

/// Grouped vertical bar chart with a zero baseline.
#[component]
pub fn GroupedBarChart(
    labels: &'static [&'static str],
    series: Vec<Series>,
    /// Tilt category labels for long names (freight corridors, airports).
    #[prop(optional)]
    tilt_labels: bool,
) -> impl IntoView {
    let scale = LinearScale::spanning(
        series.iter().flat_map(|s| s.values.iter().copied()),
        true,
    )
    .nice(5);

    let n = labels.len();
    let s_count = series.len();
    let ticks = scale.ticks(5);
    let baseline = CHART_H - PAD_BOTTOM;
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

                {labels.iter().enumerate().map(|(i, label)| {
                    let (band_x, band_w) = x_band(i, n);
                    let cx = band_x + band_w / 2.0;
                    if tilt_labels {
                        view! {
                            <text
                                x=cx
                                y={CHART_H - 8.0}
                                class="chart__tick"
                                text-anchor="end"
                                transform=format!("rotate(-30 {:.1} {:.1})", cx, CHART_H - 8.0)
                            >
                                {*label}
                            </text>
                        }.into_any()
                    } else {
                        view! {
                            <text x=cx y={CHART_H - 8.0} class="chart__tick" text-anchor="middle">{*label}</text>
                        }.into_any()
                    }
                }).collect_view()}

                {series.iter().enumerate().map(|(s_idx, s)| {
                    let color = s.color;
                    s.values.iter().take(n).enumerate().map(|(i, value)| {
                        let (x, w) = bar_rect(i, n, s_idx, s_count);
                        let y = y_value(&scale, *value);
                        view! {
                            <rect x=x y=y width=w height={(baseline - y).max(0.0)} fill=color rx="1"/>
                        }
                    }).collect_view()
                }).collect_view()}
            </svg>
            {legend(legend_entries)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_stay_inside_their_band() {
        let (band_x, band_w) = x_band(2, 5);
        for s in 0..3 {
            let (x, w) = bar_rect(2, 5, s, 3);
            assert!(x >= band_x);
            assert!(x + w <= band_x + band_w + 1e-9);
        }
    }

    #[test]
    fn test_sibling_bars_do_not_overlap() {
        let (x0, w0) = bar_rect(0, 5, 0, 2);
        let (x1, _) = bar_rect(0, 5, 1, 2);
        assert!((x0 + w0 - x1).abs() < 1e-9);
    }
}
