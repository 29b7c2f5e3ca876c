use leptos::prelude::*;

use super::scale::{format_tick, LinearScale};
use super::{legend, Series, CHART_H, CHART_W, PAD_BOTTOM, PAD_TOP};

// Dual-axis layout needs a tick gutter on both sides.
const PAD_L: f64 = 46.0;
const PAD_R: f64 = 46.0;

fn plot_w() -> f64 {
    CHART_W - PAD_L - PAD_R
}

fn x_mid(i: usize, n: usize) -> f64 {
    let band = plot_w() / n.max(1) as f64;
    PAD_L + band * i as f64 + band / 2.0
}

fn y_of(scale: &LinearScale, value: f64) -> f64 {
    PAD_TOP + (CHART_H - PAD_TOP - PAD_BOTTOM) * (1.0 - scale.norm(value))
}

/// Bars against the right axis, a line against the left axis - the
/// two-quantity composition the performance-trend panels use.
#[component]
pub fn ComposedChart(
    labels: &'static [&'static str],
    bars: Series,
    line: Series,
) -> impl IntoView {
    let n = labels.len();
    let bar_scale = LinearScale::spanning(bars.values.iter().copied(), true).nice(5);
    let line_scale = LinearScale::spanning(line.values.iter().copied(), false).nice(5);

    let baseline = CHART_H - PAD_BOTTOM;
    let band = plot_w() / n.max(1) as f64;
    let bar_w = band * 0.55;

    let line_points = line
        .values
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, value)| format!("{:.1},{:.1}", x_mid(i, n), y_of(&line_scale, *value)))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <div class="chart">
            <svg viewBox=format!("0 0 {CHART_W} {CHART_H}") class="chart__svg" preserveAspectRatio="xMidYMid meet">
                {line_scale.ticks(5).iter().map(|tick| {
                    let y = y_of(&line_scale, *tick);
                    view! {
                        <g>
                            <line x1=PAD_L y1=y x2={CHART_W - PAD_R} y2=y class="chart__grid" stroke-dasharray="3 3"/>
                            <text x={PAD_L - 6.0} y={y + 3.0} class="chart__tick" text-anchor="end">{format_tick(*tick)}</text>
                        </g>
                    }
                }).collect_view()}

                {bar_scale.ticks(5).iter().map(|tick| {
                    let y = y_of(&bar_scale, *tick);
                    view! {
                        <text x={CHART_W - PAD_R + 6.0} y={y + 3.0} class="chart__tick" text-anchor="start">{format_tick(*tick)}</text>
                    }
                }).collect_view()}

                {labels.iter().enumerate().map(|(i, label)| view! {
                    <text x={x_mid(i, n)} y={CHART_H - 8.0} class="chart__tick" text-anchor="middle">{*label}</text>
                }).collect_view()}

                {bars.values.iter().take(n).enumerate().map(|(i, value)| {
                    let y = y_of(&bar_scale, *value);
                    view! {
                        <rect
                            x={x_mid(i, n) - bar_w / 2.0}
                            y=y
                            width=bar_w
                            height={(baseline - y).max(0.0)}
                            fill=bars.color
                            fill-opacity="0.85"
                            rx="1"
                        />
                    }
                }).collect_view()}

                <polyline
                    points=line_points
                    fill="none"
                    stroke=line.color
                    stroke-width="3"
                    stroke-linecap="round"
                />
            </svg>
            {legend(vec![
                (line.name.to_string(), line.color),
                (bars.name.to_string(), bars.color),
            ])}
        </div>
    }
}
