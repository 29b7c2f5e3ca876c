use leptos::prelude::*;

use super::{RadarPoint, CHART_H};

const CX: f64 = 160.0;
const CY: f64 = CHART_H / 2.0;
const R: f64 = 100.0;

/// Position of the i-th of n spoke tips at a given radius, starting at
/// 12 o'clock and going clockwise.
pub(crate) fn spoke_xy(cx: f64, cy: f64, r: f64, i: usize, n: usize) -> (f64, f64) {
    let angle = std::f64::consts::TAU * i as f64 / n.max(1) as f64 - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Polygon points of the value outline, each spoke scaled by value/full_mark.
pub(crate) fn value_polygon(points: &[RadarPoint], cx: f64, cy: f64, r: f64) -> String {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let fraction = if point.full_mark > 0.0 {
                (point.value / point.full_mark).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (x, y) = spoke_xy(cx, cy, r * fraction, i, n);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ring_polygon(n: usize, fraction: f64) -> String {
    (0..n)
        .map(|i| {
            let (x, y) = spoke_xy(CX, CY, R * fraction, i, n);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Radar (spider) chart of one value outline against its full marks.
#[component]
pub fn RadarChart(points: &'static [RadarPoint], color: &'static str) -> impl IntoView {
    let n = points.len();

    view! {
        <div class="chart chart--radar">
            <svg viewBox=format!("0 0 320 {CHART_H}") class="chart__svg" preserveAspectRatio="xMidYMid meet">
                {[0.25, 0.5, 0.75, 1.0].iter().map(|fraction| view! {
                    <polygon points=ring_polygon(n, *fraction) fill="none" class="chart__grid"/>
                }).collect_view()}

                {(0..n).map(|i| {
                    let (x, y) = spoke_xy(CX, CY, R, i, n);
                    view! { <line x1=CX y1=CY x2=x y2=y class="chart__grid"/> }
                }).collect_view()}

                <polygon
                    points=value_polygon(points, CX, CY, R)
                    fill=color
                    fill-opacity="0.3"
                    stroke=color
                    stroke-width="2"
                />

                {points.iter().enumerate().map(|(i, point)| {
                    let (x, y) = spoke_xy(CX, CY, R + 14.0, i, n);
                    view! {
                        <text x=x y=y class="chart__tick" text-anchor="middle">{point.label}</text>
                    }
                }).collect_view()}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_spoke_points_straight_up() {
        let (x, y) = spoke_xy(0.0, 0.0, 10.0, 0, 6);
        assert!(x.abs() < 1e-9);
        assert!((y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_polygon_scales_by_full_mark() {
        let points = [
            RadarPoint { label: "a", value: 50.0, full_mark: 100.0 },
            RadarPoint { label: "b", value: 100.0, full_mark: 100.0 },
            RadarPoint { label: "c", value: 0.0, full_mark: 100.0 },
        ];
        let polygon = value_polygon(&points, 0.0, 0.0, 100.0);
        let pairs: Vec<&str> = polygon.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        // half-value spoke sits at half the radius
        assert_eq!(pairs[0], "0.0,-50.0");
        // zero value collapses to the centre
        assert_eq!(pairs[2], "0.0,0.0");
    }
}
