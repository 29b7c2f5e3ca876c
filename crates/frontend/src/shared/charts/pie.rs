use leptos::prelude::*;

use super::{legend, Slice, CHART_H};

const CX: f64 = 140.0;
const CY: f64 = CHART_H / 2.0;
const R: f64 = 95.0;

/// Path of one slice between two turn fractions, measured clockwise from
/// 12 o'clock.
pub(crate) fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let at = |fraction: f64| {
        let angle = std::f64::consts::TAU * fraction - std::f64::consts::FRAC_PI_2;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let (x0, y0) = at(start);
    let (x1, y1) = at(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.1},{r:.1} 0 {large_arc} 1 {x1:.1},{y1:.1} Z"
    )
}

/// Cumulative turn fractions: one (start, end) pair per slice.
pub(crate) fn slice_fractions(slices: &[Slice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return slices.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut start = 0.0;
    slices
        .iter()
        .map(|s| {
            let end = start + s.value / total;
            let pair = (start, end);
            start = end;
            pair
        })
        .collect()
}

/// Pie chart with a value-labelled legend ("Road: 65%").
#[component]
pub fn PieChart(
    slices: &'static [Slice],
    /// Suffix appended to legend values ("%" for shares, "" for counts).
    #[prop(default = "%")]
    unit: &'static str,
) -> impl IntoView {
    let fractions = slice_fractions(slices);

    view! {
        <div class="chart chart--pie">
            <svg viewBox=format!("0 0 280 {CHART_H}") class="chart__svg" preserveAspectRatio="xMidYMid meet">
                {slices.iter().zip(fractions).map(|(slice, (start, end))| view! {
                    <path d=slice_path(CX, CY, R, start, end) fill=slice.color stroke="#fff" stroke-width="1"/>
                }).collect_view()}
            </svg>
            {legend(
                slices
                    .iter()
                    .map(|s| (format!("{}: {}{}", s.label, s.value, unit), s.color))
                    .collect(),
            )}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLICES: &[Slice] = &[
        Slice { label: "Road", value: 65.0, color: "#005430" },
        Slice { label: "Rail", value: 15.0, color: "#8BAA99" },
        Slice { label: "Air", value: 12.0, color: "#3e9b87" },
        Slice { label: "Sea", value: 8.0, color: "#58b5a3" },
    ];

    #[test]
    fn test_fractions_cover_the_full_turn() {
        let fractions = slice_fractions(SLICES);
        assert!((fractions[0].0 - 0.0).abs() < 1e-9);
        assert!((fractions.last().unwrap().1 - 1.0).abs() < 1e-9);
        for window in fractions.windows(2) {
            assert!((window[0].1 - window[1].0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_majority_slice_uses_large_arc_flag() {
        assert!(slice_path(0.0, 0.0, 10.0, 0.0, 0.65).contains("0 1 1"));
        assert!(slice_path(0.0, 0.0, 10.0, 0.0, 0.15).contains("0 0 1"));
    }

    #[test]
    fn test_zero_total_degenerates_quietly() {
        let empty = [Slice { label: "none", value: 0.0, color: "#000" }];
        assert_eq!(slice_fractions(&empty), vec![(0.0, 0.0)]);
    }
}
