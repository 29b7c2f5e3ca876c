//! Linear scale and tick helpers for the SVG charts.

/// Linear value scale with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    /// Scale spanning the given values. `include_zero` pins the lower bound
    /// to zero (bar and area baselines). Degenerate input widens to a unit
    /// span instead of collapsing.
    pub fn spanning(values: impl Iterator<Item = f64>, include_zero: bool) -> LinearScale {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() || !max.is_finite() {
            return LinearScale { min: 0.0, max: 1.0 };
        }
        if include_zero {
            min = min.min(0.0);
        }
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        LinearScale { min, max }
    }

    /// Widen the bounds outward to multiples of a nice step for the given
    /// tick count.
    pub fn nice(self, ticks: usize) -> LinearScale {
        let step = nice_step((self.max - self.min) / ticks.max(1) as f64);
        LinearScale {
            min: (self.min / step).floor() * step,
            max: (self.max / step).ceil() * step,
        }
    }

    /// Tick positions at nice-step multiples inside the bounds.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = nice_step((self.max - self.min) / count.max(1) as f64);
        let mut out = Vec::new();
        let mut value = (self.min / step).ceil() * step;
        while value <= self.max + step * 1e-6 {
            out.push(value);
            value += step;
        }
        out
    }

    /// Normalize a value into 0..1 within the bounds, clamped.
    pub fn norm(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let raw = raw.abs().max(f64::MIN_POSITIVE);
    let base = 10f64.powf(raw.log10().floor());
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Axis label for a tick value: integers stay integers, thousands collapse
/// to a `k` suffix.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        let k = value / 1000.0;
        if (k - k.round()).abs() < 1e-9 {
            format!("{:.0}k", k)
        } else {
            format!("{:.1}k", k)
        }
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_covers_values() {
        let scale = LinearScale::spanning([3.2, 3.7, 3.5].into_iter(), false);
        assert_eq!(scale.min, 3.2);
        assert_eq!(scale.max, 3.7);
    }

    #[test]
    fn test_spanning_include_zero_pins_baseline() {
        let scale = LinearScale::spanning([450.0, 615.0].into_iter(), true);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 615.0);
    }

    #[test]
    fn test_spanning_empty_is_unit() {
        let scale = LinearScale::spanning(std::iter::empty(), false);
        assert_eq!(scale, LinearScale { min: 0.0, max: 1.0 });
    }

    #[test]
    fn test_spanning_constant_widens() {
        let scale = LinearScale::spanning([42.0, 42.0].into_iter(), false);
        assert!(scale.max > scale.min);
    }

    #[test]
    fn test_nice_widens_outward() {
        let scale = LinearScale { min: 3.2, max: 3.7 }.nice(5);
        assert!(scale.min <= 3.2 && scale.min >= 3.0);
        assert!(scale.max >= 3.7 && scale.max <= 4.0);
    }

    #[test]
    fn test_ticks_are_inside_bounds_and_ordered() {
        let scale = LinearScale { min: 0.0, max: 100.0 };
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 6);
        for (expected, tick) in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0].iter().zip(&ticks) {
            assert!((tick - expected).abs() < 1e-6);
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
            "{} !~ {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_nice_step_rounds_to_1_2_5() {
        assert_close(nice_step(1.3), 2.0);
        assert_close(nice_step(3.0), 5.0);
        assert_close(nice_step(7.0), 10.0);
        assert_close(nice_step(0.9), 1.0);
        assert_close(nice_step(130.0), 200.0);
    }

    #[test]
    fn test_norm_clamps() {
        let scale = LinearScale { min: 0.0, max: 10.0 };
        assert_eq!(scale.norm(5.0), 0.5);
        assert_eq!(scale.norm(-5.0), 0.0);
        assert_eq!(scale.norm(15.0), 1.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(80.0), "80");
        assert_eq!(format_tick(3.5), "3.5");
        assert_eq!(format_tick(45000.0), "45k");
        assert_eq!(format_tick(2500.0), "2.5k");
    }
}
