//! Easing curves shared by the reveal transitions and the frame-driven counters.

/// The site's signature ease-out-expo-like curve.
pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseOutQuart,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Maps linear progress to eased progress. Input is clamped to `[0, 1]`
    /// and both endpoints are returned exactly.
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Easing::EaseOutQuart => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

// Newton-Raphson on the x polynomial, then bisection if the slope goes flat.
fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2);
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..24 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }
    bezier_sample(p, y1, y2)
}

fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseOutQuart, EXPO_OUT] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
        }
    }

    #[test]
    fn ease_out_curves_never_decrease() {
        for easing in [Easing::EaseOutCubic, Easing::EaseOutQuart, EXPO_OUT] {
            let mut last = 0.0;
            for step in 0..=200 {
                let v = easing.apply(step as f64 / 200.0);
                assert!(v + 1e-9 >= last, "{:?} dipped at step {}", easing, step);
                last = v;
            }
        }
    }

    #[test]
    fn quart_front_loads_progress() {
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
        assert!(EXPO_OUT.apply(0.5) > 0.9);
    }

    #[test]
    fn css_strings() {
        assert_eq!(EXPO_OUT.css(), "cubic-bezier(0.16, 1, 0.3, 1)");
        assert_eq!(Easing::Linear.css(), "linear");
    }
}
