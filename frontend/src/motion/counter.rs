//! Count-up and tween values sampled per frame.

use super::easing::Easing;
use super::visibility::{ObserverOptions, DEFAULT_THRESHOLD};

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    duration_ms: f64,
    decimals: u32,
    easing: Easing,
    threshold: f64,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        CountUp {
            target: if target.is_finite() { target } else { 0.0 },
            duration_ms,
            decimals: 0,
            easing: Easing::EaseOutQuart,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(6);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Visible fraction at which counting starts.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::default().with_threshold(self.threshold)
    }

    /// Linear progress in `[0, 1]`. A non-positive duration completes at once.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if !(self.duration_ms > 0.0) {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Displayed value at `elapsed_ms`. Truncated toward zero at the
    /// configured precision so it never overshoots, and exactly the target
    /// once complete.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let scale = 10f64.powi(self.decimals as i32);
        let raw = (self.easing.apply(progress) * self.target * scale).trunc() / scale;
        if self.target >= 0.0 {
            raw.min(self.target)
        } else {
            raw.max(self.target)
        }
    }

    pub fn display(&self, value: f64) -> String {
        format_grouped(value, self.decimals)
    }
}

/// Fixed-point formatting with `,` thousands separators.
pub fn format_grouped(value: f64, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0" reads oddly once rounding has eaten every digit
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && frac_part.map_or(true, |f| f.chars().all(|c| c == '0')) {
        ""
    } else {
        sign
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Stepped integer tween between two values, eased out cubically. Used for
/// prices that slide when the billing period changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub steps: u32,
}

impl Tween {
    pub const STEPS: u32 = 20;
    pub const DURATION_MS: u32 = 500;

    pub fn new(from: i64, to: i64) -> Self {
        Tween { from, to, steps: Self::STEPS }
    }

    pub fn interval_ms(&self, duration_ms: u32) -> u32 {
        (duration_ms / self.steps.max(1)).max(1)
    }

    pub fn is_finished(&self, step: u32) -> bool {
        step >= self.steps
    }

    pub fn value_at_step(&self, step: u32) -> i64 {
        if step >= self.steps {
            return self.to;
        }
        let eased = Easing::EaseOutCubic.apply(step as f64 / self.steps as f64);
        (self.from as f64 + (self.to - self.from) as f64 * eased).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target() {
        let counter = CountUp::new(150.0, 2000.0);
        assert_eq!(counter.value_at(0.0), 0.0);
        assert_eq!(counter.value_at(2000.0), 150.0);
        assert_eq!(counter.value_at(2600.0), 150.0);
        assert!(counter.is_complete(2000.0));
        assert!(!counter.is_complete(1999.0));
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        for (target, decimals) in [(150.0, 0), (10_000_000.0, 0), (99.9, 1), (4.8, 1), (1.0, 0)] {
            let counter = CountUp::new(target, 2000.0).with_decimals(decimals);
            let mut last = 0.0;
            for ms in (0..=2100).step_by(7) {
                let v = counter.value_at(ms as f64);
                assert!(v >= last, "target {} went backwards at {}ms", target, ms);
                assert!(v <= target, "target {} overshot at {}ms: {}", target, ms, v);
                last = v;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn last_frame_before_end_is_below_target() {
        let counter = CountUp::new(150.0, 2000.0);
        let almost = counter.value_at(1999.0);
        assert!(almost <= 150.0);
        assert_eq!(almost.fract(), 0.0);
    }

    #[test]
    fn degenerate_inputs_complete_immediately() {
        assert_eq!(CountUp::new(42.0, 0.0).value_at(0.0), 42.0);
        assert_eq!(CountUp::new(42.0, -5.0).value_at(0.0), 42.0);
        assert_eq!(CountUp::new(f64::NAN, 1000.0).value_at(500.0), 0.0);
        assert_eq!(CountUp::new(42.0, 1000.0).value_at(-100.0), 0.0);
    }

    #[test]
    fn negative_targets_stay_within_bounds() {
        let counter = CountUp::new(-300.0, 1000.0);
        for ms in (0..=1000).step_by(50) {
            let v = counter.value_at(ms as f64);
            assert!(v <= 0.0 && v >= -300.0);
        }
    }

    #[test]
    fn easing_shapes_the_count() {
        let linear = CountUp::new(150.0, 2000.0).with_easing(Easing::Linear);
        assert_eq!(linear.value_at(1000.0), 75.0);
        let quart = CountUp::new(150.0, 2000.0);
        assert!(quart.value_at(1000.0) > 75.0);
        assert_eq!(linear.value_at(2000.0), quart.value_at(2000.0));
    }

    #[test]
    fn observes_at_the_default_threshold_unless_told() {
        let counter = CountUp::new(150.0, 2000.0);
        assert_eq!(counter.observer_options(), ObserverOptions::default());
        assert_eq!(counter.observer_options().threshold, DEFAULT_THRESHOLD);
        assert_eq!(counter.with_threshold(0.5).observer_options().threshold, 0.5);
    }

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(10_000_000.0, 0), "10,000,000");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(-45210.0, 0), "-45,210");
        assert_eq!(format_grouped(-0.001, 1), "0.0");
        assert_eq!(CountUp::new(99.9, 1000.0).with_decimals(1).display(99.9), "99.9");
    }

    #[test]
    fn tween_steps_to_target() {
        let tween = Tween::new(29, 19);
        assert_eq!(tween.value_at_step(0), 29);
        assert_eq!(tween.value_at_step(Tween::STEPS), 19);
        assert_eq!(tween.value_at_step(Tween::STEPS + 3), 19);
        assert!(!tween.is_finished(Tween::STEPS - 1));
        assert!(tween.is_finished(Tween::STEPS));
        let mid = tween.value_at_step(10);
        assert!(mid < 29 && mid >= 19);
        assert_eq!(tween.interval_ms(Tween::DURATION_MS), 25);
        assert_eq!(Tween { steps: 0, ..tween }.interval_ms(0), 1);
    }
}
