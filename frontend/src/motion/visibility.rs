//! Viewport visibility: observer options and the per-element state machine
//! fed by intersection callbacks.

use std::fmt;
use std::str::FromStr;

use log::warn;

use super::MotionError;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -80px 0px";

/// One side of a root margin, in the units `IntersectionObserver` accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{}px", v),
            MarginLength::Percent(v) => write!(f, "{}%", v),
        }
    }
}

impl FromStr for MarginLength {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, make): (&str, fn(f64) -> MarginLength) = if let Some(n) = s.strip_suffix("px") {
            (n, MarginLength::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, MarginLength::Percent)
        } else if s == "0" {
            ("0", MarginLength::Px)
        } else {
            return Err("lengths must be in px or %");
        };
        number
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(make)
            .ok_or("not a number")
    }
}

/// CSS-style margin around the viewport, grown (positive) or shrunk
/// (negative) before intersection is tested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin {
            top: MarginLength::Px(0.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Px(-80.0),
            left: MarginLength::Px(0.0),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = MotionError;

    /// Accepts the 1 to 4 value CSS shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| MotionError::InvalidRootMargin { input: s.to_string(), reason };
        let parts = s
            .split_whitespace()
            .map(MarginLength::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            [] => return Err(invalid("empty margin")),
            _ => return Err(invalid("more than four values")),
        };
        Ok(RootMargin { top, right, bottom, left })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub trigger_once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        ObserverOptions {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            trigger_once: true,
        }
    }
}

impl ObserverOptions {
    /// Threshold is clamped to `[0, 1]`; NaN falls back to the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Like `with_root_margin` for the CSS shorthand. Unparseable input
    /// keeps the default margin.
    pub fn with_root_margin_str(self, root_margin: &str) -> Self {
        match root_margin.parse::<RootMargin>() {
            Ok(margin) => self.with_root_margin(margin),
            Err(err) => {
                warn!("{}, using {}", err, DEFAULT_ROOT_MARGIN);
                self.with_root_margin(RootMargin::default())
            }
        }
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityState {
    Unobserved,
    Observing,
    /// Latched visible; only reachable with trigger-once.
    Triggered,
    Active,
    Inactive,
}

/// What the driver should do with the underlying observer after an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverAction {
    Keep,
    Unobserve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub changed: bool,
    pub action: ObserverAction,
}

impl Step {
    const IDLE: Step = Step { changed: false, action: ObserverAction::Keep };
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityMachine {
    trigger_once: bool,
    state: VisibilityState,
}

impl VisibilityMachine {
    pub fn new(trigger_once: bool) -> Self {
        VisibilityMachine { trigger_once, state: VisibilityState::Unobserved }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, VisibilityState::Triggered | VisibilityState::Active)
    }

    pub fn observe(&mut self) {
        if self.state == VisibilityState::Unobserved {
            self.state = VisibilityState::Observing;
        }
    }

    /// Feeds one intersection entry.
    pub fn on_entry(&mut self, intersecting: bool) -> Step {
        use VisibilityState::*;

        let next = match (self.state, intersecting, self.trigger_once) {
            (Triggered, _, _) => return Step { changed: false, action: ObserverAction::Unobserve },
            (_, true, true) => Triggered,
            (_, true, false) => Active,
            (Unobserved | Observing, false, _) => Observing,
            (Active | Inactive, false, false) => Inactive,
            (state, false, true) => state,
        };
        let was_visible = self.is_visible();
        self.state = next;
        let action = if next == Triggered { ObserverAction::Unobserve } else { ObserverAction::Keep };
        if self.is_visible() == was_visible {
            return Step { action, ..Step::IDLE };
        }
        Step { changed: true, action }
    }

    /// The environment cannot observe intersections: reveal immediately so
    /// content is never left hidden.
    pub fn unsupported(&mut self) -> Step {
        let was_visible = self.is_visible();
        self.state = if self.trigger_once { VisibilityState::Triggered } else { VisibilityState::Active };
        Step { changed: !was_visible, action: ObserverAction::Keep }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_once_latches() {
        let mut machine = VisibilityMachine::new(true);
        assert_eq!(machine.state(), VisibilityState::Unobserved);
        machine.observe();
        assert_eq!(machine.on_entry(false), Step::IDLE);
        assert!(!machine.is_visible());

        let step = machine.on_entry(true);
        assert!(step.changed);
        assert_eq!(step.action, ObserverAction::Unobserve);
        assert_eq!(machine.state(), VisibilityState::Triggered);

        for intersecting in [false, true, false, false] {
            let step = machine.on_entry(intersecting);
            assert!(!step.changed);
            assert!(machine.is_visible());
        }
    }

    #[test]
    fn replayable_toggles() {
        let mut machine = VisibilityMachine::new(false);
        machine.observe();
        assert!(machine.on_entry(true).changed);
        assert_eq!(machine.state(), VisibilityState::Active);
        assert!(!machine.on_entry(true).changed);
        assert!(machine.on_entry(false).changed);
        assert_eq!(machine.state(), VisibilityState::Inactive);
        assert!(machine.on_entry(true).changed);
        assert_eq!(machine.on_entry(true).action, ObserverAction::Keep);
    }

    #[test]
    fn unsupported_environment_reveals() {
        let mut machine = VisibilityMachine::new(true);
        assert!(machine.unsupported().changed);
        assert!(machine.is_visible());
        assert!(!machine.unsupported().changed);

        let mut replay = VisibilityMachine::new(false);
        replay.unsupported();
        assert_eq!(replay.state(), VisibilityState::Active);
    }

    #[test]
    fn root_margin_shorthand() {
        let margin: RootMargin = DEFAULT_ROOT_MARGIN.parse().unwrap();
        assert_eq!(margin, RootMargin::default());
        assert_eq!(margin.to_string(), DEFAULT_ROOT_MARGIN);

        let two: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(two.bottom, MarginLength::Px(10.0));
        assert_eq!(two.left, MarginLength::Percent(5.0));

        let zero: RootMargin = "0".parse().unwrap();
        assert_eq!(zero.to_string(), "0px 0px 0px 0px");
    }

    #[test]
    fn root_margin_rejects_garbage() {
        assert!(matches!("".parse::<RootMargin>(), Err(MotionError::InvalidRootMargin { .. })));
        assert!("10em".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!("abcpx".parse::<RootMargin>().is_err());
    }

    #[test]
    fn bad_root_margin_falls_back_to_default() {
        let options = ObserverOptions::default().with_root_margin_str("0px 0px -120px 0px");
        assert_eq!(options.root_margin.bottom, MarginLength::Px(-120.0));

        for garbage in ["", "10em", "top", "1px 2px 3px 4px 5px"] {
            let options = ObserverOptions::default()
                .with_root_margin_str("5%")
                .with_root_margin_str(garbage);
            assert_eq!(options.root_margin, RootMargin::default());
            assert_eq!(options.root_margin.to_string(), DEFAULT_ROOT_MARGIN);
        }
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ObserverOptions::default().with_threshold(4.0).threshold, 1.0);
        assert_eq!(ObserverOptions::default().with_threshold(-1.0).threshold, 0.0);
        assert_eq!(ObserverOptions::default().with_threshold(f64::NAN).threshold, DEFAULT_THRESHOLD);
    }
}
