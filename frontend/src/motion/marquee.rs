//! Looping strip layout and animation styles.

/// The track holds the sequence twice so the keyframe can jump from -50%
/// back to 0 without a visible seam.
pub const TRACK_COPIES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    #[default]
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    /// Seconds per full loop.
    pub speed_secs: f64,
    pub direction: MarqueeDirection,
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig { speed_secs: 40.0, direction: MarqueeDirection::Forward, pause_on_hover: true }
    }
}

impl MarqueeConfig {
    /// Hovering only flips the play state, so the strip freezes where it is
    /// and resumes from there.
    pub fn track_style(&self, hovered: bool) -> String {
        if !(self.speed_secs > 0.0) || !self.speed_secs.is_finite() {
            return "animation: none;".to_string();
        }
        let direction = match self.direction {
            MarqueeDirection::Forward => "normal",
            MarqueeDirection::Reverse => "reverse",
        };
        let state = if self.pause_on_hover && hovered { "paused" } else { "running" };
        format!(
            "animation: marquee {}s linear infinite; animation-direction: {}; animation-play-state: {};",
            self.speed_secs, direction, state
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackSlot {
    pub copy: usize,
    pub index: usize,
}

impl TrackSlot {
    /// Copies after the first are decorative and hidden from assistive tech.
    pub fn aria_hidden(&self) -> bool {
        self.copy > 0
    }
}

/// Slots for every rendered item instance, copy-major.
pub fn track_slots(len: usize) -> Vec<TrackSlot> {
    (0..TRACK_COPIES)
        .flat_map(|copy| (0..len).map(move |index| TrackSlot { copy, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_duplicates_the_sequence() {
        let slots = track_slots(6);
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0], TrackSlot { copy: 0, index: 0 });
        assert_eq!(slots[6], TrackSlot { copy: 1, index: 0 });
        assert_eq!(slots.iter().filter(|s| s.aria_hidden()).count(), 6);
        assert!(track_slots(0).is_empty());
    }

    #[test]
    fn hover_pauses_without_restarting() {
        let config = MarqueeConfig::default();
        let running = config.track_style(false);
        let paused = config.track_style(true);
        assert!(running.contains("animation-play-state: running;"));
        assert!(paused.contains("animation-play-state: paused;"));
        let animation = |s: &str| s.split(';').next().unwrap().to_string();
        assert_eq!(animation(&running), animation(&paused));
    }

    #[test]
    fn hover_ignored_when_disabled() {
        let config = MarqueeConfig { pause_on_hover: false, ..MarqueeConfig::default() };
        assert!(config.track_style(true).contains("running"));
    }

    #[test]
    fn reverse_and_degenerate_speed() {
        let config = MarqueeConfig { speed_secs: 25.0, direction: MarqueeDirection::Reverse, pause_on_hover: true };
        let style = config.track_style(false);
        assert!(style.starts_with("animation: marquee 25s linear infinite;"));
        assert!(style.contains("animation-direction: reverse;"));
        let stopped = MarqueeConfig { speed_secs: 0.0, ..config };
        assert_eq!(stopped.track_style(false), "animation: none;");
    }
}
