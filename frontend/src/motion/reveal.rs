//! Inline-style generation for block, staggered, clip and image reveals.

use super::easing::{Easing, EXPO_OUT};

pub const DEFAULT_DURATION_MS: u32 = 1200;
pub const DEFAULT_DISTANCE: f64 = 60.0;

const VISIBLE: &str = "opacity: 1; transform: none; filter: none;";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
    Blur,
    Rotate,
    None,
}

/// Starting-pose magnitudes. Block reveals and staggered children use
/// different presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealProfile {
    pub distance: f64,
    pub scale_from: f64,
    pub blur_px: f64,
    pub blur_distance: f64,
}

impl RevealProfile {
    pub fn block(distance: f64) -> Self {
        RevealProfile { distance, scale_from: 0.85, blur_px: 20.0, blur_distance: distance / 2.0 }
    }

    pub const STAGGER: RevealProfile =
        RevealProfile { distance: 50.0, scale_from: 0.9, blur_px: 10.0, blur_distance: 30.0 };
}

/// Hidden-state declarations for `direction`.
pub fn hidden_css(direction: Direction, profile: &RevealProfile) -> String {
    let d = profile.distance;
    match direction {
        Direction::Up => format!("opacity: 0; transform: translateY({}px);", d),
        Direction::Down => format!("opacity: 0; transform: translateY({}px);", -d),
        Direction::Left => format!("opacity: 0; transform: translateX({}px);", d),
        Direction::Right => format!("opacity: 0; transform: translateX({}px);", -d),
        Direction::Scale => format!("opacity: 0; transform: scale({});", profile.scale_from),
        Direction::Blur => format!(
            "opacity: 0; filter: blur({}px); transform: translateY({}px);",
            profile.blur_px, profile.blur_distance
        ),
        Direction::Rotate => format!("opacity: 0; transform: translateY({}px) rotate(5deg);", d),
        Direction::None => "opacity: 0;".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub properties: &'static str,
}

impl Transition {
    pub fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Transition { duration_ms, delay_ms, easing: EXPO_OUT, properties: "opacity, transform, filter" }
    }

    pub fn properties(mut self, properties: &'static str) -> Self {
        self.properties = properties;
        self
    }

    pub fn css(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {}; transition-property: {};",
            self.duration_ms,
            self.delay_ms,
            self.easing.css(),
            self.properties
        )
    }
}

/// Whole-block reveal: initial pose while hidden, rest pose once visible.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockReveal {
    pub direction: Direction,
    pub distance: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for BlockReveal {
    fn default() -> Self {
        BlockReveal {
            direction: Direction::Up,
            distance: DEFAULT_DISTANCE,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
        }
    }
}

impl BlockReveal {
    pub fn style(&self, visible: bool) -> String {
        let transition = Transition::new(self.duration_ms, self.delay_ms).css();
        if visible {
            format!("{} {}", transition, VISIBLE)
        } else {
            format!("{} {}", transition, hidden_css(self.direction, &RevealProfile::block(self.distance)))
        }
    }
}

/// Per-child style for a staggered group. While hidden every child resets
/// with no delay so a replay starts cleanly.
pub fn stagger_item_style(index: usize, stagger_ms: u32, direction: Direction, duration_ms: u32, visible: bool) -> String {
    if visible {
        let delay = super::split::unit_delay(index, 0, stagger_ms);
        format!("{} {}", Transition::new(duration_ms, delay).css(), VISIBLE)
    } else {
        format!("{} {}", Transition::new(duration_ms, 0).css(), hidden_css(direction, &RevealProfile::STAGGER))
    }
}

/// Edge from which a clip reveal uncovers its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClipEdge {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl ClipEdge {
    fn hidden_inset(&self) -> &'static str {
        match self {
            ClipEdge::Up => "inset(100% 0 0 0)",
            ClipEdge::Down => "inset(0 0 100% 0)",
            ClipEdge::Left => "inset(0 100% 0 0)",
            ClipEdge::Right => "inset(0 0 0 100%)",
        }
    }
}

pub fn clip_style(edge: ClipEdge, duration_ms: u32, delay_ms: u32, visible: bool) -> String {
    let inset = if visible { "inset(0 0 0 0)" } else { edge.hidden_inset() };
    format!(
        "clip-path: {}; {}",
        inset,
        Transition::new(duration_ms, delay_ms).properties("clip-path").css()
    )
}

/// Styles for the clipping frame and the image inside it.
pub fn image_reveal_styles(delay_ms: u32, visible: bool) -> (String, String) {
    let (clip, frame_scale, image_scale) = if visible {
        ("inset(0 0 0 0)", "1", "1")
    } else {
        ("inset(0 0 100% 0)", "1.2", "1.1")
    };
    let frame = format!(
        "{} clip-path: {}; transform: scale({});",
        Transition::new(1400, delay_ms).properties("transform, clip-path").css(),
        clip,
        frame_scale
    );
    let image = format!(
        "{} transform: scale({});",
        Transition::new(1400, delay_ms).properties("transform").css(),
        image_scale
    );
    (frame, image)
}

/// Plain translate-only reveal used by headings and masked text.
pub fn slide_style(hidden_transform: &str, duration_ms: u32, delay_ms: u32, visible: bool, fade: bool) -> String {
    let transition = Transition::new(duration_ms, delay_ms)
        .properties(if fade { "opacity, transform" } else { "transform" })
        .css();
    let opacity = match (fade, visible) {
        (false, _) => "",
        (true, true) => " opacity: 1;",
        (true, false) => " opacity: 0;",
    };
    let transform = if visible { "none" } else { hidden_transform };
    format!("{}{} transform: {};", transition, opacity, transform)
}

pub fn highlight_style(delay_ms: u32, visible: bool) -> String {
    format!(
        "{} transform: scaleX({});",
        Transition::new(1000, delay_ms).properties("transform").css(),
        if visible { 1 } else { 0 }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_reveal_before_and_after_intersection() {
        let reveal = BlockReveal { direction: Direction::Up, distance: 60.0, duration_ms: 1200, delay_ms: 100 };

        let hidden = reveal.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("transform: translateY(60px);"));

        let shown = reveal.style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
        assert!(shown.contains("transition-delay: 100ms;"));
        assert!(shown.contains("transition-duration: 1200ms;"));
        assert!(shown.contains("cubic-bezier(0.16, 1, 0.3, 1)"));
    }

    #[test]
    fn every_direction_has_a_hidden_pose() {
        let profile = RevealProfile::block(40.0);
        assert!(hidden_css(Direction::Down, &profile).contains("translateY(-40px)"));
        assert!(hidden_css(Direction::Left, &profile).contains("translateX(40px)"));
        assert!(hidden_css(Direction::Right, &profile).contains("translateX(-40px)"));
        assert!(hidden_css(Direction::Scale, &profile).contains("scale(0.85)"));
        let blur = hidden_css(Direction::Blur, &profile);
        assert!(blur.contains("blur(20px)") && blur.contains("translateY(20px)"));
        assert!(hidden_css(Direction::Rotate, &profile).contains("rotate(5deg)"));
        assert_eq!(hidden_css(Direction::None, &profile), "opacity: 0;");
    }

    #[test]
    fn stagger_delays_only_apply_when_visible() {
        let shown = stagger_item_style(3, 80, Direction::Up, 1000, true);
        assert!(shown.contains("transition-delay: 240ms;"));
        let hidden = stagger_item_style(3, 80, Direction::Up, 1000, false);
        assert!(hidden.contains("transition-delay: 0ms;"));
        assert!(hidden.contains("translateY(50px)"));
    }

    #[test]
    fn clip_goes_from_edge_to_open() {
        assert!(clip_style(ClipEdge::Left, 1200, 0, false).starts_with("clip-path: inset(0 100% 0 0);"));
        assert!(clip_style(ClipEdge::Up, 1200, 0, false).starts_with("clip-path: inset(100% 0 0 0);"));
        assert!(clip_style(ClipEdge::Up, 1200, 0, true).starts_with("clip-path: inset(0 0 0 0);"));
        let open = clip_style(ClipEdge::Left, 1200, 50, true);
        assert!(open.starts_with("clip-path: inset(0 0 0 0);"));
        assert!(open.contains("transition-property: clip-path;"));
    }

    #[test]
    fn image_reveal_scales_down_into_place() {
        let (frame, image) = image_reveal_styles(0, false);
        assert!(frame.contains("scale(1.2)") && image.contains("scale(1.1)"));
        let (frame, image) = image_reveal_styles(0, true);
        assert!(frame.contains("transform: scale(1);") && image.contains("transform: scale(1);"));
    }
}
