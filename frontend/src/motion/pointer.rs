//! Pointer-reactive effects: magnetic pull and the custom cursor dot.

use super::easing::EXPO_OUT;

pub const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor-hover]";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnet {
    pub strength: f64,
    pub max_radius: f64,
}

impl Default for Magnet {
    fn default() -> Self {
        Magnet { strength: 0.4, max_radius: 24.0 }
    }
}

impl Magnet {
    /// Offset toward the pointer, clamped to `max_radius`.
    pub fn offset(&self, pointer: Point, bounds: &Bounds) -> Point {
        let center = bounds.center();
        let pull = Point::new((pointer.x - center.x) * self.strength, (pointer.y - center.y) * self.strength);
        let length = pull.length();
        if !length.is_finite() {
            return Point::ORIGIN;
        }
        if length <= self.max_radius || length == 0.0 {
            return pull;
        }
        let scale = self.max_radius.max(0.0) / length;
        Point::new(pull.x * scale, pull.y * scale)
    }
}

/// Snappy while following, slower when springing back to rest.
pub fn magnet_style(offset: Point, following: bool) -> String {
    let duration = if following { 200 } else { 600 };
    format!(
        "display: inline-flex; transform: translate3d({:.2}px, {:.2}px, 0); transition: transform {}ms {};",
        offset.x,
        offset.y,
        duration,
        EXPO_OUT.css()
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CursorState {
    pub position: Point,
    pub visible: bool,
    pub hovering: bool,
}

impl CursorState {
    pub const DOT: f64 = 12.0;
    pub const RING: f64 = 60.0;

    pub fn moved(self, position: Point, over_interactive: bool) -> Self {
        CursorState { position, visible: true, hovering: over_interactive }
    }

    pub fn left_window(self) -> Self {
        CursorState { visible: false, ..self }
    }

    pub fn entered_window(self) -> Self {
        CursorState { visible: true, ..self }
    }

    pub fn size(&self) -> f64 {
        if self.hovering {
            Self::RING
        } else {
            Self::DOT
        }
    }

    pub fn wrapper_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; transform: translate(-50%, -50%); opacity: {}; transition: opacity 0.3s ease;",
            self.position.x,
            self.position.y,
            if self.visible { 1 } else { 0 }
        )
    }

    pub fn dot_style(&self) -> String {
        let easing = EXPO_OUT.css();
        format!(
            "width: {size}px; height: {size}px; transition: width 0.3s {easing}, height 0.3s {easing};",
            size = self.size(),
            easing = easing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Bounds = Bounds { left: 100.0, top: 100.0, width: 200.0, height: 60.0 };

    #[test]
    fn pulls_toward_pointer() {
        let magnet = Magnet { strength: 0.4, max_radius: 100.0 };
        let offset = magnet.offset(Point::new(250.0, 140.0), &BUTTON);
        assert!((offset.x - 20.0).abs() < 1e-9);
        assert!((offset.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn pull_is_bounded() {
        let magnet = Magnet::default();
        let offset = magnet.offset(Point::new(2000.0, -900.0), &BUTTON);
        assert!((offset.x.hypot(offset.y) - magnet.max_radius).abs() < 1e-9);
        assert!(offset.x > 0.0 && offset.y < 0.0);
    }

    #[test]
    fn centered_pointer_rests() {
        assert_eq!(Magnet::default().offset(BUTTON.center(), &BUTTON), Point::ORIGIN);
        assert_eq!(Magnet::default().offset(Point::new(f64::NAN, 0.0), &BUTTON), Point::ORIGIN);
    }

    #[test]
    fn rest_style_uses_slow_return() {
        let style = magnet_style(Point::ORIGIN, false);
        assert!(style.contains("translate3d(0.00px, 0.00px, 0)"));
        assert!(style.contains("600ms"));
    }

    #[test]
    fn cursor_grows_over_interactive_elements() {
        let cursor = CursorState::default().moved(Point::new(10.0, 20.0), false);
        assert!(cursor.visible);
        assert_eq!(cursor.size(), CursorState::DOT);
        let hovering = cursor.moved(Point::new(11.0, 20.0), true);
        assert_eq!(hovering.size(), CursorState::RING);
        assert!(hovering.dot_style().starts_with("width: 60px; height: 60px;"));
        let gone = hovering.left_window();
        assert!(gone.wrapper_style().contains("opacity: 0;"));
        assert!(gone.entered_window().visible);
    }
}
