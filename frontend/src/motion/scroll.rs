//! Scroll-coupled offsets and progress values, recomputed on every scroll tick.

/// Nav bar switches to its solid style past this many pixels.
pub const NAV_SCROLLED_AT: f64 = 20.0;

pub fn element_top_absolute(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y
}

/// Unclamped so elements can drift past their layout box.
pub fn parallax_offset(scroll_y: f64, element_top: f64, viewport_height: f64, speed: f64) -> f64 {
    (scroll_y - element_top + viewport_height) * speed
}

/// How far the whole document has been scrolled, in `[0, 1]`. Documents
/// shorter than the viewport report 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn scroll_rotation(rect_top: f64, rect_height: f64, viewport_height: f64, max_rotation: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let center = rect_top + rect_height / 2.0;
    (1.0 - center / viewport_height) * max_rotation
}

/// Horizontal translation for a strip wider than the viewport, driven by how
/// far the strip has travelled through the viewport. `None` while off-screen,
/// so the last value is kept.
pub fn horizontal_scroll(
    rect_top: f64,
    rect_height: f64,
    viewport_height: f64,
    scroll_width: f64,
    viewport_width: f64,
    speed: f64,
) -> Option<f64> {
    let on_screen = rect_top < viewport_height && rect_top + rect_height > 0.0;
    let span = viewport_height + rect_height;
    if !on_screen || span <= 0.0 {
        return None;
    }
    let progress = (viewport_height - rect_top) / span;
    Some((progress * (scroll_width - viewport_width) * speed).max(0.0))
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_moves_linearly_with_scroll() {
        let speed = 0.3;
        let top = 1800.0;
        let vh = 900.0;
        let a = parallax_offset(400.0, top, vh, speed);
        let b = parallax_offset(650.0, top, vh, speed);
        assert!((b - a - speed * 250.0).abs() < 1e-9);
    }

    #[test]
    fn parallax_is_not_clamped() {
        assert!(parallax_offset(0.0, 5000.0, 800.0, 0.5) < 0.0);
        assert!(parallax_offset(90_000.0, 0.0, 800.0, 2.0) > 100_000.0);
    }

    #[test]
    fn absolute_top_cancels_scroll() {
        let rect_top = 300.0;
        let y = 120.0;
        let offset = parallax_offset(y, element_top_absolute(rect_top, y), 1000.0, 1.0);
        assert_eq!(offset, 700.0);
    }

    #[test]
    fn progress_is_a_fraction() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_documents_report_zero() {
        assert_eq!(scroll_progress(0.0, 600.0, 900.0), 0.0);
        assert_eq!(scroll_progress(10.0, 900.0, 900.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 900.0), 0.0);
    }

    #[test]
    fn rotation_is_zero_when_centered() {
        assert_eq!(scroll_rotation(900.0, 200.0, 1000.0, 360.0), 0.0);
        assert_eq!(scroll_rotation(400.0, 200.0, 1000.0, 360.0), 180.0);
        assert_eq!(scroll_rotation(0.0, 0.0, 0.0, 360.0), 0.0);
    }

    #[test]
    fn horizontal_strip_only_moves_on_screen() {
        assert_eq!(horizontal_scroll(1200.0, 500.0, 1000.0, 3000.0, 1400.0, 1.0), None);
        assert_eq!(horizontal_scroll(-600.0, 500.0, 1000.0, 3000.0, 1400.0, 1.0), None);
        let mid = horizontal_scroll(250.0, 500.0, 1000.0, 3000.0, 1400.0, 1.0).unwrap();
        assert!((mid - 800.0).abs() < 1e-9);
        assert_eq!(horizontal_scroll(250.0, 500.0, 1000.0, 800.0, 1400.0, 1.0), Some(0.0));
    }
}
