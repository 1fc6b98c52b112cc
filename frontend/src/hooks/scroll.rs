use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::dom::{self, listen_window};
use crate::motion::scroll::{
    element_top_absolute, horizontal_scroll, is_scrolled, parallax_offset, scroll_progress, scroll_rotation,
};

/// Recomputes a value from the element behind `node` on every scroll tick,
/// plus once on mount.
#[hook]
fn use_scroll_measure<D>(deps: D, measure: fn(&Element, &D) -> Option<f64>) -> (NodeRef, f64)
where
    D: PartialEq + Clone + 'static,
{
    let node = use_node_ref();
    let value = use_state_eq(|| 0.0);

    {
        let node = node.clone();
        let value = value.clone();
        use_effect_with_deps(
            move |deps: &D| {
                let deps = deps.clone();
                let update = move || {
                    if let Some(element) = node.cast::<Element>() {
                        if let Some(v) = measure(&element, &deps) {
                            value.set(v);
                        }
                    }
                };
                update();
                let subscription = listen_window("scroll", move |_| update());
                move || drop(subscription)
            },
            deps,
        );
    }

    (node, *value)
}

#[hook]
pub fn use_parallax(speed: f64) -> (NodeRef, f64) {
    use_scroll_measure(speed, |element, speed| {
        let y = dom::scroll_y();
        let (_, viewport_height) = dom::viewport();
        let top = element_top_absolute(element.get_bounding_client_rect().top(), y);
        Some(parallax_offset(y, top, viewport_height, *speed))
    })
}

#[hook]
pub fn use_scroll_rotation(max_rotation: f64) -> (NodeRef, f64) {
    use_scroll_measure(max_rotation, |element, max_rotation| {
        let rect = element.get_bounding_client_rect();
        let (_, viewport_height) = dom::viewport();
        Some(scroll_rotation(rect.top(), rect.height(), viewport_height, *max_rotation))
    })
}

#[hook]
pub fn use_horizontal_scroll(speed: f64) -> (NodeRef, f64) {
    use_scroll_measure(speed, |element, speed| {
        let rect = element.get_bounding_client_rect();
        let (viewport_width, viewport_height) = dom::viewport();
        horizontal_scroll(
            rect.top(),
            rect.height(),
            viewport_height,
            element.scroll_width() as f64,
            viewport_width,
            *speed,
        )
    })
}

/// Whole-document scroll progress in `[0, 1]`.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let (_, viewport_height) = dom::viewport();
                    progress.set(scroll_progress(dom::scroll_y(), dom::document_scroll_height(), viewport_height));
                };
                update();
                let subscription = listen_window("scroll", move |_| update());
                move || drop(subscription)
            },
            (),
        );
    }

    *progress
}

/// Whether the page has scrolled far enough for the nav to turn solid.
#[hook]
pub fn use_is_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || scrolled.set(is_scrolled(dom::scroll_y()));
                update();
                let subscription = listen_window("scroll", move |_| update());
                move || drop(subscription)
            },
            (),
        );
    }

    *scrolled
}

/// Callback that smooth-scrolls to the element matching a CSS selector.
#[hook]
pub fn use_smooth_scroll() -> Callback<String> {
    use_callback(
        |selector: String, _| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            match document.query_selector(&selector) {
                Ok(Some(element)) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                Ok(None) => log::debug!("no scroll target for {}", selector),
                Err(err) => log::warn!("bad scroll selector {}: {:?}", selector, err),
            }
        },
        (),
    )
}
