use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::dom::{self, listen, listen_window};
use crate::motion::pointer::{CursorState, Magnet, Point, INTERACTIVE_SELECTOR};
use crate::motion::Subscription;

/// Last pointer position in client coordinates.
#[hook]
pub fn use_mouse_position() -> Point {
    let position = use_state_eq(Point::default);

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = listen_window("mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        position.set(Point::new(event.client_x() as f64, event.client_y() as f64));
                    }
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *position
}

pub struct MagneticHandle {
    pub node: NodeRef,
    pub offset: Point,
    pub following: bool,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Pull toward the pointer while it is over the element; springs back to
/// rest on leave. The handlers never cancel the event.
#[hook]
pub fn use_magnetic(magnet: Magnet) -> MagneticHandle {
    let node = use_node_ref();
    let offset = use_state_eq(|| Point::ORIGIN);
    let following = use_state_eq(|| false);

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let following = following.clone();
        use_callback(
            move |event: MouseEvent, magnet: &Magnet| {
                let Some(element) = node.cast::<Element>() else {
                    return;
                };
                let pointer = Point::new(event.client_x() as f64, event.client_y() as f64);
                offset.set(magnet.offset(pointer, &dom::bounds(&element)));
                following.set(true);
            },
            magnet,
        )
    };

    let onmouseleave = {
        let offset = offset.clone();
        let following = following.clone();
        use_callback(
            move |_event: MouseEvent, _| {
                offset.set(Point::ORIGIN);
                following.set(false);
            },
            (),
        )
    };

    MagneticHandle { node, offset: *offset, following: *following, onmousemove, onmouseleave }
}

/// Cursor dot state driven by window and document pointer events.
#[hook]
pub fn use_cursor() -> CursorState {
    let cursor = use_state_eq(CursorState::default);
    let latest = use_mut_ref(CursorState::default);

    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |_| {
                let apply = move |f: &dyn Fn(CursorState) -> CursorState| {
                    let next = f(*latest.borrow());
                    *latest.borrow_mut() = next;
                    cursor.set(next);
                };
                let on_move = apply.clone();
                let on_leave = apply.clone();
                let on_enter = apply;

                let mut subscriptions: Vec<Subscription> = vec![listen_window("mousemove", move |event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let over_interactive = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                        .is_some();
                    let position = Point::new(mouse.client_x() as f64, mouse.client_y() as f64);
                    on_move(&|state: CursorState| state.moved(position, over_interactive));
                })];

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    subscriptions.push(listen(&document, "mouseleave", true, move |_| {
                        on_leave(&|state: CursorState| state.left_window())
                    }));
                    subscriptions.push(listen(&document, "mouseenter", true, move |_| {
                        on_enter(&|state: CursorState| state.entered_window())
                    }));
                }

                move || drop(subscriptions)
            },
            (),
        );
    }

    *cursor
}
