//! Thin wrappers over browser APIs that hand back [`Subscription`]s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, HtmlDocument, HtmlTextAreaElement};

use crate::motion::pointer::Bounds;
use crate::motion::Subscription;

/// Adds `handler` for `event` on `target`. The listener is removed and the
/// closure freed when the returned subscription goes away.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Subscription {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("could not listen for {}: {:?}", event, err);
        return Subscription::noop();
    }
    let target = target.clone();
    Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

/// Passive listener on `window`, the shape every scroll/resize/mousemove
/// effect uses.
pub fn listen_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Subscription {
    match web_sys::window() {
        Some(window) => listen(&window, event, true, handler),
        None => Subscription::noop(),
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// `(width, height)` of the layout viewport.
pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn document_scroll_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}

/// Puts `text` on the clipboard through a throwaway off-screen textarea and
/// the legacy `execCommand("copy")`. Returns whether the browser accepted it.
pub fn copy_text(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(area) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };
    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let _ = area.set_attribute("style", "position: fixed; top: -1000px; opacity: 0;");
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = document
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    area.remove();
    if !copied {
        warn!("copy command was rejected by the browser");
    }
    copied
}

/// Calls `on_frame(elapsed_ms)` once per animation frame until it returns
/// `false` or the subscription is dropped.
pub fn run_frames(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Subscription {
    let Some(window) = web_sys::window() else {
        // no frame clock: jump straight to the final frame
        on_frame(f64::INFINITY);
        return Subscription::noop();
    };

    let start = now_ms();
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    {
        let pending = pending.clone();
        let frame_ref = frame.clone();
        let window = window.clone();
        *frame.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            pending.set(None);
            if !on_frame(now_ms() - start) {
                return;
            }
            if let Some(callback) = frame_ref.borrow().as_ref() {
                pending.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }));
    }

    if let Some(callback) = frame.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
        }
    }

    Subscription::new(move || {
        if let Some(id) = pending.take() {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the closure <-> cell cycle
        frame.borrow_mut().take();
        debug!("frame loop torn down");
    })
}
