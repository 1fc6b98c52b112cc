use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::visibility::{ObserverAction, ObserverOptions, VisibilityMachine};
use crate::motion::{MountFlag, Subscription};

/// Watches `element` and reports every visibility flip to `on_change`.
///
/// Falls back to reporting visible straight away when the browser has no
/// `IntersectionObserver`.
pub fn observe_visibility(
    element: Option<Element>,
    options: &ObserverOptions,
    on_change: impl Fn(bool) + 'static,
) -> Subscription {
    let machine = Rc::new(RefCell::new(VisibilityMachine::new(options.trigger_once)));
    let on_change = Rc::new(on_change);

    let Some(element) = element else {
        debug!("visibility target not mounted, revealing");
        if machine.borrow_mut().unsupported().changed {
            on_change(true);
        }
        return Subscription::noop();
    };

    let live = MountFlag::default();
    let callback = {
        let machine = machine.clone();
        let on_change = on_change.clone();
        let live = live.clone();
        let target = element.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let step = machine.borrow_mut().on_entry(entry.is_intersecting());
                if step.changed {
                    let visible = machine.borrow().is_visible();
                    debug!("visibility changed to {:?}", machine.borrow().state());
                    // entries already queued when the observer disconnects are dropped
                    live.run(|| on_change(visible));
                }
                if step.action == ObserverAction::Unobserve {
                    observer.unobserve(&target);
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            machine.borrow_mut().observe();
            observer.observe(&element);
            Subscription::new(move || {
                live.unmount();
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), showing content", err);
            if machine.borrow_mut().unsupported().changed {
                on_change(true);
            }
            Subscription::noop()
        }
    }
}

/// `(node_ref, is_visible)` for one element. Attach the ref to the element
/// to watch.
#[hook]
pub fn use_scroll_animation(options: ObserverOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &ObserverOptions| {
                let subscription = observe_visibility(node.cast::<Element>(), options, move |v| visible.set(v));
                move || drop(subscription)
            },
            options,
        );
    }

    (node, *visible)
}
