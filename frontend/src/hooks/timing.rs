//! Timer- and frame-driven hooks. Every pending timer, interval or frame is
//! owned by the effect that scheduled it and is cancelled on cleanup.

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;
use yew::prelude::*;

use super::dom::run_frames;
use super::visibility::use_scroll_animation;
use crate::motion::counter::{CountUp, Tween};
use crate::motion::text_fx::{Scramble, Typewriter};
use crate::motion::visibility::ObserverOptions;
use crate::motion::Subscription;

/// Counts from zero to the target once enough of the element behind the
/// returned ref is visible. Returns the formatted display value.
#[hook]
pub fn use_count_up(counter: CountUp) -> (NodeRef, String) {
    let (node, visible) = use_scroll_animation(counter.observer_options());
    let value = use_state_eq(|| 0.0);
    let started = use_mut_ref(|| false);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(visible, counter): &(bool, CountUp)| {
                let mut subscription = Subscription::noop();
                if *visible && !*started.borrow() {
                    *started.borrow_mut() = true;
                    let counter = counter.clone();
                    subscription = run_frames(move |elapsed| {
                        value.set(counter.value_at(elapsed));
                        !counter.is_complete(elapsed)
                    });
                }
                move || drop(subscription)
            },
            (visible, counter.clone()),
        );
    }

    (node, counter.display(*value))
}

/// Per-item reveal flags flipped one by one, `stagger_ms` apart, once the
/// container is visible.
#[hook]
pub fn use_staggered_reveal(count: usize, stagger_ms: u32) -> (NodeRef, bool, Vec<bool>) {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let revealed = use_state_eq(|| 0usize);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |&(visible, count, stagger_ms): &(bool, usize, u32)| {
                let mut timers = Vec::new();
                if visible {
                    for i in 0..count {
                        let revealed = revealed.clone();
                        let delay = crate::motion::split::unit_delay(i, 0, stagger_ms);
                        // timers fire in index order, so the count only grows
                        timers.push(Timeout::new(delay, move || revealed.set(i + 1)));
                    }
                }
                move || drop(timers)
            },
            (visible, count, stagger_ms),
        );
    }

    let flags = (0..count).map(|i| i < *revealed).collect();
    (node, visible, flags)
}

/// Scrambles `text` into place the first time `start` is true.
#[hook]
pub fn use_text_scramble(text: String, speed_ms: u32, start: bool) -> String {
    let display = use_state_eq(|| text.clone());
    let done = use_mut_ref(|| false);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(text, speed_ms, start): &(String, u32, bool)| {
                if *start && !*done.borrow() {
                    *done.borrow_mut() = true;
                    let mut scramble = Scramble::new(text);
                    let running = interval.clone();
                    *interval.borrow_mut() = Some(Interval::new(*speed_ms, move || {
                        display.set(scramble.tick(Math::random));
                        if scramble.is_done() {
                            drop(running.borrow_mut().take());
                        }
                    }));
                }
                move || drop(interval.borrow_mut().take())
            },
            (text, speed_ms, start),
        );
    }

    (*display).clone()
}

#[hook]
pub fn use_typewriter(texts: Vec<String>, speed_ms: u32, pause_ms: u32) -> String {
    let writer = use_mut_ref(|| Typewriter::new(&texts, speed_ms, pause_ms));
    let tick = use_state(|| 0u64);

    {
        let writer = writer.clone();
        let tick_handle = tick.clone();
        use_effect_with_deps(
            move |tick: &u64| {
                let tick = *tick;
                let delay = writer.borrow().next_delay_ms();
                let timeout = Timeout::new(delay, move || {
                    writer.borrow_mut().step();
                    tick_handle.set(tick + 1);
                });
                move || drop(timeout)
            },
            *tick,
        );
    }

    let shown = writer.borrow().displayed();
    shown
}

/// Integer that slides to `target` whenever it changes.
#[hook]
pub fn use_tween(target: i64) -> i64 {
    let shown = use_state_eq(|| target);
    let latest = use_mut_ref(|| target);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |&target: &i64| {
                let from = *latest.borrow();
                let tween = Tween::new(from, target);
                let mut step = 0;
                if from != target {
                    let running = interval.clone();
                    *interval.borrow_mut() = Some(Interval::new(tween.interval_ms(Tween::DURATION_MS), move || {
                        step += 1;
                        let value = tween.value_at_step(step);
                        *latest.borrow_mut() = value;
                        shown.set(value);
                        if tween.is_finished(step) {
                            drop(running.borrow_mut().take());
                        }
                    }));
                }
                move || drop(interval.borrow_mut().take())
            },
            target,
        );
    }

    *shown
}

/// Runs `on_done` after `delay_ms` unless the component unmounts first.
/// Returns a callback that (re)starts the timer.
#[hook]
pub fn use_delayed(delay_ms: u32, on_done: Callback<()>) -> Callback<()> {
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with_deps(move |_| move || drop(pending.borrow_mut().take()), ());
    }

    use_callback(
        move |_: (), (delay_ms, on_done): &(u32, Callback<()>)| {
            let on_done = on_done.clone();
            // replacing a pending timeout cancels it
            *pending.borrow_mut() = Some(Timeout::new(*delay_ms, move || on_done.emit(())));
        },
        (delay_ms, on_done),
    )
}
