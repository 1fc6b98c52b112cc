//! Disposable handles for listeners, observers, frame loops and timers.

use std::cell::Cell;
use std::rc::Rc;

/// Runs its teardown exactly once, on drop.
#[must_use = "dropping a subscription tears it down immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Subscription { teardown: Some(Box::new(teardown)) }
    }

    /// Nothing to tear down, e.g. when setup fell back to a static state.
    pub fn noop() -> Self {
        Subscription { teardown: None }
    }

}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Liveness flag shared between a component and the callbacks it schedules.
/// Callbacks check it before writing state so nothing lands after unmount.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl Default for MountFlag {
    fn default() -> Self {
        MountFlag(Rc::new(Cell::new(true)))
    }
}

impl MountFlag {
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while still mounted. Returns whether it ran.
    pub fn run(&self, f: impl FnOnce()) -> bool {
        if self.is_mounted() {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::counter::CountUp;
    use std::cell::RefCell;

    #[test]
    fn teardown_runs_once() {
        let count = Rc::new(Cell::new(0));
        let sub = {
            let count = count.clone();
            Subscription::new(move || count.set(count.get() + 1))
        };
        drop(sub);
        assert_eq!(count.get(), 1);

        {
            let count = count.clone();
            let _sub = Subscription::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 2);
        drop(Subscription::noop());
    }

    // Covers the MountFlag guard on its own; the browser-side frame loop
    // and observer are not driven here.
    #[test]
    fn mount_flag_blocks_writes_after_unmount() {
        let counter = CountUp::new(150.0, 2000.0);
        let mounted = MountFlag::default();
        let writes = Rc::new(RefCell::new(Vec::new()));

        let frame = {
            let mounted = mounted.clone();
            let writes = writes.clone();
            move |elapsed: f64| mounted.run(|| writes.borrow_mut().push(counter.value_at(elapsed)))
        };
        let teardown = Subscription::new({
            let mounted = mounted.clone();
            move || mounted.unmount()
        });

        assert!(frame(0.0));
        assert!(frame(500.0));
        drop(teardown);
        assert!(!frame(1000.0));
        assert!(!frame(2500.0));

        assert_eq!(writes.borrow().len(), 2);
        assert!(!mounted.is_mounted());
    }
}
