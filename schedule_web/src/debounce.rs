// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE_MS: u32 = 150;

/// Something that can run a callback once after a delay.
///
/// In the browser this is `setTimeout`, unit tests use a mock timer queue with virtual time.
pub trait Scheduler {
    /// Handle of a scheduled callback.
    type Token;

    /// Runs `callback` once, `delay_ms` from now.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token;

    /// Cancels the callback, if it hasn't run yet.
    fn cancel(&self, token: Self::Token);
}

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    type Token = Timeout;

    /// Runs `callback` once, `delay_ms` from now.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, token: Self::Token) {
        // Dropping clears the timeout, the returned closure is never called.
        drop(token.cancel());
    }
}

/// Runs only the last of a burst of callbacks, once `delay_ms` passed without a new one.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<Pending<S::Token>>,
}

/// The last scheduled callback. `fired` is set once the scheduler ran it.
struct Pending<T> {
    token: T,
    fired: Rc<Cell<bool>>,
}

impl<S: Scheduler> Debouncer<S> {
    /// A debouncer waiting `delay_ms` after the last call.
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// The quiet period in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Whether a callback is scheduled and hasn't run yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.fired.get())
    }

    /// Replaces any pending callback with `callback`, and restarts the quiet period.
    pub fn debounce(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        let fired = Rc::new(Cell::new(false));
        let token = {
            let fired = fired.clone();
            let callback = move || {
                fired.set(true);
                callback();
            };
            self.scheduler.schedule(self.delay_ms, Box::new(callback))
        };
        self.pending = Some(Pending { token, fired });
    }

    /// Drops the pending callback without running it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take()
            && !pending.fired.get()
        {
            self.scheduler.cancel(pending.token);
        }
    }
}

impl<S: Scheduler> std::fmt::Debug for Debouncer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay_ms", &self.delay_ms)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::testing::MockTimerQueue;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn recorder() -> (Log, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Log::default();
        let make = {
            let log = log.clone();
            move |name: &'static str| {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(name)) as Box<dyn FnOnce()>
            }
        };
        (log, make)
    }

    #[test]
    fn fires_after_quiet_period() {
        let timers = MockTimerQueue::new();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        let quiet = Duration::from_millis(debouncer.delay_ms().into());
        assert_eq!(timers.move_forward(quiet - Duration::from_millis(1)), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(timers.move_forward(Duration::from_millis(1)), 1);
        assert_eq!(*log.borrow(), ["a"]);
    }

    #[test]
    fn burst_only_runs_last_callback() {
        let timers = MockTimerQueue::new();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        let _ = timers.move_forward(Duration::from_millis(20));
        debouncer.debounce(make("b"));
        let _ = timers.move_forward(Duration::from_millis(20));
        debouncer.debounce(make("c"));

        let _ = timers.move_forward(Duration::from_millis(1000));
        assert_eq!(*log.borrow(), ["c"]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn each_keystroke_restarts_the_window() {
        let timers = MockTimerQueue::new();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        let _ = timers.move_forward(Duration::from_millis(100));
        debouncer.debounce(make("b"));
        let _ = timers.move_forward(Duration::from_millis(100));
        assert!(log.borrow().is_empty());
        let _ = timers.move_forward(Duration::from_millis(50));
        assert_eq!(*log.borrow(), ["b"]);
    }

    #[test]
    fn cancel_drops_pending_callback() {
        let timers = MockTimerQueue::new();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        debouncer.cancel();
        let _ = timers.move_forward(Duration::from_millis(1000));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn separate_bursts_each_fire() {
        let timers = MockTimerQueue::new();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        let _ = timers.move_forward(Duration::from_millis(200));
        debouncer.debounce(make("b"));
        let _ = timers.move_forward(Duration::from_millis(200));
        assert_eq!(*log.borrow(), ["a", "b"]);
    }

    #[test]
    fn fired_callback_is_no_longer_pending() {
        let timers = CountingScheduler::default();
        let mut debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        let (log, make) = recorder();

        debouncer.debounce(make("a"));
        assert!(debouncer.is_pending());
        let _ = timers.queue.move_forward(Duration::from_millis(200));
        assert_eq!(*log.borrow(), ["a"]);
        assert!(!debouncer.is_pending());

        // Nothing is left to clear.
        debouncer.cancel();
        debouncer.debounce(make("b"));
        assert_eq!(timers.cancelled.get(), 0);

        // A superseded callback is cleared.
        debouncer.debounce(make("c"));
        assert_eq!(timers.cancelled.get(), 1);
        debouncer.cancel();
        assert_eq!(timers.cancelled.get(), 2);
        assert!(!debouncer.is_pending());
    }

    /// Counts the cancellations reaching the timer queue.
    #[derive(Clone, Default)]
    struct CountingScheduler {
        queue: MockTimerQueue,
        cancelled: Rc<Cell<usize>>,
    }

    impl Scheduler for CountingScheduler {
        type Token = <MockTimerQueue as Scheduler>::Token;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token {
            self.queue.schedule(delay_ms, callback)
        }

        fn cancel(&self, token: Self::Token) {
            self.cancelled.set(self.cancelled.get() + 1);
            self.queue.cancel(token);
        }
    }
}
