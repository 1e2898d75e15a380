// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! Browser stand-ins for unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::debounce::Scheduler;
use crate::dom::{DomAdapter, Visibility};

/// Identifies a callback submitted to [`MockTimerQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TimerToken(u64);

/// Handles timers for unit tests.
///
/// In the browser, callbacks are handed to `setTimeout`. Here they are stored with their
/// deadline, and only run when a test calls [`MockTimerQueue::move_forward`].
#[derive(Clone, Default)]
pub(crate) struct MockTimerQueue {
    inner: Rc<RefCell<TimerQueueInner>>,
}

type Timer = (Duration, TimerToken, Box<dyn FnOnce()>);

#[derive(Default)]
struct TimerQueueInner {
    current_time: Duration,
    next_token: u64,
    queue: Vec<Timer>,
}

impl MockTimerQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks that haven't run or been cancelled.
    pub(crate) fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Advances virtual time and runs every callback that became due, in deadline order.
    ///
    /// Returns how many callbacks ran.
    pub(crate) fn move_forward(&self, duration: Duration) -> usize {
        let due = {
            let mut inner = self.inner.borrow_mut();
            inner.current_time += duration;
            let now = inner.current_time;
            let idx = inner.queue.partition_point(|(deadline, _, _)| *deadline <= now);
            inner.queue.drain(0..idx).collect::<Vec<_>>()
        };
        let count = due.len();
        // Callbacks may schedule new timers, so they run without the queue borrowed.
        for (_, _, callback) in due {
            callback();
        }
        count
    }
}

impl Scheduler for MockTimerQueue {
    type Token = TimerToken;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.current_time + Duration::from_millis(delay_ms.into());
        let token = TimerToken(inner.next_token);
        inner.next_token += 1;
        let idx = inner.queue.partition_point(|(d, _, _)| *d <= deadline);
        inner.queue.insert(idx, (deadline, token, callback));
        token
    }

    fn cancel(&self, token: Self::Token) {
        self.inner.borrow_mut().queue.retain(|(_, t, _)| *t != token);
    }
}

struct FakeNode {
    class: Option<String>,
    visibility: Visibility,
}

/// An in-memory document; nodes are indices in insertion order.
#[derive(Default)]
pub(crate) struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
}

impl FakeDom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a visible node with the given class attribute.
    pub(crate) fn add(&self, class: Option<&str>) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            class: class.map(str::to_owned),
            visibility: Visibility::Shown,
        });
        nodes.len() - 1
    }

    pub(crate) fn visibility(&self, node: usize) -> Visibility {
        self.nodes.borrow()[node].visibility
    }

    pub(crate) fn snapshot(&self) -> Vec<Visibility> {
        self.nodes.borrow().iter().map(|n| n.visibility).collect()
    }
}

impl DomAdapter for FakeDom {
    type Node = usize;

    fn elements_with_class(&self, class: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| {
                node.class
                    .as_deref()
                    .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        match name {
            "class" => self.nodes.borrow()[*node].class.clone(),
            _ => None,
        }
    }

    fn set_visibility(&self, node: &usize, visibility: Visibility) {
        self.nodes.borrow_mut()[*node].visibility = visibility;
    }
}
