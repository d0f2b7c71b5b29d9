//! Deferred side effects.
//!
//! `cd <section>` must print its confirmation before the page moves, so the
//! scroll is queued here with a delay and fired by whoever owns the clock
//! (the bridge's frame tick, or a test calling `flush`). Tasks fire at most
//! once and can be cancelled through their handle.

use crate::section::Section;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollTo(Section),
}

/// Identifies a scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTask {
    handle: TaskHandle,
    due: Instant,
    action: Action,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay` after `now`. A new scroll replaces any
    /// scroll that has not fired yet.
    pub fn schedule(&mut self, action: Action, delay: Duration, now: Instant) -> TaskHandle {
        if matches!(action, Action::ScrollTo(_)) {
            let before = self.tasks.len();
            self.tasks
                .retain(|t| !matches!(t.action, Action::ScrollTo(_)));
            if self.tasks.len() != before {
                tracing::debug!("superseded pending scroll");
            }
        }

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            handle,
            due: now + delay,
            action,
        });
        handle
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    /// Remove and return every action due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Action> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| t.due);
        due.into_iter().map(|t| t.action).collect()
    }

    /// Remove and return every pending action regardless of its deadline.
    pub fn flush(&mut self) -> Vec<Action> {
        let mut all: Vec<_> = self.tasks.drain(..).collect();
        all.sort_by_key(|t| t.due);
        all.into_iter().map(|t| t.action).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }
}
