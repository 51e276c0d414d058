//! Timer seam between the particle emitter and whatever event loop hosts it.
//!
//! Recurring timers are cancelled by dropping their handle; one-shot timers are
//! fire-and-forget. [`BrowserScheduler`] maps onto `setInterval`/`setTimeout`
//! via gloo, [`VirtualScheduler`] runs on a manually advanced clock.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use gloo::timers::callback::{Interval, Timeout};

pub trait Scheduler {
    /// Dropping the handle cancels all future ticks.
    type Repeating;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Repeating;

    /// Run `task` once after `delay_ms`. Cannot be cancelled.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Repeating = Interval;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Forgotten timeouts still fire; only the JS handle is leaked.
        let _ = Timeout::new(delay_ms, task).forget();
    }
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Every { period: u64, tick: Box<dyn FnMut()> },
}

struct Pending {
    due: u64,
    id: u64,
    job: Job,
}

#[derive(Default)]
struct Queue {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
    live_repeating: HashSet<u64>,
}

impl Queue {
    fn push(&mut self, due: u64, job: Job) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending { due, id, job });
        id
    }

    // Earliest due first, insertion order breaks ties.
    fn pop_due(&mut self, until: u64) -> Option<Pending> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(idx))
    }
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance`].
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Handle returned by [`VirtualScheduler::repeat`].
pub struct VirtualRepeating {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for VirtualRepeating {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            let mut q = queue.borrow_mut();
            q.live_repeating.remove(&self.id);
            q.pending.retain(|p| p.id != self.id);
        }
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    pub fn active_repeating(&self) -> usize {
        self.queue.borrow().live_repeating.len()
    }

    pub fn pending_once(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| matches!(p.job, Job::Once(_)))
            .count()
    }

    /// Move the clock forward by `ms`, running every timer that comes due in
    /// order. Callbacks may schedule or cancel timers.
    pub fn advance(&self, ms: u64) {
        let until = self.now() + ms;
        loop {
            let next = self.queue.borrow_mut().pop_due(until);
            let Some(Pending { due, id, job }) = next else { break };
            self.queue.borrow_mut().now = due;
            match job {
                Job::Once(task) => task(),
                Job::Every { period, mut tick } => {
                    tick();
                    let mut q = self.queue.borrow_mut();
                    if q.live_repeating.contains(&id) {
                        q.pending.push(Pending { due: due + period, id, job: Job::Every { period, tick } });
                    }
                }
            }
        }
        self.queue.borrow_mut().now = until;
    }
}

impl Scheduler for VirtualScheduler {
    type Repeating = VirtualRepeating;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> VirtualRepeating {
        let period = u64::from(period_ms.max(1));
        let mut q = self.queue.borrow_mut();
        let due = q.now + period;
        let id = q.push(due, Job::Every { period, tick });
        q.live_repeating.insert(id);
        VirtualRepeating { id, queue: Rc::downgrade(&self.queue) }
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut q = self.queue.borrow_mut();
        let due = q.now + u64::from(delay_ms);
        q.push(due, Job::Once(task));
    }
}
