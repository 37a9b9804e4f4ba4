//! Deterministic stand-ins for the host clock, timer and lifecycle.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use timenow_application::{AppPhase, Clock, LifecycleEvents, Scheduler, TaskHandle};

/// Builds a local instant at a fixed UTC+1 offset.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .expect("valid offset")
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid date")
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct FakeClock {
    now: Rc<Cell<DateTime<FixedOffset>>>,
}

impl FakeClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let delta = TimeDelta::from_std(by).expect("duration in range");
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}

struct Entry {
    interval: Duration,
    due: Duration,
    task: Box<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler with a pending-callback queue driven by [`advance`](Self::advance).
pub struct ManualScheduler {
    clock: FakeClock,
    elapsed: Cell<Duration>,
    entries: RefCell<Vec<Entry>>,
    cancellations: Rc<Cell<u32>>,
}

impl ManualScheduler {
    pub fn new(clock: FakeClock) -> Self {
        Self {
            clock,
            elapsed: Cell::new(Duration::ZERO),
            entries: RefCell::new(Vec::new()),
            cancellations: Rc::new(Cell::new(0)),
        }
    }

    /// Moves time forward, firing every due task. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.elapsed.get() + by;
        let mut fired = 0;
        loop {
            let next = self
                .entries
                .borrow()
                .iter()
                .filter(|e| !e.cancelled.get())
                .map(|e| e.due)
                .min();
            let Some(due) = next.filter(|due| *due <= target) else {
                break;
            };
            self.clock.advance(due - self.elapsed.get());
            self.elapsed.set(due);

            let mut entries = self.entries.borrow_mut();
            for entry in entries
                .iter_mut()
                .filter(|e| e.due == due && !e.cancelled.get())
            {
                (entry.task)();
                entry.due += entry.interval;
                fired += 1;
            }
        }
        self.clock.advance(target - self.elapsed.get());
        self.elapsed.set(target);
        fired
    }

    /// Runs every task once, cancelled or not, like a host that fires late.
    pub fn fire_ignoring_cancellation(&self) {
        for entry in self.entries.borrow_mut().iter_mut() {
            (entry.task)();
        }
    }

    pub fn scheduled(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn active(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    pub fn cancellations(&self) -> u32 {
        self.cancellations.get()
    }

    pub fn interval_of(&self, index: usize) -> Option<Duration> {
        self.entries.borrow().get(index).map(|e| e.interval)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, interval: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.borrow_mut().push(Entry {
            interval,
            due: self.elapsed.get() + interval,
            task,
            cancelled: Rc::clone(&cancelled),
        });
        let count = Rc::clone(&self.cancellations);
        TaskHandle::new(move || {
            cancelled.set(true);
            count.set(count.get() + 1);
        })
    }
}

/// Lifecycle source whose transitions are emitted by the test.
#[derive(Default)]
pub struct ManualLifecycle {
    listeners: RefCell<Vec<(Rc<Cell<bool>>, Box<dyn FnMut(AppPhase)>)>>,
}

impl ManualLifecycle {
    pub fn emit(&self, phase: AppPhase) {
        for (active, listener) in self.listeners.borrow_mut().iter_mut() {
            if active.get() {
                listener(phase);
            }
        }
    }

    pub fn registered(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(active, _)| active.get())
            .count()
    }
}

impl LifecycleEvents for ManualLifecycle {
    fn on_phase_change(&self, listener: Box<dyn FnMut(AppPhase)>) -> TaskHandle {
        let active = Rc::new(Cell::new(true));
        self.listeners
            .borrow_mut()
            .push((Rc::clone(&active), listener));
        TaskHandle::new(move || active.set(false))
    }
}
