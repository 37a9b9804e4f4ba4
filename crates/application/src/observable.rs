//! Observable value holder
//!
//! A single-threaded state cell with a subscribe/notify contract: every
//! listener is invoked synchronously, in subscription order, right after
//! each mutation and on the thread that performed it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::task::TaskHandle;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

/// Shared, observable value.
///
/// Clones share the same cell.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

/// Non-owning reference to an [`Observable`].
pub struct WeakObservable<T> {
    inner: Weak<Inner<T>>,
}

/// Keeps a listener registered; dropping it unsubscribes.
#[derive(Debug)]
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription(TaskHandle);

impl Subscription {
    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.0.cancel();
    }

    /// Returns true while the listener is registered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.0.is_active()
    }

    /// Converts into the underlying release handle.
    #[must_use]
    pub fn into_handle(self) -> TaskHandle {
        self.0
    }
}

impl<T: 'static> Observable<T> {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }

    /// Runs `f` against the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replaces the value and notifies listeners.
    ///
    /// Returns false, leaving the value untouched, when called from inside a
    /// listener of this same cell.
    pub fn set(&self, value: T) -> bool {
        self.update(|slot| *slot = value)
    }

    /// Mutates the value in place and notifies listeners.
    ///
    /// Same re-entrancy rule as [`set`](Self::set).
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        match self.inner.value.try_borrow_mut() {
            Ok(mut slot) => f(&mut slot),
            Err(_) => {
                tracing::warn!("ignoring re-entrant update of an observable from its own listener");
                return false;
            }
        }
        self.notify();
        true
    }

    /// Registers `listener`, called after every later mutation.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak = Rc::downgrade(&self.inner);
        Subscription(TaskHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        }))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Returns a reference that does not keep the cell alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakObservable<T> {
        WeakObservable {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let value = self.inner.value.borrow();
        for listener in listeners {
            listener(&value);
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> WeakObservable<T> {
    /// Returns the cell if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Observable<T>> {
        self.inner.upgrade().map(|inner| Observable { inner })
    }
}

impl<T> Clone for WeakObservable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}
