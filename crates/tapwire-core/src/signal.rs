//! Push-based signal streams.
//!
//! A [`Signal`] is a single-threaded broadcast point: every call to
//! [`Signal::emit`] synchronously runs the handlers subscribed at that moment,
//! in subscription order. Subscribing hands back a [`Subscription`] guard that
//! detaches the handler when dropped, the same way frame callback
//! registrations cancel themselves on drop.

use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct SignalInner<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
    upstream: Option<Upstream>,
}

/// Keeps a derived signal attached to, and its source alive for, the signal
/// it was derived from.
struct Upstream {
    _subscription: Subscription,
    _source: Rc<dyn Any>,
}

pub struct Signal<T> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                next_id: 0,
                handlers: Vec::new(),
                upstream: None,
            })),
        }
    }

    /// Registers `handler` for every future emission.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<SignalInner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let removed = {
                    let mut inner = inner.borrow_mut();
                    inner
                        .handlers
                        .iter()
                        .position(|(handler_id, _)| *handler_id == id)
                        .map(|index| inner.handlers.remove(index))
                };
                // Handler captures may own subscriptions to this very signal.
                drop(removed);
            }
        })
    }

    /// Delivers `value` to the current subscribers.
    ///
    /// Handlers unsubscribed by an earlier handler during the same emission
    /// are skipped. A handler that re-enters the signal currently calling it
    /// is skipped as well.
    pub fn emit(&self, value: &T) {
        let handlers: SmallVec<[(u64, Handler<T>); 4]> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        for (id, handler) in handlers {
            if !self.is_subscribed(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(value),
                Err(_) => log::warn!("skipping re-entrant emission to subscription {id}"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Derived signal carrying `f(value)` for every upstream emission.
    ///
    /// The derived signal stays attached to `self` until its last handle is
    /// dropped.
    pub fn map<U: 'static>(&self, mut f: impl FnMut(&T) -> U + 'static) -> Signal<U> {
        let derived = Signal::<U>::new();
        let weak = Rc::downgrade(&derived.inner);
        let upstream = self.subscribe(move |value| {
            if let Some(inner) = weak.upgrade() {
                Signal { inner }.emit(&f(value));
            }
        });
        derived.attach(self, upstream);
        derived
    }

    /// Derived signal carrying only the values `predicate` accepts.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool + 'static) -> Signal<T> {
        let derived = Signal::<T>::new();
        let weak = Rc::downgrade(&derived.inner);
        let upstream = self.subscribe(move |value| {
            if !predicate(value) {
                return;
            }
            if let Some(inner) = weak.upgrade() {
                Signal { inner }.emit(value);
            }
        });
        derived.attach(self, upstream);
        derived
    }

    fn attach<S: 'static>(&self, source: &Signal<S>, subscription: Subscription) {
        let source: Rc<dyn Any> = source.inner.clone();
        self.inner.borrow_mut().upstream = Some(Upstream {
            _subscription: subscription,
            _source: source,
        });
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .handlers
            .iter()
            .any(|(handler_id, _)| *handler_id == id)
    }
}

/// Guard for a live handler registration. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
