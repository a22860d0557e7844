//! First-to-finish combinator over signals.
//!
//! A [`Race`] listens on any number of arms. Each arm pairs a signal with a
//! selector; the first selector that returns `Some(outcome)` settles the race,
//! every arm subscription is dropped and the settle callback runs once.

use crate::signal::{Signal, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

struct RaceState<O> {
    arms: Vec<Subscription>,
    on_settle: Option<Box<dyn FnOnce(O)>>,
}

pub struct Race<O> {
    state: Rc<RefCell<RaceState<O>>>,
}

impl<O> Clone for Race<O> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<O: 'static> Race<O> {
    pub fn new(on_settle: impl FnOnce(O) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(RaceState {
                arms: Vec::new(),
                on_settle: Some(Box::new(on_settle)),
            })),
        }
    }

    /// Adds an arm. Ignored once the race has settled.
    ///
    /// The arm subscription holds the race alive, so a race with at least one
    /// arm keeps running after every `Race` handle is dropped.
    pub fn arm<T: 'static>(
        &self,
        signal: &Signal<T>,
        mut select: impl FnMut(&T) -> Option<O> + 'static,
    ) {
        if self.is_settled() {
            return;
        }
        let race = self.clone();
        let subscription = signal.subscribe(move |value| {
            if let Some(outcome) = select(value) {
                race.settle(outcome);
            }
        });
        self.state.borrow_mut().arms.push(subscription);
    }

    /// Settles with `outcome` unless another arm got there first.
    pub fn settle(&self, outcome: O) {
        let (arms, on_settle) = {
            let mut state = self.state.borrow_mut();
            (std::mem::take(&mut state.arms), state.on_settle.take())
        };
        // Unsubscribe before reporting so the callback can never observe a
        // live arm of a finished race.
        drop(arms);
        if let Some(on_settle) = on_settle {
            on_settle(outcome);
        }
    }

    /// Tears the race down without running the settle callback.
    pub fn abort(&self) {
        let (arms, on_settle) = {
            let mut state = self.state.borrow_mut();
            (std::mem::take(&mut state.arms), state.on_settle.take())
        };
        drop(arms);
        drop(on_settle);
    }

    /// True once the race has settled or been aborted.
    pub fn is_settled(&self) -> bool {
        self.state.borrow().on_settle.is_none()
    }

    pub fn arm_count(&self) -> usize {
        self.state.borrow().arms.len()
    }
}
