//! Touch source plumbing.
//!
//! Platform integrations either push notifications straight into a
//! [`TouchSource`] or, when they receive events in batches, enqueue them on a
//! [`TouchDispatcher`] and drain it into the source later.

use super::types::{TouchNotification, TouchPhase, TouchTarget};
use crate::signal::Signal;
use web_time::Instant;

/// The raw notification streams a gesture detector listens to.
///
/// `ticks` is the optional timer feed: nothing in the core emits on it, a
/// host that enables tap timeouts pushes the current time there periodically.
pub struct TouchSource<T> {
    pub starts: Signal<TouchNotification<T>>,
    pub moves: Signal<TouchNotification<T>>,
    pub ends: Signal<TouchNotification<T>>,
    pub cancels: Signal<TouchNotification<T>>,
    pub ticks: Signal<Instant>,
}

impl<T> Clone for TouchSource<T> {
    fn clone(&self) -> Self {
        Self {
            starts: self.starts.clone(),
            moves: self.moves.clone(),
            ends: self.ends.clone(),
            cancels: self.cancels.clone(),
            ticks: self.ticks.clone(),
        }
    }
}

impl<T: TouchTarget> Default for TouchSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TouchTarget> TouchSource<T> {
    pub fn new() -> Self {
        Self {
            starts: Signal::new(),
            moves: Signal::new(),
            ends: Signal::new(),
            cancels: Signal::new(),
            ticks: Signal::new(),
        }
    }

    pub fn signal(&self, phase: TouchPhase) -> &Signal<TouchNotification<T>> {
        match phase {
            TouchPhase::Start => &self.starts,
            TouchPhase::Move => &self.moves,
            TouchPhase::End => &self.ends,
            TouchPhase::Cancel => &self.cancels,
        }
    }

    /// Routes `notification` to the stream matching its phase.
    pub fn dispatch(&self, notification: &TouchNotification<T>) {
        log::trace!(
            "{} on {:?} with {} contact(s)",
            notification.phase.event_name(),
            notification.target,
            notification.contact_count()
        );
        self.signal(notification.phase).emit(notification);
    }

    pub fn tick(&self, now: Instant) {
        self.ticks.emit(&now);
    }
}

pub struct TouchDispatcher<T> {
    queue: Vec<TouchNotification<T>>,
}

impl<T> Default for TouchDispatcher<T> {
    fn default() -> Self {
        Self { queue: Vec::new() }
    }
}

impl<T: TouchTarget> TouchDispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: TouchNotification<T>) {
        self.queue.push(notification);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(TouchNotification<T>),
    {
        for notification in self.queue.drain(..) {
            handler(notification);
        }
    }

    /// Delivers every queued notification to `source`, oldest first.
    pub fn flush_into(&mut self, source: &TouchSource<T>) {
        self.drain(|notification| source.dispatch(&notification));
    }
}
