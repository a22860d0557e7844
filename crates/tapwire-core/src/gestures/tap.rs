//! Tap gesture recogniser.
//!
//! Every `touchstart` opens an attempt. The attempt freezes its target's
//! boundary and races the termination signals of that target against each
//! other: a single-finger move (inside confirms, outside cancels), the
//! release, the platform cancel and, when configured, the timeout. Whichever
//! fires first decides between `ped` and `cancel`; the attempt then drops all
//! of its subscriptions.

use super::boundary::BoundaryResolver;
use super::predicates::{is_single_finger, is_tap_intention};
use crate::config::{ConfirmPolicy, TapConfig, TapTimeout, TimeoutOutcome};
use crate::error::TapError;
use crate::input::{TouchNotification, TouchSource, TouchTarget};
use crate::platform::{Clock, SystemClock};
use crate::race::Race;
use crate::signal::{Signal, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tapwire_geometry::Boundary;
use web_time::Instant;

/// Why an attempt ended on the `cancel` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// A single-finger move left the frozen boundary.
    LeftBoundary,
    /// The platform sent `touchcancel` for the target.
    PlatformCancel,
    /// The configured timeout elapsed first.
    TimedOut,
}

/// A cancelled attempt together with the reason it was cancelled.
#[derive(Clone, Debug, PartialEq)]
pub struct TapCancellation<T> {
    pub notification: TouchNotification<T>,
    pub reason: CancelReason,
}

enum Outcome<T> {
    Confirmed(TouchNotification<T>),
    Cancelled(TouchNotification<T>, CancelReason),
    Abandoned,
}

struct Attempts<T> {
    next_id: Cell<u64>,
    live: RefCell<Vec<(u64, Race<Outcome<T>>)>>,
}

struct TapOutputs<T> {
    ping: Signal<TouchNotification<T>>,
    ped: Signal<TouchNotification<T>>,
    cancel: Signal<TouchNotification<T>>,
    cancellations: Signal<TapCancellation<T>>,
    errors: Signal<TapError>,
    attempts: Rc<Attempts<T>>,
}

impl<T> Clone for TapOutputs<T> {
    fn clone(&self) -> Self {
        Self {
            ping: self.ping.clone(),
            ped: self.ped.clone(),
            cancel: self.cancel.clone(),
            cancellations: self.cancellations.clone(),
            errors: self.errors.clone(),
            attempts: Rc::clone(&self.attempts),
        }
    }
}

impl<T: TouchTarget> TapOutputs<T> {
    fn new() -> Self {
        Self {
            ping: Signal::new(),
            ped: Signal::new(),
            cancel: Signal::new(),
            cancellations: Signal::new(),
            errors: Signal::new(),
            attempts: Rc::new(Attempts {
                next_id: Cell::new(0),
                live: RefCell::new(Vec::new()),
            }),
        }
    }

    fn finish(&self, id: u64, target: &T, outcome: Outcome<T>) {
        let removed = {
            let mut live = self.attempts.live.borrow_mut();
            live.iter()
                .position(|(attempt, _)| *attempt == id)
                .map(|index| live.remove(index))
        };
        drop(removed);

        match outcome {
            Outcome::Confirmed(notification) => {
                log::debug!("tap confirmed on {target:?}");
                self.ped.emit(&notification);
            }
            Outcome::Cancelled(notification, reason) => {
                log::debug!("tap on {target:?} cancelled: {reason:?}");
                self.cancel.emit(&notification);
                self.cancellations.emit(&TapCancellation {
                    notification,
                    reason,
                });
            }
            Outcome::Abandoned => {
                log::debug!("tap on {target:?} dropped after timeout");
            }
        }
    }
}

/// Derives `ping`, `ped` and `cancel` streams from a [`TouchSource`].
///
/// Dropping the detector stops it from opening new attempts and tears down
/// the ones still in flight without emitting for them.
pub struct TapGestureDetector<T: TouchTarget> {
    outputs: TapOutputs<T>,
    _starts: Subscription,
}

impl<T: TouchTarget> TapGestureDetector<T> {
    pub fn new(
        source: &TouchSource<T>,
        resolver: impl BoundaryResolver<T> + 'static,
        config: TapConfig,
    ) -> Self {
        Self::with_clock(source, resolver, config, SystemClock)
    }

    /// Like [`TapGestureDetector::new`], timing attempts with `clock`.
    pub fn with_clock(
        source: &TouchSource<T>,
        resolver: impl BoundaryResolver<T> + 'static,
        config: TapConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        let outputs = TapOutputs::new();

        let starts = {
            let source = source.clone();
            let outputs = outputs.clone();
            source.starts.clone().subscribe(move |start| {
                outputs.ping.emit(start);
                match resolver.resolve(&start.target) {
                    Ok(boundary) => {
                        let started_at = config.timeout.map(|_| clock.now());
                        begin_attempt(&source, &outputs, start, boundary, config, started_at);
                    }
                    Err(err) => {
                        log::error!("cannot resolve tap boundary for {:?}: {err}", start.target);
                        outputs.errors.emit(&err);
                    }
                }
            })
        };

        Self {
            outputs,
            _starts: starts,
        }
    }

    /// Emits every start notification as it happens.
    ///
    /// Handlers run inside the source's `starts` emission, so a start
    /// dispatched from one of them is skipped with a warning. Push such
    /// follow-up touches onto a [`TouchDispatcher`](crate::input::TouchDispatcher)
    /// and flush it once the current dispatch returns.
    pub fn ping(&self) -> &Signal<TouchNotification<T>> {
        &self.outputs.ping
    }

    /// Emits once per confirmed attempt.
    ///
    /// Carries the move that confirmed it, or the start notification when the
    /// finger never moved.
    pub fn ped(&self) -> &Signal<TouchNotification<T>> {
        &self.outputs.ped
    }

    /// Emits once per cancelled attempt.
    ///
    /// Carries the offending move, the platform cancel, or the start
    /// notification for timeouts.
    pub fn cancel(&self) -> &Signal<TouchNotification<T>> {
        &self.outputs.cancel
    }

    /// Same attempts as [`TapGestureDetector::cancel`], emitted right after it
    /// with the [`CancelReason`] attached.
    pub fn cancellations(&self) -> &Signal<TapCancellation<T>> {
        &self.outputs.cancellations
    }

    pub fn ping_targets(&self) -> Signal<T> {
        self.outputs.ping.map(|notification| notification.target.clone())
    }

    pub fn ped_targets(&self) -> Signal<T> {
        self.outputs.ped.map(|notification| notification.target.clone())
    }

    pub fn cancel_targets(&self) -> Signal<T> {
        self.outputs.cancel.map(|notification| notification.target.clone())
    }

    /// Boundary resolution failures. The affected start still pings but opens
    /// no attempt.
    pub fn errors(&self) -> &Signal<TapError> {
        &self.outputs.errors
    }

    /// Number of attempts that have started and not yet terminated.
    pub fn active_attempts(&self) -> usize {
        self.outputs.attempts.live.borrow().len()
    }
}

impl<T: TouchTarget> Drop for TapGestureDetector<T> {
    fn drop(&mut self) {
        let live = std::mem::take(&mut *self.outputs.attempts.live.borrow_mut());
        for (_, race) in live {
            race.abort();
        }
    }
}

fn begin_attempt<T: TouchTarget>(
    source: &TouchSource<T>,
    outputs: &TapOutputs<T>,
    start: &TouchNotification<T>,
    boundary: Boundary,
    config: TapConfig,
    started_at: Option<Instant>,
) {
    let id = outputs.attempts.next_id.get();
    outputs.attempts.next_id.set(id + 1);
    log::debug!("tap attempt {id} on {:?} within {boundary:?}", start.target);

    let race = {
        let outputs = outputs.clone();
        let target = start.target.clone();
        Race::new(move |outcome: Outcome<T>| outputs.finish(id, &target, outcome))
    };
    outputs
        .attempts
        .live
        .borrow_mut()
        .push((id, race.clone()));

    let last_inside: Rc<RefCell<Option<TouchNotification<T>>>> = Rc::new(RefCell::new(None));

    {
        let target = start.target.clone();
        let last_inside = Rc::clone(&last_inside);
        let confirm = config.confirm;
        race.arm(&source.moves, move |moved| {
            if moved.target != target {
                return None;
            }
            if !is_single_finger(moved) {
                log::trace!(
                    "ignoring {}-contact move on {target:?}",
                    moved.contact_count()
                );
                return None;
            }
            let point = moved.lead_point()?;
            if !is_tap_intention(point, &boundary) {
                return Some(Outcome::Cancelled(moved.clone(), CancelReason::LeftBoundary));
            }
            match confirm {
                ConfirmPolicy::FirstMove => Some(Outcome::Confirmed(moved.clone())),
                ConfirmPolicy::OnRelease => {
                    *last_inside.borrow_mut() = Some(moved.clone());
                    None
                }
            }
        });
    }

    {
        let target = start.target.clone();
        let start = start.clone();
        race.arm(&source.ends, move |ended| {
            if ended.target != target {
                return None;
            }
            let confirmed = last_inside.borrow_mut().take();
            Some(Outcome::Confirmed(confirmed.unwrap_or_else(|| start.clone())))
        });
    }

    {
        let target = start.target.clone();
        race.arm(&source.cancels, move |cancelled| {
            (cancelled.target == target)
                .then(|| Outcome::Cancelled(cancelled.clone(), CancelReason::PlatformCancel))
        });
    }

    if let (Some(TapTimeout { after, outcome }), Some(started_at)) = (config.timeout, started_at) {
        let start = start.clone();
        race.arm(&source.ticks, move |now| {
            if now.saturating_duration_since(started_at) < after {
                return None;
            }
            Some(match outcome {
                TimeoutOutcome::Cancel => Outcome::Cancelled(start.clone(), CancelReason::TimedOut),
                TimeoutOutcome::Drop => Outcome::Abandoned,
            })
        });
    }
}

#[cfg(test)]
#[path = "../tests/tap_tests.rs"]
mod tests;
