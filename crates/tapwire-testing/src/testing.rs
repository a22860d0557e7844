use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tapwire_core::{
    CancelReason, Clock, ElementGeometry, InsetResolver, Instant, Subscription, TapCancellation,
    TapConfig, TapError, TapGestureDetector, TouchNotification, TouchPoint, TouchSource,
};
use tapwire_geometry::Boundary;

/// Targets in the harness are plain names.
pub type TestTarget = &'static str;

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) -> Instant {
        let now = self.now.get() + by;
        self.now.set(now);
        now
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Default)]
struct TargetTable {
    bounds: FxHashMap<TestTarget, Boundary>,
    insets: FxHashMap<TestTarget, f32>,
}

/// Element geometry served from the harness's target table.
#[derive(Clone, Default)]
struct TableGeometry {
    table: Rc<RefCell<TargetTable>>,
}

impl ElementGeometry<TestTarget> for TableGeometry {
    fn native_bounds(&self, target: &TestTarget) -> Result<Boundary, TapError> {
        self.table
            .borrow()
            .bounds
            .get(target)
            .copied()
            .ok_or_else(|| TapError::UnknownTarget {
                target: target.to_string(),
            })
    }

    fn inset(&self, target: &TestTarget) -> Result<Option<f32>, TapError> {
        Ok(self.table.borrow().insets.get(target).copied())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapSignal {
    Ping,
    Ped,
    Cancel,
}

/// One emission observed on the detector's output streams.
#[derive(Clone, Debug, PartialEq)]
pub struct TapRecord {
    pub signal: TapSignal,
    pub notification: TouchNotification<TestTarget>,
}

impl TapRecord {
    pub fn target(&self) -> TestTarget {
        self.notification.target
    }
}

/// Headless harness for exercising tap detection in tests.
///
/// Owns a touch source, a detector wired to a table of element bounds, and a
/// manual clock. Every `ping`, `ped` and `cancel` emission is recorded in
/// order so tests can assert on the exact sequence.
pub struct TapTestRule {
    source: TouchSource<TestTarget>,
    detector: TapGestureDetector<TestTarget>,
    geometry: TableGeometry,
    clock: ManualClock,
    records: Rc<RefCell<Vec<TapRecord>>>,
    reasons: Rc<RefCell<Vec<(TestTarget, CancelReason)>>>,
    errors: Rc<RefCell<Vec<TapError>>>,
    _subscriptions: Vec<Subscription>,
}

impl TapTestRule {
    pub fn new() -> Self {
        Self::with_config(TapConfig::default())
    }

    pub fn with_config(config: TapConfig) -> Self {
        let source = TouchSource::new();
        let geometry = TableGeometry::default();
        let clock = ManualClock::new();
        let detector = TapGestureDetector::with_clock(
            &source,
            InsetResolver::new(geometry.clone()),
            config,
            clock.clone(),
        );

        let records = Rc::new(RefCell::new(Vec::new()));
        let reasons = Rc::new(RefCell::new(Vec::new()));
        let errors = Rc::new(RefCell::new(Vec::new()));
        let mut subscriptions: Vec<Subscription> = [
            (TapSignal::Ping, detector.ping()),
            (TapSignal::Ped, detector.ped()),
            (TapSignal::Cancel, detector.cancel()),
        ]
        .into_iter()
        .map(|(signal, stream)| {
            let records = Rc::clone(&records);
            stream.subscribe(move |notification: &TouchNotification<TestTarget>| {
                records.borrow_mut().push(TapRecord {
                    signal,
                    notification: notification.clone(),
                });
            })
        })
        .collect();
        subscriptions.push({
            let reasons = Rc::clone(&reasons);
            detector
                .cancellations()
                .subscribe(move |cancelled: &TapCancellation<TestTarget>| {
                    reasons
                        .borrow_mut()
                        .push((cancelled.notification.target, cancelled.reason))
                })
        });
        subscriptions.push({
            let errors = Rc::clone(&errors);
            detector
                .errors()
                .subscribe(move |err: &TapError| errors.borrow_mut().push(err.clone()))
        });

        Self {
            source,
            detector,
            geometry,
            clock,
            records,
            reasons,
            errors,
            _subscriptions: subscriptions,
        }
    }

    /// Registers `target` with its native bounds.
    pub fn with_target(self, target: TestTarget, bounds: Boundary) -> Self {
        self.set_bounds(target, bounds);
        self
    }

    pub fn set_bounds(&self, target: TestTarget, bounds: Boundary) {
        self.geometry.table.borrow_mut().bounds.insert(target, bounds);
    }

    pub fn set_inset(&self, target: TestTarget, inset: f32) {
        self.geometry.table.borrow_mut().insets.insert(target, inset);
    }

    pub fn dispatch(&self, notification: TouchNotification<TestTarget>) {
        self.source.dispatch(&notification);
    }

    pub fn touch_start(&self, target: TestTarget, x: f32, y: f32) {
        self.dispatch(TouchNotification::start(target, TouchPoint::new(x, y)));
    }

    /// Moves with one contact per `(x, y)` pair.
    pub fn touch_move(&self, target: TestTarget, contacts: &[(f32, f32)]) {
        self.dispatch(TouchNotification::moved(
            target,
            contacts.iter().map(|&(x, y)| TouchPoint::new(x, y)),
        ));
    }

    pub fn touch_end(&self, target: TestTarget) {
        self.dispatch(TouchNotification::end(target));
    }

    pub fn touch_cancel(&self, target: TestTarget) {
        self.dispatch(TouchNotification::cancel(target));
    }

    /// Advances the manual clock and feeds the new time to the tick stream.
    pub fn advance_time(&self, by: Duration) {
        let now = self.clock.advance(by);
        log::trace!("advancing test clock by {by:?}");
        self.source.tick(now);
    }

    pub fn records(&self) -> Vec<TapRecord> {
        self.records.borrow().clone()
    }

    pub fn clear_records(&self) {
        self.records.borrow_mut().clear();
        self.reasons.borrow_mut().clear();
    }

    pub fn pings(&self) -> Vec<TestTarget> {
        self.targets_of(TapSignal::Ping)
    }

    pub fn peds(&self) -> Vec<TestTarget> {
        self.targets_of(TapSignal::Ped)
    }

    pub fn cancels(&self) -> Vec<TestTarget> {
        self.targets_of(TapSignal::Cancel)
    }

    /// Target and reason of every cancellation, in emission order.
    pub fn cancel_reasons(&self) -> Vec<(TestTarget, CancelReason)> {
        self.reasons.borrow().clone()
    }

    pub fn errors(&self) -> Vec<TapError> {
        self.errors.borrow().clone()
    }

    pub fn active_attempts(&self) -> usize {
        self.detector.active_attempts()
    }

    pub fn source(&self) -> &TouchSource<TestTarget> {
        &self.source
    }

    fn targets_of(&self, signal: TapSignal) -> Vec<TestTarget> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.signal == signal)
            .map(TapRecord::target)
            .collect()
    }
}

impl Default for TapTestRule {
    fn default() -> Self {
        Self::new()
    }
}
