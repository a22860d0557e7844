use super::*;
use crate::input::{TouchDispatcher, TouchPhase, TouchPoint};
use std::time::Duration;

type Log = Rc<RefCell<Vec<(&'static str, TouchNotification<&'static str>)>>>;

fn square(target: &&'static str) -> Result<Boundary, TapError> {
    match *target {
        "button" | "other" => Ok(Boundary::new(0.0, 100.0, 100.0, 0.0)),
        unknown => Err(TapError::UnknownTarget {
            target: unknown.to_string(),
        }),
    }
}

fn record(detector: &TapGestureDetector<&'static str>) -> (Log, Vec<Subscription>) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let subscriptions = [
        ("ping", detector.ping()),
        ("ped", detector.ped()),
        ("cancel", detector.cancel()),
    ]
    .into_iter()
    .map(|(name, signal)| {
        let log = Rc::clone(&log);
        signal.subscribe(move |notification: &TouchNotification<&'static str>| {
            log.borrow_mut().push((name, notification.clone()))
        })
    })
    .collect();
    (log, subscriptions)
}

fn names(log: &Log) -> Vec<&'static str> {
    log.borrow().iter().map(|(name, _)| *name).collect()
}

struct StepClock(Rc<Cell<Instant>>);

impl Clock for StepClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

#[test]
fn every_start_pings_synchronously() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    assert_eq!(names(&log), vec!["ping"]);

    source.dispatch(&TouchNotification::start("other", TouchPoint::new(10.0, 10.0)));
    assert_eq!(names(&log), vec!["ping", "ping"]);
    assert_eq!(detector.active_attempts(), 2);
}

#[test]
fn release_without_move_confirms_with_start_notification() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::end("button"));

    assert_eq!(names(&log), vec!["ping", "ped"]);
    let entries = log.borrow();
    let (_, ped) = &entries[1];
    assert_eq!(ped.phase, TouchPhase::Start);
    assert_eq!(ped.target, "button");
}

#[test]
fn first_inside_move_confirms_immediately() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(12.0, 11.0)]));

    assert_eq!(names(&log), vec!["ping", "ped"]);
    assert_eq!(log.borrow()[1].1.lead_point(), Some(TouchPoint::new(12.0, 11.0)));

    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(500.0, 0.0)]));
    source.dispatch(&TouchNotification::end("button"));
    assert_eq!(names(&log), vec!["ping", "ped"]);
}

#[test]
fn moves_on_other_targets_are_noise() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::moved("other", [TouchPoint::new(500.0, 500.0)]));
    source.dispatch(&TouchNotification::end("other"));
    source.dispatch(&TouchNotification::cancel("other"));
    assert_eq!(names(&log), vec!["ping"]);
    assert_eq!(detector.active_attempts(), 1);

    source.dispatch(&TouchNotification::end("button"));
    assert_eq!(names(&log), vec!["ping", "ped"]);
}

#[test]
fn terminal_attempts_release_their_subscriptions() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    assert_eq!(source.moves.subscriber_count(), 1);
    assert_eq!(source.ends.subscriber_count(), 1);
    assert_eq!(source.cancels.subscriber_count(), 1);
    assert_eq!(source.ticks.subscriber_count(), 0);

    source.dispatch(&TouchNotification::cancel("button"));

    assert_eq!(detector.active_attempts(), 0);
    assert_eq!(source.moves.subscriber_count(), 0);
    assert_eq!(source.ends.subscriber_count(), 0);
    assert_eq!(source.cancels.subscriber_count(), 0);
}

#[test]
fn unresolvable_target_pings_and_reports_error() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let (log, _subs) = record(&detector);
    let errors = Rc::new(RefCell::new(Vec::new()));
    let _errors = {
        let errors = Rc::clone(&errors);
        detector
            .errors()
            .subscribe(move |err: &TapError| errors.borrow_mut().push(err.clone()))
    };

    source.dispatch(&TouchNotification::start("ghost", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::end("ghost"));

    assert_eq!(names(&log), vec!["ping"]);
    assert_eq!(
        *errors.borrow(),
        vec![TapError::UnknownTarget {
            target: "ghost".to_string()
        }]
    );
    assert_eq!(detector.active_attempts(), 0);
}

#[test]
fn dropping_detector_tears_down_in_flight_attempts() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    assert_eq!(source.starts.subscriber_count(), 1);
    assert_eq!(source.ends.subscriber_count(), 1);

    drop(detector);

    assert_eq!(source.starts.subscriber_count(), 0);
    assert_eq!(source.ends.subscriber_count(), 0);
    source.dispatch(&TouchNotification::end("button"));
}

#[test]
fn target_streams_carry_only_targets() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let peds = detector.ped_targets();
    let cancels = detector.cancel_targets();
    let pings = detector.ping_targets();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _subs: Vec<Subscription> = [("ping", &pings), ("ped", &peds), ("cancel", &cancels)]
        .into_iter()
        .map(|(name, signal)| {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |target: &&'static str| seen.borrow_mut().push((name, *target)))
        })
        .collect();

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::end("button"));
    source.dispatch(&TouchNotification::start("other", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::cancel("other"));

    assert_eq!(
        *seen.borrow(),
        vec![
            ("ping", "button"),
            ("ped", "button"),
            ("ping", "other"),
            ("cancel", "other"),
        ]
    );
}

#[test]
fn release_policy_confirms_with_last_inside_move() {
    let source = TouchSource::new();
    let config = TapConfig::new().with_confirm_policy(ConfirmPolicy::OnRelease);
    let detector = TapGestureDetector::new(&source, square, config);
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(20.0, 20.0)]));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(30.0, 30.0)]));
    assert_eq!(names(&log), vec!["ping"]);

    source.dispatch(&TouchNotification::end("button"));

    assert_eq!(names(&log), vec!["ping", "ped"]);
    assert_eq!(log.borrow()[1].1.lead_point(), Some(TouchPoint::new(30.0, 30.0)));
}

#[test]
fn release_policy_still_cancels_on_exit() {
    let source = TouchSource::new();
    let config = TapConfig::new().with_confirm_policy(ConfirmPolicy::OnRelease);
    let detector = TapGestureDetector::new(&source, square, config);
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(20.0, 20.0)]));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(120.0, 20.0)]));
    source.dispatch(&TouchNotification::end("button"));

    assert_eq!(names(&log), vec!["ping", "cancel"]);
}

#[test]
fn timeout_cancels_with_start_notification() {
    let source = TouchSource::new();
    let epoch = Instant::now();
    let now = Rc::new(Cell::new(epoch));
    let config = TapConfig::new().with_timeout(Duration::from_secs(10));
    let detector =
        TapGestureDetector::with_clock(&source, square, config, StepClock(Rc::clone(&now)));
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    assert_eq!(source.ticks.subscriber_count(), 1);

    source.tick(epoch + Duration::from_secs(9));
    assert_eq!(names(&log), vec!["ping"]);

    source.tick(epoch + Duration::from_secs(10));
    assert_eq!(names(&log), vec!["ping", "cancel"]);
    assert_eq!(log.borrow()[1].1.phase, TouchPhase::Start);
    assert_eq!(source.ticks.subscriber_count(), 0);
}

#[test]
fn timeout_can_drop_silently() {
    let source = TouchSource::new();
    let epoch = Instant::now();
    let config = TapConfig::new()
        .with_timeout(Duration::from_millis(500))
        .with_timeout_outcome(TimeoutOutcome::Drop);
    let detector = TapGestureDetector::with_clock(
        &source,
        square,
        config,
        StepClock(Rc::new(Cell::new(epoch))),
    );
    let (log, _subs) = record(&detector);

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.tick(epoch + Duration::from_secs(1));
    source.dispatch(&TouchNotification::end("button"));

    assert_eq!(names(&log), vec!["ping"]);
    assert_eq!(detector.active_attempts(), 0);
}

#[test]
fn cancellations_carry_the_reason() {
    let source = TouchSource::new();
    let epoch = Instant::now();
    let config = TapConfig::new().with_timeout(Duration::from_secs(10));
    let detector = TapGestureDetector::with_clock(
        &source,
        square,
        config,
        StepClock(Rc::new(Cell::new(epoch))),
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = Rc::clone(&seen);
        detector
            .cancellations()
            .subscribe(move |cancelled: &TapCancellation<&'static str>| {
                seen.borrow_mut()
                    .push((cancelled.notification.phase, cancelled.reason))
            })
    };

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::moved("button", [TouchPoint::new(150.0, 10.0)]));
    source.dispatch(&TouchNotification::start("other", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::cancel("other"));
    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.tick(epoch + Duration::from_secs(10));

    assert_eq!(
        *seen.borrow(),
        vec![
            (TouchPhase::Move, CancelReason::LeftBoundary),
            (TouchPhase::Cancel, CancelReason::PlatformCancel),
            (TouchPhase::Start, CancelReason::TimedOut),
        ]
    );
}

#[test]
fn confirmations_do_not_reach_cancellations() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let count = Rc::new(Cell::new(0));
    let _sub = {
        let count = Rc::clone(&count);
        detector
            .cancellations()
            .subscribe(move |_: &TapCancellation<&'static str>| count.set(count.get() + 1))
    };

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    source.dispatch(&TouchNotification::end("button"));

    assert_eq!(count.get(), 0);
}

#[test]
fn start_from_ping_handler_needs_a_queue() {
    let source = TouchSource::new();
    let detector = TapGestureDetector::new(&source, square, TapConfig::default());
    let queue = Rc::new(RefCell::new(TouchDispatcher::new()));
    let _direct = {
        let source = source.clone();
        detector
            .ping()
            .subscribe(move |notification: &TouchNotification<&'static str>| {
                if notification.target == "button" {
                    source.dispatch(&TouchNotification::start(
                        "other",
                        TouchPoint::new(5.0, 5.0),
                    ));
                }
            })
    };
    let _queued = {
        let queue = Rc::clone(&queue);
        detector
            .ping()
            .subscribe(move |notification: &TouchNotification<&'static str>| {
                if notification.target == "button" {
                    queue.borrow_mut().push(TouchNotification::start(
                        "other",
                        TouchPoint::new(5.0, 5.0),
                    ));
                }
            })
    };

    source.dispatch(&TouchNotification::start("button", TouchPoint::new(10.0, 10.0)));
    assert_eq!(detector.active_attempts(), 1);

    queue.borrow_mut().flush_into(&source);
    assert_eq!(detector.active_attempts(), 2);
}
