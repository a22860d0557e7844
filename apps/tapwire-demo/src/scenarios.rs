//! Scripted touch sequences over a small fixed layout.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tapwire_core::gesture_constants::SUGGESTED_TAP_TIMEOUT;
use tapwire_core::{
    Boundary, Clock, ConfirmPolicy, ElementGeometry, InsetResolver, Instant, Signal, Subscription,
    TapConfig, TapError, TapGestureDetector, TouchDispatcher, TouchNotification, TouchPoint,
    TouchSource,
};

/// Elements of the demo layout: name, native bounds, optional inset.
const LAYOUT: &[(&str, Boundary, Option<f32>)] = &[
    ("save", Boundary::new(0.0, 100.0, 40.0, 0.0), None),
    ("discard", Boundary::new(0.0, 220.0, 40.0, 120.0), None),
    ("slop", Boundary::new(60.0, 100.0, 100.0, 0.0), Some(12.0)),
];

#[derive(Clone, Copy, Debug, Default)]
struct LayoutGeometry;

impl ElementGeometry<&'static str> for LayoutGeometry {
    fn native_bounds(&self, target: &&'static str) -> Result<Boundary, TapError> {
        LAYOUT
            .iter()
            .find(|(name, _, _)| name == target)
            .map(|(_, bounds, _)| *bounds)
            .ok_or_else(|| TapError::UnknownTarget {
                target: target.to_string(),
            })
    }

    fn inset(&self, target: &&'static str) -> Result<Option<f32>, TapError> {
        Ok(LAYOUT
            .iter()
            .find(|(name, _, _)| name == target)
            .and_then(|(_, _, inset)| *inset))
    }
}

#[derive(Clone)]
struct ReplayClock(Rc<Cell<Instant>>);

impl Clock for ReplayClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

#[derive(Clone, Debug)]
pub enum Step {
    Start(&'static str, f32, f32),
    Move(&'static str, Vec<(f32, f32)>),
    End(&'static str),
    Cancel(&'static str),
    /// Flushes queued touches, then lets `Duration` pass.
    Wait(Duration),
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub about: &'static str,
    pub config: TapConfig,
    pub steps: Vec<Step>,
}

/// Every built-in scenario, in presentation order.
pub fn all() -> Vec<Scenario> {
    use Step::*;
    vec![
        Scenario {
            name: "tap",
            about: "press and release without moving",
            config: TapConfig::default(),
            steps: vec![Start("save", 50.0, 20.0), End("save")],
        },
        Scenario {
            name: "drift",
            about: "finger slides off the button before lifting",
            config: TapConfig::default(),
            steps: vec![
                Start("save", 50.0, 20.0),
                Move("save", vec![(50.0, 45.0)]),
                End("save"),
            ],
        },
        Scenario {
            name: "multi-finger",
            about: "a second finger lands far away and is ignored",
            config: TapConfig::default(),
            steps: vec![
                Start("save", 50.0, 20.0),
                Move("save", vec![(300.0, 300.0), (50.0, 20.0)]),
                End("save"),
            ],
        },
        Scenario {
            name: "platform-cancel",
            about: "the platform takes the touch away",
            config: TapConfig::default(),
            steps: vec![Start("save", 50.0, 20.0), Cancel("save"), End("save")],
        },
        Scenario {
            name: "inset",
            about: "a move just past the edge still counts on an inset element",
            config: TapConfig::default(),
            steps: vec![
                Start("slop", 50.0, 80.0),
                Move("slop", vec![(105.0, 80.0)]),
                End("slop"),
            ],
        },
        Scenario {
            name: "concurrent",
            about: "two buttons pressed at once resolve independently",
            config: TapConfig::default(),
            steps: vec![
                Start("save", 50.0, 20.0),
                Start("discard", 170.0, 20.0),
                Move("discard", vec![(170.0, 60.0)]),
                End("save"),
                End("discard"),
            ],
        },
        Scenario {
            name: "on-release",
            about: "confirmation waits for the finger to lift",
            config: TapConfig::new().with_confirm_policy(ConfirmPolicy::OnRelease),
            steps: vec![
                Start("save", 50.0, 20.0),
                Move("save", vec![(60.0, 20.0)]),
                Move("save", vec![(70.0, 25.0)]),
                End("save"),
            ],
        },
        Scenario {
            name: "timeout",
            about: "a press that is never released gives up",
            config: TapConfig::new().with_timeout(SUGGESTED_TAP_TIMEOUT),
            steps: vec![
                Start("save", 50.0, 20.0),
                Wait(Duration::from_secs(5)),
                Wait(Duration::from_secs(6)),
                End("save"),
            ],
        },
        Scenario {
            name: "unknown-target",
            about: "a touch on an element with no known bounds",
            config: TapConfig::default(),
            steps: vec![Start("banner", 10.0, 10.0), End("banner")],
        },
    ]
}

pub fn find(name: &str) -> Option<Scenario> {
    all().into_iter().find(|scenario| scenario.name == name)
}

fn describe(signal: &str, notification: &TouchNotification<&'static str>) -> String {
    format!(
        "{signal} {} via {}",
        notification.target,
        notification.phase.event_name()
    )
}

fn record(
    transcript: &Rc<RefCell<Vec<String>>>,
    name: &'static str,
    signal: &Signal<TouchNotification<&'static str>>,
) -> Subscription {
    let transcript = Rc::clone(transcript);
    signal.subscribe(move |notification: &TouchNotification<&'static str>| {
        transcript.borrow_mut().push(describe(name, notification));
    })
}

impl Scenario {
    /// Replays the steps and returns one line per emitted signal.
    pub fn run(&self) -> Vec<String> {
        let source = TouchSource::new();
        let clock = ReplayClock(Rc::new(Cell::new(Instant::now())));
        let detector = TapGestureDetector::with_clock(
            &source,
            InsetResolver::new(LayoutGeometry),
            self.config,
            clock.clone(),
        );

        let transcript = Rc::new(RefCell::new(Vec::new()));
        let _subscriptions = [
            record(&transcript, "ping", detector.ping()),
            record(&transcript, "ped", detector.ped()),
            record(&transcript, "cancel", detector.cancel()),
            {
                let transcript = Rc::clone(&transcript);
                detector.errors().subscribe(move |err: &TapError| {
                    transcript.borrow_mut().push(format!("error {err}"));
                })
            },
        ];

        log::info!("scenario {}: {}", self.name, self.about);
        let mut queue = TouchDispatcher::new();
        for step in &self.steps {
            match step {
                Step::Start(target, x, y) => {
                    queue.push(TouchNotification::start(*target, TouchPoint::new(*x, *y)))
                }
                Step::Move(target, contacts) => queue.push(TouchNotification::moved(
                    *target,
                    contacts.iter().map(|&(x, y)| TouchPoint::new(x, y)),
                )),
                Step::End(target) => queue.push(TouchNotification::end(*target)),
                Step::Cancel(target) => queue.push(TouchNotification::cancel(*target)),
                Step::Wait(by) => {
                    queue.flush_into(&source);
                    let now = clock.now() + *by;
                    clock.0.set(now);
                    source.tick(now);
                }
            }
        }
        queue.flush_into(&source);

        if detector.active_attempts() > 0 {
            log::warn!(
                "scenario {} left {} attempt(s) open",
                self.name,
                detector.active_attempts()
            );
        }
        let lines = transcript.borrow().clone();
        lines
    }
}
