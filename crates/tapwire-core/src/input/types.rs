use smallvec::SmallVec;
use std::fmt::Debug;
use tapwire_geometry::Point;

/// Page-relative coordinates of one physical contact.
pub type TouchPoint = Point;

/// Active contacts of a notification, in contact order.
pub type TouchPoints = SmallVec<[TouchPoint; 2]>;

/// Anything a platform can hand out as the element a touch landed on.
///
/// Targets only need identity comparison; attempts correlate later
/// notifications with their start by `==` on the target.
pub trait TouchTarget: Clone + PartialEq + Debug + 'static {}

impl<T> TouchTarget for T where T: Clone + PartialEq + Debug + 'static {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    /// DOM event name for this phase.
    pub fn event_name(self) -> &'static str {
        match self {
            TouchPhase::Start => "touchstart",
            TouchPhase::Move => "touchmove",
            TouchPhase::End => "touchend",
            TouchPhase::Cancel => "touchcancel",
        }
    }
}

/// One touch lifecycle notification from the platform.
///
/// `points` is non-empty for `Start` and `Move`; for `End` and `Cancel` the
/// gesture core never looks at it.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchNotification<T> {
    pub phase: TouchPhase,
    pub target: T,
    pub points: TouchPoints,
}

impl<T> TouchNotification<T> {
    pub fn new(phase: TouchPhase, target: T, points: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            phase,
            target,
            points: points.into_iter().collect(),
        }
    }

    pub fn start(target: T, point: TouchPoint) -> Self {
        Self::new(TouchPhase::Start, target, [point])
    }

    pub fn moved(target: T, points: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(TouchPhase::Move, target, points)
    }

    pub fn end(target: T) -> Self {
        Self::new(TouchPhase::End, target, TouchPoints::new())
    }

    pub fn cancel(target: T) -> Self {
        Self::new(TouchPhase::Cancel, target, TouchPoints::new())
    }

    /// The first active contact, which is the one taps are judged by.
    pub fn lead_point(&self) -> Option<TouchPoint> {
        self.points.first().copied()
    }

    pub fn contact_count(&self) -> usize {
        self.points.len()
    }
}
