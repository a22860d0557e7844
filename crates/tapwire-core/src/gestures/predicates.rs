use crate::gesture_constants::TAP_CONTACT_COUNT;
use crate::input::{TouchNotification, TouchPoint};
use tapwire_geometry::Boundary;

/// Whether `point` still expresses an intention to tap inside `boundary`.
///
/// Containment is strict: a contact exactly on an edge has left the element.
pub fn is_tap_intention(point: TouchPoint, boundary: &Boundary) -> bool {
    boundary.contains_strict(point)
}

/// Whether a move carries exactly one active contact.
///
/// Moves with no contacts or with extra fingers are not tap candidates at
/// all; they neither confirm nor cancel an attempt.
pub fn is_single_finger<T>(notification: &TouchNotification<T>) -> bool {
    notification.contact_count() == TAP_CONTACT_COUNT
}

#[cfg(test)]
#[path = "../tests/predicates_tests.rs"]
mod tests;
