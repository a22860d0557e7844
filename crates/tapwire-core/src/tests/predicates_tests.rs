use super::*;

fn square() -> Boundary {
    Boundary::new(0.0, 100.0, 100.0, 0.0)
}

#[test]
fn interior_points_are_tap_intentions() {
    assert!(is_tap_intention(TouchPoint::new(50.0, 50.0), &square()));
    assert!(is_tap_intention(TouchPoint::new(0.5, 99.5), &square()));
}

#[test]
fn edge_points_are_outside() {
    let boundary = square();
    for point in [
        TouchPoint::new(0.0, 50.0),
        TouchPoint::new(100.0, 50.0),
        TouchPoint::new(50.0, 0.0),
        TouchPoint::new(50.0, 100.0),
        TouchPoint::new(100.0, 100.0),
    ] {
        assert!(
            !is_tap_intention(point, &boundary),
            "{point:?} should be outside {boundary:?}"
        );
    }
}

#[test]
fn exterior_points_are_outside() {
    assert!(!is_tap_intention(TouchPoint::new(105.0, 50.0), &square()));
    assert!(!is_tap_intention(TouchPoint::new(-1.0, -1.0), &square()));
}

#[test]
fn degenerate_boundary_contains_nothing() {
    let collapsed = Boundary::new(50.0, 50.0, 50.0, 50.0);
    assert!(!is_tap_intention(TouchPoint::new(50.0, 50.0), &collapsed));
}

#[test]
fn single_finger_requires_exactly_one_contact() {
    let one = TouchNotification::moved("a", [TouchPoint::new(1.0, 1.0)]);
    let two = TouchNotification::moved("a", [TouchPoint::new(1.0, 1.0), TouchPoint::new(2.0, 2.0)]);
    let none = TouchNotification::moved("a", Vec::<TouchPoint>::new());

    assert!(is_single_finger(&one));
    assert!(!is_single_finger(&two));
    assert!(!is_single_finger(&none));
}
