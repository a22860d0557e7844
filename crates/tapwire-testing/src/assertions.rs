//! Assertion helpers for tap detection tests.

use crate::testing::{TapRecord, TapSignal, TestTarget};

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// Assert how often `target` appears in a recorded target stream.
pub fn assert_occurrences(targets: &[TestTarget], target: TestTarget, expected: usize, msg: &str) {
    let actual = targets.iter().filter(|t| **t == target).count();
    assert_eq!(
        actual, expected,
        "{}: expected {} occurrences of {:?}, got {} in {:?}",
        msg, expected, target, actual, targets
    );
}

/// Assert the exact sequence of signals recorded, ignoring payloads.
pub fn assert_signals(records: &[TapRecord], expected: &[(TapSignal, TestTarget)], msg: &str) {
    let actual: Vec<(TapSignal, TestTarget)> = records
        .iter()
        .map(|record| (record.signal, record.target()))
        .collect();
    assert_eq!(actual, expected, "{}: unexpected signal sequence", msg);
}

/// Assert that no target ever resolved more often than it started.
///
/// Each start is followed by at most one of `ped` or `cancel`, and never
/// before its own `ping`.
pub fn assert_outcomes_bounded_by_pings(records: &[TapRecord], msg: &str) {
    let mut open: Vec<(TestTarget, usize)> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let target = record.target();
        let slot = match open.iter().position(|(t, _)| *t == target) {
            Some(slot) => slot,
            None => {
                open.push((target, 0));
                open.len() - 1
            }
        };
        match record.signal {
            TapSignal::Ping => open[slot].1 += 1,
            TapSignal::Ped | TapSignal::Cancel => {
                assert!(
                    open[slot].1 > 0,
                    "{}: {:?} for {:?} at record {} without an open ping",
                    msg,
                    record.signal,
                    target,
                    index
                );
                open[slot].1 -= 1;
            }
        }
    }
}
