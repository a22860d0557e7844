//! Shared constants for tap detection.

use std::time::Duration;

/// Element attribute platforms read the per-element hit-area inset from.
///
/// The value is a margin in logical pixels; positive values grow the hit
/// rectangle on every side, negative values shrink it.
pub const DEFAULT_INSET_ATTRIBUTE: &str = "data-tap-inset";

/// Timeout to use when a host opts into abandoning taps whose `touchend`
/// never arrives. Not applied unless configured.
pub const SUGGESTED_TAP_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of active contacts a move may carry and still count towards a tap.
pub const TAP_CONTACT_COUNT: usize = 1;
