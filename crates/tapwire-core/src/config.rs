use std::time::Duration;

/// When a tap attempt counts as confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmPolicy {
    /// The first single-finger move inside the boundary confirms the tap, as
    /// does a release with no move at all.
    #[default]
    FirstMove,
    /// Inside moves are only remembered; the tap is confirmed by the release.
    /// An outside move still cancels immediately.
    OnRelease,
}

/// What happens to an attempt whose timeout elapses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeoutOutcome {
    /// Emit on the `cancel` stream.
    #[default]
    Cancel,
    /// End the attempt without emitting anything.
    Drop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapTimeout {
    pub after: Duration,
    pub outcome: TimeoutOutcome,
}

/// Tap detector configuration.
///
/// The default detects taps exactly as described by the gesture state
/// machine: first-move confirmation and no timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TapConfig {
    pub confirm: ConfirmPolicy,
    pub timeout: Option<TapTimeout>,
}

impl TapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirm_policy(mut self, confirm: ConfirmPolicy) -> Self {
        self.confirm = confirm;
        self
    }

    /// Terminates attempts that have not finished `after` their start. The
    /// host must feed `TouchSource::ticks` for this to have any effect.
    pub fn with_timeout(mut self, after: Duration) -> Self {
        let outcome = self.timeout.map(|timeout| timeout.outcome).unwrap_or_default();
        self.timeout = Some(TapTimeout { after, outcome });
        self
    }

    /// Sets the timeout outcome. Has no effect until a timeout is set.
    pub fn with_timeout_outcome(mut self, outcome: TimeoutOutcome) -> Self {
        if let Some(timeout) = self.timeout.as_mut() {
            timeout.outcome = outcome;
        }
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }
}
