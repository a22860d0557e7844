/// Failures surfaced while resolving a tap boundary.
///
/// Resolvers are expected to be total over the targets a platform delivers,
/// so any of these indicates a wiring or markup problem on the caller side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapError {
    UnknownTarget { target: String },
    InvalidInset { target: String, value: String },
    Platform { reason: String },
}

impl std::fmt::Display for TapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapError::UnknownTarget { target } => write!(f, "no boundary known for {target}"),
            TapError::InvalidInset { target, value } => {
                write!(f, "invalid inset {value:?} on {target}")
            }
            TapError::Platform { reason } => write!(f, "platform failure: {reason}"),
        }
    }
}

impl std::error::Error for TapError {}
