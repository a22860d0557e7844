//! Testing utilities and harness for tapwire

pub mod assertions;
pub mod testing;

pub use assertions::*;
pub use testing::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::testing::{ManualClock, TapRecord, TapSignal, TapTestRule, TestTarget};
}
