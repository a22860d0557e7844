pub mod scenarios;

pub use scenarios::{Scenario, Step};
