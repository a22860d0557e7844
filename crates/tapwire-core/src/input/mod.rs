pub mod dispatcher;
pub mod types;

pub use dispatcher::{TouchDispatcher, TouchSource};
pub use types::{TouchNotification, TouchPhase, TouchPoint, TouchPoints, TouchTarget};

pub mod prelude {
    pub use super::dispatcher::TouchSource;
    pub use super::types::{TouchNotification, TouchPhase, TouchPoint, TouchTarget};
}
