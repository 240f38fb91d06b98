pub mod clock;
pub mod error;
pub mod estimator;
pub mod models;
pub mod notification;
pub mod workflow;

pub use error::ValidationError;
pub use models::*;
pub use notification::{Notification, NotificationKind};
pub use workflow::RideWorkflow;
