use thiserror::Error;

/// Required input missing when a form is submitted.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter pickup and destination.")]
    MissingRoute,

    #[error("Please enter pickup, destination, and select a driver.")]
    MissingRideDetails,

    #[error("Please select a date and time for your scheduled ride.")]
    MissingSchedule,
}
