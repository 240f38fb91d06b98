use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    models::{DriverId, DriverOption, PaymentMethod, find_driver},
};

/// Fields of the ride request form that have not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideDraft {
    pub pickup: String,
    pub destination: String,
    pub selected_driver: Option<DriverId>,
    pub payment_method: PaymentMethod,
}

impl RideDraft {
    pub fn has_route(&self) -> bool {
        !is_blank(&self.pickup) && !is_blank(&self.destination)
    }

    /// Checks the fields needed for an estimate.
    pub fn validate_for_estimate(&self) -> Result<(), ValidationError> {
        if self.has_route() {
            Ok(())
        } else {
            Err(ValidationError::MissingRoute)
        }
    }

    /// Checks the fields needed to request a ride and resolves the driver.
    ///
    /// A driver id that is not in the catalog counts as no driver.
    pub fn validate_for_request(&self) -> Result<DriverOption, ValidationError> {
        if !self.has_route() {
            return Err(ValidationError::MissingRideDetails);
        }
        self.selected_driver
            .and_then(find_driver)
            .ok_or(ValidationError::MissingRideDetails)
    }
}

/// Date and time chosen on the schedule form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub date: String,
    pub time: String,
}

impl ScheduleDraft {
    pub fn validate_for_submit(&self) -> Result<(), ValidationError> {
        if is_blank(&self.date) || is_blank(&self.time) {
            Err(ValidationError::MissingSchedule)
        } else {
            Ok(())
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
