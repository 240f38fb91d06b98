//! Session state for the ride request, schedule, and history screens.
//!
//! [`RideWorkflow`] owns every field the screens show and implements the
//! three submit actions. It is created when a window opens and dropped with
//! it. Nothing here is shared or persisted.
//!
//! Editing the draft never clears or recomputes an existing estimate. The
//! estimate shown is the one from the last successful "Estimate Ride" press.

use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    error::ValidationError,
    estimator::{EstimateConfig, EstimateConfigError, MockEstimator, RideEstimator},
    models::{
        DriverId, Estimate, PaymentMethod, RideDraft, RideHistory, ScheduleDraft, UserProfile,
    },
    notification::Notification,
};

#[derive(Debug)]
pub struct RideWorkflow {
    draft: RideDraft,
    schedule: ScheduleDraft,
    estimate: Option<Estimate>,
    show_map: bool,
    history: RideHistory,
    profile: UserProfile,
    estimator: Box<dyn RideEstimator>,
    clock: Box<dyn Clock>,
}

impl RideWorkflow {
    /// Starts a session with empty drafts and the seeded ride history.
    pub fn new(
        estimator: Box<dyn RideEstimator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            draft: RideDraft::default(),
            schedule: ScheduleDraft::default(),
            estimate: None,
            show_map: false,
            history: RideHistory::seeded(),
            profile: UserProfile::default(),
            estimator,
            clock,
        }
    }

    /// Starts a session backed by the mock estimator and the system clock.
    pub fn from_config(config: EstimateConfig) -> Result<Self, EstimateConfigError> {
        let estimator = MockEstimator::new(config)?;
        Ok(Self::new(Box::new(estimator), Box::new(SystemClock)))
    }

    pub fn with_profile(
        mut self,
        profile: UserProfile,
    ) -> Self {
        self.profile = profile;
        self
    }

    // --- Draft editing ---

    /// Stores the pickup with surrounding whitespace trimmed, so later
    /// confirmations echo the trimmed text.
    pub fn set_pickup(
        &mut self,
        pickup: &str,
    ) {
        self.draft.pickup = pickup.trim().to_string();
    }

    /// Trims like [`Self::set_pickup`].
    pub fn set_destination(
        &mut self,
        destination: &str,
    ) {
        self.draft.destination = destination.trim().to_string();
    }

    pub fn select_driver(
        &mut self,
        driver: Option<DriverId>,
    ) {
        self.draft.selected_driver = driver;
    }

    pub fn set_payment_method(
        &mut self,
        method: PaymentMethod,
    ) {
        self.draft.payment_method = method;
    }

    /// Schedule fields are trimmed too. A whitespace-only value counts as
    /// missing.
    pub fn set_schedule_date(
        &mut self,
        date: &str,
    ) {
        self.schedule.date = date.trim().to_string();
    }

    /// Trims like [`Self::set_schedule_date`].
    pub fn set_schedule_time(
        &mut self,
        time: &str,
    ) {
        self.schedule.time = time.trim().to_string();
    }

    // --- Actions ---

    /// Draws a new estimate for the current pickup and destination and
    /// reveals the map placeholder.
    ///
    /// Leaves all state untouched when either location is missing. Callers
    /// show nothing to the user in that case.
    pub fn estimate_ride(&mut self) -> Result<Estimate, ValidationError> {
        if let Err(error) = self.draft.validate_for_estimate() {
            debug!(%error, "estimate skipped");
            return Err(error);
        }

        let estimate = self
            .estimator
            .estimate(&self.draft.pickup, &self.draft.destination);
        info!(
            pickup = %self.draft.pickup,
            destination = %self.draft.destination,
            %estimate,
            "ride estimated"
        );
        self.estimate = Some(estimate);
        self.show_map = true;
        Ok(estimate)
    }

    /// Requests a ride with the selected driver and records it in history.
    pub fn request_ride(&mut self) -> Result<Notification, ValidationError> {
        let driver = self.draft.validate_for_request().inspect_err(|error| {
            warn!(%error, "ride request rejected");
        })?;

        let now = self.clock.now();
        let entry = self
            .history
            .append(&self.draft.pickup, &self.draft.destination, now);
        info!(
            id = entry.id,
            driver = %driver.name,
            payment = self.draft.payment_method.as_str(),
            "ride requested"
        );

        Ok(Notification::success(
            "Ride Requested",
            format!(
                "From {} to {}. Driver {} will arrive shortly.",
                self.draft.pickup, self.draft.destination, driver.name
            ),
        ))
    }

    /// Confirms a scheduled ride. Scheduled rides are not added to history.
    pub fn schedule_ride(&mut self) -> Result<Notification, ValidationError> {
        self.schedule.validate_for_submit().inspect_err(|error| {
            warn!(%error, "ride schedule rejected");
        })?;

        info!(date = %self.schedule.date, time = %self.schedule.time, "ride scheduled");
        Ok(Notification::success(
            "Ride Scheduled",
            format!(
                "Your ride has been scheduled for {} at {}.",
                self.schedule.date, self.schedule.time
            ),
        ))
    }

    // --- Read access ---

    pub fn draft(&self) -> &RideDraft {
        &self.draft
    }

    pub fn schedule(&self) -> &ScheduleDraft {
        &self.schedule
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    pub fn show_map(&self) -> bool {
        self.show_map
    }

    pub fn history(&self) -> &RideHistory {
        &self.history
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
