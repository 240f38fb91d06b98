use std::fmt;

use ride_core::RideWorkflow;

/// Values collected from the schedule form.
///
/// Pickup and destination are the same inputs the request form shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleFormModel {
    pub pickup: String,
    pub destination: String,
    pub date: String,
    pub time: String,
}

impl ScheduleFormModel {
    pub fn apply_to(
        &self,
        workflow: &mut RideWorkflow,
    ) {
        workflow.set_pickup(&self.pickup);
        workflow.set_destination(&self.destination);
        workflow.set_schedule_date(&self.date);
        workflow.set_schedule_time(&self.time);
    }
}

impl fmt::Display for ScheduleFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} -> {} on {} at {}",
            self.pickup, self.destination, self.date, self.time
        )
    }
}
