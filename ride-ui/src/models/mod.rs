pub mod ride_form;
pub mod schedule_form;

pub use ride_form::RideFormModel;
pub use schedule_form::ScheduleFormModel;
