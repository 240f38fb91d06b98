mod drafts;
mod driver;
mod estimate;
mod history;
mod payment_method;
mod profile;

pub use drafts::{RideDraft, ScheduleDraft};
pub use driver::{DriverId, DriverOption, driver_catalog, find_driver};
pub use estimate::Estimate;
pub use history::{RideHistory, RideHistoryEntry};
pub use payment_method::PaymentMethod;
pub use profile::UserProfile;
