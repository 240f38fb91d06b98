use std::fmt;

use ride_core::{PaymentMethod, RideWorkflow};

use crate::utils::{driver_id_from_label, opt_display};

/// Values collected from the request form when a button is pressed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RideFormModel {
    pub pickup: String,
    pub destination: String,
    /// Picker label of the chosen driver, e.g. `Jane Smith (4.9)`.
    pub driver_label: Option<String>,
    pub payment_method: PaymentMethod,
}

impl RideFormModel {
    /// Copies the form into the workflow's ride draft.
    pub fn apply_to(
        &self,
        workflow: &mut RideWorkflow,
    ) {
        workflow.set_pickup(&self.pickup);
        workflow.set_destination(&self.destination);
        workflow.select_driver(self.driver_label.as_deref().and_then(driver_id_from_label));
        workflow.set_payment_method(self.payment_method);
    }
}

impl fmt::Display for RideFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Pickup:      {}", self.pickup)?;
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Driver:      {}", opt_display(&self.driver_label))?;
        write!(f, "Payment:     {}", self.payment_method.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ride_core::{DriverId, estimator::EstimateConfig};

    fn workflow() -> RideWorkflow {
        RideWorkflow::from_config(EstimateConfig::default()).unwrap()
    }

    #[test]
    fn apply_to_fills_ride_draft() {
        let model = RideFormModel {
            pickup: " Home ".into(),
            destination: "Office".into(),
            driver_label: Some("Jane Smith (4.9)".into()),
            payment_method: PaymentMethod::Cash,
        };
        let mut wf = workflow();

        model.apply_to(&mut wf);

        let draft = wf.draft();
        assert_eq!(draft.pickup, "Home");
        assert_eq!(draft.destination, "Office");
        assert_eq!(draft.selected_driver, Some(DriverId(2)));
        assert_eq!(draft.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn apply_to_without_driver_clears_selection() {
        let mut wf = workflow();
        wf.select_driver(Some(DriverId(1)));

        RideFormModel::default().apply_to(&mut wf);

        assert_eq!(wf.draft().selected_driver, None);
    }

    #[test]
    fn display_uses_dash_for_missing_driver() {
        let model = RideFormModel {
            pickup: "Home".into(),
            destination: "Gym".into(),
            ..Default::default()
        };

        let text = model.to_string();

        assert!(text.contains("Driver:      —"));
        assert!(text.ends_with("Payment:     Credit Card"));
    }
}
