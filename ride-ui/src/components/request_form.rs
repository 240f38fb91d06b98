use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};
use gpui_component::{
    h_flex,
    radio::Radio,
    select::{Select, SelectState},
    v_flex,
};
use ride_core::{PaymentMethod, driver_catalog};

use crate::{
    components::{LocationInputs, make_input_row, make_labeled_row},
    models::RideFormModel,
};

/// Inputs of the "Request Ride" tab: route, driver, and payment method.
pub struct RequestForm {
    locations: LocationInputs,
    driver: Entity<SelectState<Vec<SharedString>>>,
    payment_method: PaymentMethod,
}

impl RequestForm {
    pub fn new(
        locations: LocationInputs,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let drivers: Vec<SharedString> = driver_catalog()
            .iter()
            .map(|driver| SharedString::from(driver.label()))
            .collect();
        let driver = cx.new(|cx| SelectState::new(drivers, None, window, cx));

        Self {
            locations,
            driver,
            payment_method: PaymentMethod::default(),
        }
    }

    /// Collects the current form values into a [`RideFormModel`].
    pub fn to_model(
        &self,
        cx: &App,
    ) -> RideFormModel {
        let (pickup, destination) = self.locations.values(cx);
        RideFormModel {
            pickup,
            destination,
            driver_label: self
                .driver
                .read(cx)
                .selected_value()
                .map(|label| label.to_string()),
            payment_method: self.payment_method,
        }
    }
}

impl Render for RequestForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let radios = PaymentMethod::all().iter().map(|&method| {
            Radio::new(method.as_str())
                .label(method.label())
                .checked(self.payment_method == method)
                .on_click(cx.listener(move |this, _: &bool, _, cx| {
                    this.payment_method = method;
                    cx.notify();
                }))
        });
        let radios: Vec<Radio> = radios.collect();

        v_flex()
            .gap_2()
            .child(make_input_row(&self.locations.pickup, "Pickup:"))
            .child(make_input_row(&self.locations.destination, "Destination:"))
            .child(
                make_labeled_row("Driver:")
                    .child(Select::new(&self.driver).placeholder("Select a driver")),
            )
            .child(make_labeled_row("Payment:").child(h_flex().gap_4().children(radios)))
    }
}
