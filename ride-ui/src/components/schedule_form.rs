use gpui::{App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use gpui_component::{input::InputState, v_flex};

use crate::{
    components::{LocationInputs, make_input_row, make_text_input},
    models::ScheduleFormModel,
};

/// Inputs of the "Schedule Ride" tab.
pub struct ScheduleForm {
    locations: LocationInputs,
    date: Entity<InputState>,
    time: Entity<InputState>,
}

impl ScheduleForm {
    pub fn new(
        locations: LocationInputs,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            locations,
            date: make_text_input("YYYY-MM-DD", window, cx),
            time: make_text_input("HH:MM", window, cx),
        }
    }

    pub fn to_model(
        &self,
        cx: &App,
    ) -> ScheduleFormModel {
        let (pickup, destination) = self.locations.values(cx);
        ScheduleFormModel {
            pickup,
            destination,
            date: self.date.read(cx).value().to_string(),
            time: self.time.read(cx).value().to_string(),
        }
    }
}

impl Render for ScheduleForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .child(make_input_row(&self.locations.pickup, "Pickup:"))
            .child(make_input_row(&self.locations.destination, "Destination:"))
            .child(make_input_row(&self.date, "Date:"))
            .child(make_input_row(&self.time, "Time:"))
    }
}
