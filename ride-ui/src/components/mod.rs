pub mod history_list;
pub mod profile_dialog;
pub mod request_form;
pub mod ride_view;
pub mod schedule_form;
pub mod window;

use gpui::{
    App, AppContext, ClickEvent, Div, Entity, ParentElement, Pixels, SharedString, Size, Styled,
    TextAlign, Window, div, px,
};
use gpui_component::{
    Sizable, h_flex,
    button::{Button, ButtonVariants},
    input::{Input, InputState},
};

use crate::config::WindowConfig;

pub use request_form::RequestForm;
pub use ride_view::RideWorkflowView;
pub use schedule_form::ScheduleForm;
pub use window::AppWindow;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

/// Pickup and destination inputs, shared by the request and schedule forms.
#[derive(Clone)]
pub struct LocationInputs {
    pub pickup: Entity<InputState>,
    pub destination: Entity<InputState>,
}

impl LocationInputs {
    pub fn new(
        window: &mut Window,
        cx: &mut App,
    ) -> Self {
        Self {
            pickup: make_text_input("Pickup Location", window, cx),
            destination: make_text_input("Destination", window, cx),
        }
    }

    pub fn values(
        &self,
        cx: &App,
    ) -> (String, String) {
        (
            self.pickup.read(cx).value().to_string(),
            self.destination.read(cx).value().to_string(),
        )
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(160.))
        .label(label.into())
        .on_click(on_click)
}

pub fn make_text_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut App,
) -> Entity<InputState> {
    let placeholder = placeholder.into();
    cx.new(|input_cx| InputState::new(window, input_cx).placeholder(placeholder))
}

pub fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Creates the common outer container and label used by every form row,
/// ensuring consistent alignment, spacing, and border styling.
pub fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(120.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
