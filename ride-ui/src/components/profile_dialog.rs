use gpui::{App, AppContext, Entity, ParentElement, SharedString, Styled, Window};
use gpui_component::{WindowExt, input::InputState, v_flex};
use ride_core::UserProfile;

use crate::components::make_input_row;

/// Opens the "User Profile" dialog.
///
/// The inputs start with the profile values. Edits are not saved anywhere.
pub fn open_profile_dialog(
    profile: &UserProfile,
    window: &mut Window,
    cx: &mut App,
) {
    let name = make_prefilled_input(profile.name.clone(), window, cx);
    let email = make_prefilled_input(profile.email.clone(), window, cx);

    window.open_dialog(cx, move |dialog, _, _| {
        dialog.title("User Profile").child(
            v_flex()
                .gap_4()
                .py_4()
                .child("Your account details and preferences.")
                .child(make_input_row(&name, "Name"))
                .child(make_input_row(&email, "Email")),
        )
    });
}

fn make_prefilled_input(
    value: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut App,
) -> Entity<InputState> {
    let value = value.into();
    cx.new(|input_cx| InputState::new(window, input_cx).default_value(value))
}
