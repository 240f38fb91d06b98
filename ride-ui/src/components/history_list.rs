use gpui::{Div, FontWeight, ParentElement, Styled, div};
use gpui_component::{h_flex, v_flex};
use ride_core::{RideHistory, RideHistoryEntry};

/// Read-only list of past rides, oldest first.
pub fn history_list(history: &RideHistory) -> Div {
    v_flex()
        .gap_1()
        .child(
            div()
                .font_weight(FontWeight::SEMIBOLD)
                .child(format!("{} rides", history.len())),
        )
        .children(history.iter().map(history_row))
}

fn history_row(entry: &RideHistoryEntry) -> Div {
    h_flex().justify_between().items_center().border_b_1().py_2().child(
        v_flex()
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(entry.route_label()),
            )
            .child(div().text_sm().child(entry.date_label())),
    )
}
