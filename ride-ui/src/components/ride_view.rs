use gpui::{
    AnyElement, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement,
    ParentElement, Render, Styled, Window, div, px,
};
use gpui_component::{
    h_flex,
    button::{Button, ButtonVariants},
    v_flex,
};
use ride_core::{Estimate, Notification, RideWorkflow};
use tracing::{debug, info};

use crate::{
    components::{
        LocationInputs, RequestForm, ScheduleForm, history_list::history_list, make_button,
        profile_dialog::open_profile_dialog,
    },
    utils::push_toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RideTab {
    #[default]
    Request,
    Schedule,
    History,
}

impl RideTab {
    pub fn all() -> &'static [RideTab] {
        &[RideTab::Request, RideTab::Schedule, RideTab::History]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Request => "tab-request",
            Self::Schedule => "tab-schedule",
            Self::History => "tab-history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Request => "Request Ride",
            Self::Schedule => "Schedule Ride",
            Self::History => "Ride History",
        }
    }
}

/// Root view of the main window. Owns the session's [`RideWorkflow`].
pub struct RideWorkflowView {
    workflow: RideWorkflow,
    active_tab: RideTab,
    request_form: Entity<RequestForm>,
    schedule_form: Entity<ScheduleForm>,
}

impl RideWorkflowView {
    pub fn new(
        workflow: RideWorkflow,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locations = LocationInputs::new(window, cx);
        let request_form = {
            let locations = locations.clone();
            cx.new(|cx| RequestForm::new(locations, window, cx))
        };
        let schedule_form = cx.new(|cx| ScheduleForm::new(locations, window, cx));

        Self {
            workflow,
            active_tab: RideTab::default(),
            request_form,
            schedule_form,
        }
    }

    fn on_estimate(
        &mut self,
        _: &ClickEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let form = self.request_form.read(cx).to_model(cx);
        form.apply_to(&mut self.workflow);
        // Missing locations are ignored without a toast.
        if let Err(error) = self.workflow.estimate_ride() {
            debug!(%error, "estimate button ignored");
        }
        cx.notify();
    }

    fn on_request(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let form = self.request_form.read(cx).to_model(cx);
        debug!(%form, "request form submitted");
        form.apply_to(&mut self.workflow);
        let note = self
            .workflow
            .request_ride()
            .unwrap_or_else(Notification::from);
        push_toast(&note, window, cx);
        cx.notify();
    }

    fn on_schedule(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let form = self.schedule_form.read(cx).to_model(cx);
        debug!(%form, "schedule form submitted");
        form.apply_to(&mut self.workflow);
        let note = self
            .workflow
            .schedule_ride()
            .unwrap_or_else(Notification::from);
        push_toast(&note, window, cx);
    }

    fn on_view_profile(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("opening profile dialog");
        open_profile_dialog(self.workflow.profile(), window, cx);
    }

    fn render_tab_bar(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let buttons: Vec<Button> = RideTab::all()
            .iter()
            .map(|&tab| {
                let button = Button::new(tab.id()).label(tab.label()).flex_1();
                let button = if tab == self.active_tab {
                    button.primary()
                } else {
                    button.ghost()
                };
                button.on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                    debug!(tab = tab.label(), "switching tab");
                    this.active_tab = tab;
                    cx.notify();
                }))
            })
            .collect();

        h_flex().w_full().gap_2().children(buttons)
    }

    fn render_request_tab(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .gap_4()
            .child(card_title("Request a Ride"))
            .child(self.request_form.clone())
            .child(
                h_flex()
                    .gap_4()
                    .justify_center()
                    .child(make_button(
                        "estimate-ride",
                        "Estimate Ride",
                        cx.listener(Self::on_estimate),
                    ))
                    .child(make_button(
                        "request-ride",
                        "Request Ride",
                        cx.listener(Self::on_request),
                    )),
            )
            .children(self.workflow.estimate().map(estimate_row))
            .children(self.workflow.show_map().then(map_placeholder))
    }

    fn render_schedule_tab(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .gap_4()
            .child(card_title("Schedule a Ride"))
            .child(self.schedule_form.clone())
            .child(h_flex().justify_center().child(make_button(
                "schedule-ride",
                "Schedule Ride",
                cx.listener(Self::on_schedule),
            )))
    }

    fn render_history_tab(&self) -> Div {
        v_flex()
            .gap_4()
            .child(card_title("Ride History"))
            .child(history_list(self.workflow.history()))
    }
}

impl Render for RideWorkflowView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let body: AnyElement = match self.active_tab {
            RideTab::Request => self.render_request_tab(cx).into_any_element(),
            RideTab::Schedule => self.render_schedule_tab(cx).into_any_element(),
            RideTab::History => self.render_history_tab().into_any_element(),
        };

        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .text_center()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Ride Hailing"),
            )
            .child(self.render_tab_bar(cx))
            .child(body)
            .child(
                h_flex().child(
                    Button::new("view-profile")
                        .outline()
                        .label("View Profile")
                        .on_click(cx.listener(Self::on_view_profile)),
                ),
            )
    }
}

fn card_title(title: &'static str) -> Div {
    div()
        .text_xl()
        .font_weight(FontWeight::SEMIBOLD)
        .child(title)
}

fn estimate_row(estimate: &Estimate) -> Div {
    h_flex()
        .justify_between()
        .items_center()
        .child(estimate.time_label())
        .child(estimate.cost_label())
}

fn map_placeholder() -> Div {
    div()
        .w_full()
        .h(px(192.))
        .border_1()
        .rounded_md()
        .flex()
        .items_center()
        .justify_center()
        .child("Map View (Integration Placeholder)")
}
