use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::{Root, StyledExt};
use tracing::info;

use crate::{Quit, quit};

/// Top-level window body. Hosts the content factory plus the dialog and
/// notification layers.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            quit(&Quit, cx);
        });

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// Set a factory that produces the content to be rendered in the window.
    ///
    /// The factory is called on every render.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());
        let dialog_layer = Root::render_dialog_layer(window, cx);
        let notification_layer = Root::render_notification_layer(window, cx);

        div()
            .v_flex()
            .size_full()
            .children(content)
            .children(dialog_layer)
            .children(notification_layer)
    }
}
