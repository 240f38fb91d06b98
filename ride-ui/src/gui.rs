use gpui::{
    App, AppContext, Bounds, IntoElement, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use ride_core::RideWorkflow;
use tracing::info;

use crate::{
    Quit, VerboseLogging,
    components::{AppWindow, RideWorkflowView, WindowPreferences},
    quit, verbose_logging,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    // Register the quit action handler
    app_cx.on_action(quit);
    app_cx.on_action(verbose_logging);

    app_cx.set_menus(vec![Menu {
        name: "Ride Hailing".into(),
        items: vec![
            MenuItem::action("Verbose Logging", VerboseLogging),
            MenuItem::separator(),
            MenuItem::action("Quit", Quit),
        ],
    }]);
}

/// Opens the main window with a fresh ride workflow session.
///
/// The window owns the session: closing it drops the workflow and quits.
pub fn open_main_window(
    workflow: RideWorkflow,
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Ride Hailing".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let ride_view = cx.new(|view_cx| RideWorkflowView::new(workflow, window, view_cx));
        let app_window = cx.new(|window_cx| {
            let mut app_window = AppWindow::new(window_cx);
            app_window.set_content(move || ride_view.clone().into_any_element());
            app_window
        });
        cx.new(|root_cx| Root::new(app_window, window, root_cx))
    })?;

    info!("Main window opened");
    Ok(())
}
