use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::{App, Application};
use gpui_component_assets::Assets;
use ride_core::RideWorkflow;
use tracing::{debug, error, info};

use ride_ui::{
    components::WindowPreferences, config::AppConfig, logging, open_main_window, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Ride hailing demo: request, schedule, and review rides.
///
/// All state is in memory and lost when the window closes.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,ride_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }

    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let workflow = RideWorkflow::from_config(config.estimate)?.with_profile(config.profile);
    let preferences = WindowPreferences::from(&config.window);

    info!("Starting application");
    Application::new()
        .with_assets(Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(workflow, preferences, cx) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
