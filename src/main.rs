mod app;
mod config;
mod event;
mod export;
mod jobs;
mod panels;
mod responder;
mod sample;
mod session;
mod theme;
mod toast;

use app::RailPilotApp;
use eframe::egui;
use jobs::JobRunner;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("railpilot=info")),
        )
        .init();

    let (config, warnings) = config::load();
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("railpilot-runtime")
        .build()?;

    let jobs = JobRunner::new(runtime.handle().clone(), tx);
    let window_size = [config.window_width, config.window_height];
    let app = RailPilotApp::new(config, rx, jobs);
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([1024.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RailPilot",
        native_options,
        Box::new(move |creation_context| {
            app.theme().apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
