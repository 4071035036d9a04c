mod analytics;
mod app;
mod config;
mod pipeline;
mod recommendations;
mod theme;
mod toast;
mod utils;

use app::DashboardApp;
use clap::Parser;
use eframe::CreationContext;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "learnboard",
    version,
    about = "AI learning dashboard (local demo data, no network)"
)]
struct CliArgs {
    /// Override the config file location (defaults to ./learnboard.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "learnboard=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CliArgs::parse();
    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let dashboard_config = config::load_or_default(&config_path);
    info!(path = %config_path.display(), "starting");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Learnboard",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(DashboardApp::new(cc, dashboard_config, config_path))
        }),
    ) {
        error!("failed to start UI: {e}");
    }
}
