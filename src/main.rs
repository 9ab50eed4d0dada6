mod app;
mod color;
mod config;
mod data;
mod format;
mod state;
mod ui;
mod view;

use anyhow::Context;
use app::SalesDashboardApp;
use config::SourceConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    // A `.env` file may set the source path, sheet and RUST_LOG.
    dotenvy::dotenv().ok();
    env_logger::init();

    // A missing or unreadable source is fatal before the window opens.
    let mut state = AppState::new(SourceConfig::from_env());
    state.load().with_context(|| {
        format!(
            "loading sales data from {} (sheet '{}')",
            state.source.path.display(),
            state.source.sheet
        )
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        app::TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SalesDashboardApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
