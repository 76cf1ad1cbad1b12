mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::ListingLensApp;
use eframe::egui;
use state::AppState;

/// Loaded automatically when present in the working directory.
const DEFAULT_DATASET: &str = "airbnb.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A present-but-broken default file aborts the session before any UI is
    // shown; an absent one just opens the empty dashboard (File → Open…).
    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATASET);
    if default_path.exists() {
        let dataset = data::loader::load_file(default_path)
            .with_context(|| format!("loading {DEFAULT_DATASET}"))?;
        log::info!(
            "Loaded {} listings across {} neighbourhoods",
            dataset.len(),
            dataset.neighbourhoods.len()
        );
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Listing Lens – Rental Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(ListingLensApp::with_state(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
