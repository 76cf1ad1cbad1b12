use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filters and price simulator
// ---------------------------------------------------------------------------

/// Render the left panel: listing filters on top, price simulator below.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Listings");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the domains so we can mutate state inside the widgets.
    let neighbourhoods = dataset.neighbourhoods.clone();
    let room_types = dataset.room_types.clone();
    let (price_lo, price_hi) = dataset.price_span.unwrap_or((0.0, 0.0));

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Neighbourhood");
            combo(ui, "filter_neighbourhood", &neighbourhoods, &mut state.criteria.neighbourhood);

            ui.strong("Room type");
            combo(ui, "filter_room_type", &room_types, &mut state.criteria.room_type);

            ui.add_space(4.0);
            ui.strong("Price range");
            ui.add(
                egui::Slider::new(&mut state.criteria.price_min, price_lo..=price_hi)
                    .text("min")
                    .prefix("$"),
            );
            ui.add(
                egui::Slider::new(&mut state.criteria.price_max, price_lo..=price_hi)
                    .text("max")
                    .prefix("$"),
            );
            // Keep the range well-formed when the handles cross.
            if state.criteria.price_max < state.criteria.price_min {
                state.criteria.price_max = state.criteria.price_min;
            }

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Price Simulator");
            ui.separator();

            ui.strong("Neighbourhood");
            combo(ui, "sim_neighbourhood", &neighbourhoods, &mut state.sim_neighbourhood);

            ui.strong("Room type");
            combo(ui, "sim_room_type", &room_types, &mut state.sim_room_type);

            ui.add_space(4.0);
            match &state.recommendation {
                Some(band) => {
                    ui.label(format!(
                        "Suggested price range: ${:.2} – ${:.2}",
                        band.low, band.high
                    ));
                }
                None => {
                    ui.label("No similar listings found to suggest a price range.");
                }
            }
        });

    // Full recompute of the derived views after any widget change.
    state.refilter();
    state.refresh_recommendation();
}

/// A ComboBox over the dataset's value domain, so only valid values can be
/// selected.
fn combo(ui: &mut Ui, id: &str, options: &[String], selection: &mut String) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selection.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui
                    .selectable_label(selection == option, option)
                    .clicked()
                {
                    *selection = option.clone();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} listings loaded, {} match filters",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listing data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} listings across {} neighbourhoods",
                    dataset.len(),
                    dataset.neighbourhoods.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
