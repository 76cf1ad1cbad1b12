use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot};

use crate::data::stats::{quantile, top_reviewed};
use crate::state::{AppState, TOP_LISTINGS};

const HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Analysis tab – charts over the filtered view
// ---------------------------------------------------------------------------

/// Availability box plot and price histogram over the filtered view.
pub fn analysis_tab(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            prompt_for_file(ui);
            return;
        }
    };

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No listings match the current filters.");
        });
        return;
    }

    let half = (ui.available_height() - 40.0) / 2.0;

    ui.strong("Availability by Room Type");
    availability_box_plot(ui, state, dataset, half);

    ui.add_space(4.0);
    ui.strong("Price Distribution");
    price_histogram(ui, state, dataset, half);
}

/// One box per room type present in the filtered view; whiskers at min/max,
/// box at the quartiles.
fn availability_box_plot(
    ui: &mut Ui,
    state: &AppState,
    dataset: &crate::data::model::ListingDataset,
    height: f32,
) {
    let mut by_room_type: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let l = &dataset.listings[idx];
        by_room_type
            .entry(l.room_type.as_str())
            .or_default()
            .push(l.availability_365 as f64);
    }

    let mut boxes = Vec::with_capacity(by_room_type.len());
    let mut labels = Vec::with_capacity(by_room_type.len());
    for (i, (room_type, mut values)) in by_room_type.into_iter().enumerate() {
        values.sort_by(f64::total_cmp);
        let spread = BoxSpread::new(
            values[0],
            quantile(&values, 0.25),
            quantile(&values, 0.5),
            quantile(&values, 0.75),
            values[values.len() - 1],
        );
        boxes.push(
            BoxElem::new(i as f64, spread)
                .name(room_type)
                .fill(state.room_type_colors.color_for(room_type).gamma_multiply(0.6))
                .box_width(0.5),
        );
        labels.push(room_type.to_string());
    }

    Plot::new("availability_box_plot")
        .height(height)
        .legend(Legend::default())
        .y_axis_label("Availability (days/year)")
        .x_axis_formatter(move |mark, _range| {
            category_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
        });
}

/// Histogram of price over the filtered view, coloured by the selected room
/// type.
fn price_histogram(
    ui: &mut Ui,
    state: &AppState,
    dataset: &crate::data::model::ListingDataset,
    height: f32,
) {
    let prices: Vec<f64> = state
        .visible_indices
        .iter()
        .map(|&i| dataset.listings[i].price)
        .collect();

    let lo = prices.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;

    // Degenerate span: every price identical, one bar carries everything.
    let (bins, width) = if span <= f64::EPSILON {
        (1, 1.0)
    } else {
        (HISTOGRAM_BINS, span / HISTOGRAM_BINS as f64)
    };

    let mut counts = vec![0usize; bins];
    for &p in &prices {
        let bin = (((p - lo) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    let color = state.room_type_colors.color_for(&state.criteria.room_type);
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(lo + (i as f64 + 0.5) * width, count as f64)
                .width(width * 0.95)
                .fill(color)
        })
        .collect();

    Plot::new("price_histogram")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Price ($)")
        .y_axis_label("Listings")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&state.criteria.room_type));
        });
}

// ---------------------------------------------------------------------------
// Top Listings tab – global leaderboard
// ---------------------------------------------------------------------------

/// Bar chart of the most-reviewed listings over the FULL dataset, coloured
/// by neighbourhood.
pub fn top_listings_tab(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            prompt_for_file(ui);
            return;
        }
    };

    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("The dataset is empty.");
        });
        return;
    }

    let top = top_reviewed(dataset, TOP_LISTINGS);

    let mut bars = Vec::with_capacity(top.len());
    let mut labels = Vec::with_capacity(top.len());
    for (rank, &idx) in top.iter().enumerate() {
        let l = &dataset.listings[idx];
        let label = if l.name.is_empty() {
            format!("listing {idx}")
        } else {
            l.name.clone()
        };
        bars.push(
            Bar::new(rank as f64, l.number_of_reviews as f64)
                .name(format!("{label} ({})", l.neighbourhood))
                .fill(state.neighbourhood_colors.color_for(&l.neighbourhood))
                .width(0.7),
        );
        labels.push(label);
    }

    ui.strong("Top Listings by Reviews");
    Plot::new("top_reviews_bar_chart")
        .height(ui.available_height() - 8.0)
        .y_axis_label("Number of reviews")
        .x_axis_formatter(move |mark, _range| {
            category_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Most Reviewed Listings"));
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Label integer grid marks with the category at that position.
fn category_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    match labels.get(value as usize) {
        Some(label) if label.chars().count() > 18 => {
            format!("{}…", label.chars().take(17).collect::<String>())
        }
        Some(label) => label.clone(),
        None => String::new(),
    }
}

fn prompt_for_file(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a listing file to explore  (File → Open…)");
    });
}
