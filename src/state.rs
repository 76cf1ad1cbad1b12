use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_criteria, FilterCriteria};
use crate::data::model::ListingDataset;
use crate::data::stats::{recommend, PriceBand};

/// How many listings the leaderboard shows.
pub const TOP_LISTINGS: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central-panel tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analysis,
    TopListings,
}

/// The full UI state, independent of rendering.
///
/// Every widget change triggers a full recomputation of the derived fields
/// (`visible_indices`, `recommendation`) from the current selections; the
/// dataset itself never changes after load.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<ListingDataset>,

    /// Current sidebar filter selections.
    pub criteria: FilterCriteria,

    /// Indices of listings passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Price-simulator selections, independent of the filter criteria.
    pub sim_neighbourhood: String,
    pub sim_room_type: String,

    /// Suggested price band for the simulator selections (cached).
    pub recommendation: Option<PriceBand>,

    /// Active central-panel tab.
    pub tab: Tab,

    /// Category colours for the charts.
    pub room_type_colors: ColorMap,
    pub neighbourhood_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise selections and colours.
    pub fn set_dataset(&mut self, dataset: ListingDataset) {
        self.criteria = init_criteria(&dataset);
        self.sim_neighbourhood = self.criteria.neighbourhood.clone();
        self.sim_room_type = self.criteria.room_type.clone();
        self.room_type_colors = ColorMap::new(&dataset.room_types);
        self.neighbourhood_colors = ColorMap::new(&dataset.neighbourhoods);

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
        self.refresh_recommendation();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.criteria),
            None => Vec::new(),
        };
    }

    /// Recompute the price suggestion after a simulator change.
    pub fn refresh_recommendation(&mut self) {
        self.recommendation = self
            .dataset
            .as_ref()
            .and_then(|ds| recommend(ds, &self.sim_neighbourhood, &self.sim_room_type));
    }
}
