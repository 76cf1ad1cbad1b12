use super::model::ListingDataset;

// ---------------------------------------------------------------------------
// Price recommendation
// ---------------------------------------------------------------------------

/// Suggested price range for a market segment: 25th/75th percentile of
/// price among comparable listings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub low: f64,
    pub high: f64,
}

/// Suggest a price band for a (neighbourhood, room type) segment.
///
/// Comparable listings are selected over the FULL dataset, independent of
/// the sidebar filter.  Returns `None` when no listing matches.
pub fn recommend(
    dataset: &ListingDataset,
    neighbourhood: &str,
    room_type: &str,
) -> Option<PriceBand> {
    let mut prices: Vec<f64> = dataset
        .listings
        .iter()
        .filter(|l| l.neighbourhood == neighbourhood && l.room_type == room_type)
        .map(|l| l.price)
        .collect();

    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    Some(PriceBand {
        low: quantile(&prices, 0.25),
        high: quantile(&prices, 0.75),
    })
}

/// Quantile with linear interpolation between order statistics: for quantile
/// `q` over `n` sorted values, interpolate at rank `q * (n - 1)`.
///
/// `sorted` must be non-empty and ascending.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// Top-reviewed ranking
// ---------------------------------------------------------------------------

/// Indices of the `n` most-reviewed listings over the FULL dataset (a global
/// leaderboard, deliberately not filtered).  Stable: ties keep dataset order.
pub fn top_reviewed(dataset: &ListingDataset, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.sort_by(|&a, &b| {
        dataset.listings[b]
            .number_of_reviews
            .cmp(&dataset.listings[a].number_of_reviews)
    });
    indices.truncate(n);
    indices
}
