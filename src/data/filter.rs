use super::model::ListingDataset;

// ---------------------------------------------------------------------------
// Filter criteria: the current sidebar selections
// ---------------------------------------------------------------------------

/// The user's current selections.  Recreated on every interaction; never
/// persisted.  Both price bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub neighbourhood: String,
    pub room_type: String,
    pub price_min: f64,
    pub price_max: f64,
}

/// Initialise a [`FilterCriteria`] from the dataset's value domains: first
/// neighbourhood, first room type, and the full price span.
pub fn init_criteria(dataset: &ListingDataset) -> FilterCriteria {
    let (lo, hi) = dataset.price_span.unwrap_or((0.0, 0.0));
    FilterCriteria {
        neighbourhood: dataset.neighbourhoods.first().cloned().unwrap_or_default(),
        room_type: dataset.room_types.first().cloned().unwrap_or_default(),
        price_min: lo,
        price_max: hi,
    }
}

/// Return indices of listings matching all three predicates, in dataset
/// order.  An empty result is valid, not an error.
pub fn filtered_indices(dataset: &ListingDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, l)| {
            l.neighbourhood == criteria.neighbourhood
                && l.room_type == criteria.room_type
                && l.price >= criteria.price_min
                && l.price <= criteria.price_max
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;

    fn listing(neighbourhood: &str, room_type: &str, price: f64) -> Listing {
        Listing {
            name: String::new(),
            neighbourhood: neighbourhood.to_string(),
            room_type: room_type.to_string(),
            price,
            number_of_reviews: 0,
            availability_365: 0,
        }
    }

    fn dataset() -> ListingDataset {
        ListingDataset::from_listings(vec![
            listing("A", "Entire home", 100.0),
            listing("A", "Private room", 40.0),
            listing("B", "Entire home", 150.0),
            listing("A", "Entire home", 200.0),
            listing("A", "Entire home", 150.0),
        ])
    }

    fn criteria(neighbourhood: &str, room_type: &str, lo: f64, hi: f64) -> FilterCriteria {
        FilterCriteria {
            neighbourhood: neighbourhood.to_string(),
            room_type: room_type.to_string(),
            price_min: lo,
            price_max: hi,
        }
    }

    #[test]
    fn matches_all_three_predicates() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &criteria("A", "Entire home", 0.0, 300.0));
        // Soundness + completeness: exactly the "A"/"Entire home" rows.
        assert_eq!(idx, vec![0, 3, 4]);
        for &i in &idx {
            let l = &ds.listings[i];
            assert_eq!(l.neighbourhood, "A");
            assert_eq!(l.room_type, "Entire home");
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &criteria("A", "Entire home", 100.0, 200.0));
        assert_eq!(idx, vec![0, 3, 4]);
        let idx = filtered_indices(&ds, &criteria("A", "Entire home", 0.0, 150.0));
        assert_eq!(idx, vec![0, 4]);
    }

    #[test]
    fn empty_result_is_valid() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &criteria("C", "Entire home", 0.0, 300.0));
        assert!(idx.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let c = criteria("A", "Entire home", 100.0, 180.0);
        let once = filtered_indices(&ds, &c);

        // Re-filter the filtered view: same criteria over the selected rows
        // must keep every row.
        let view = ListingDataset::from_listings(
            once.iter().map(|&i| ds.listings[i].clone()).collect(),
        );
        let twice = filtered_indices(&view, &c);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn init_criteria_spans_the_dataset() {
        let ds = dataset();
        let c = init_criteria(&ds);
        assert_eq!(c.neighbourhood, "A");
        assert_eq!(c.price_min, 40.0);
        assert_eq!(c.price_max, 200.0);
    }
}
