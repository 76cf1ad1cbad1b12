use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Listing – one row of the source table
// ---------------------------------------------------------------------------

/// A single rental listing (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub name: String,
    pub neighbourhood: String,
    pub room_type: String,
    /// Nightly price. Non-negative in real data; not enforced.
    pub price: f64,
    pub number_of_reviews: u32,
    /// Days available per year (0–365 in real data; not enforced).
    pub availability_365: u32,
}

/// Raw record as it appears in the source file, before cleaning.
/// `Option` marks the columns whose missing value drops the row.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub name: Option<String>,
    pub neighbourhood: Option<String>,
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub number_of_reviews: Option<u32>,
    pub availability_365: Option<u32>,
}

impl RawListing {
    /// Promote to a [`Listing`] if every required field is present.
    /// A missing `name` is tolerated and kept as an empty string.
    pub fn into_listing(self) -> Option<Listing> {
        Some(Listing {
            name: self.name.unwrap_or_default(),
            neighbourhood: self.neighbourhood?,
            room_type: self.room_type?,
            price: self.price?,
            number_of_reviews: self.number_of_reviews?,
            availability_365: self.availability_365?,
        })
    }
}

// ---------------------------------------------------------------------------
// ListingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed value domains.
/// Immutable after load; every derived view is recomputed from it.
#[derive(Debug, Clone, Default)]
pub struct ListingDataset {
    /// All listings (rows), in file order.
    pub listings: Vec<Listing>,
    /// Sorted unique neighbourhood values.
    pub neighbourhoods: Vec<String>,
    /// Sorted unique room-type values.
    pub room_types: Vec<String>,
    /// (min, max) of `price` over all listings; `None` when empty.
    pub price_span: Option<(f64, f64)>,
}

impl ListingDataset {
    /// Build value domains from the cleaned rows.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut neighbourhoods: BTreeSet<String> = BTreeSet::new();
        let mut room_types: BTreeSet<String> = BTreeSet::new();
        let mut price_span: Option<(f64, f64)> = None;

        for l in &listings {
            neighbourhoods.insert(l.neighbourhood.clone());
            room_types.insert(l.room_type.clone());
            price_span = Some(match price_span {
                Some((lo, hi)) => (lo.min(l.price), hi.max(l.price)),
                None => (l.price, l.price),
            });
        }

        ListingDataset {
            listings,
            neighbourhoods: neighbourhoods.into_iter().collect(),
            room_types: room_types.into_iter().collect(),
            price_span,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn domains_are_sorted_and_deduplicated() {
        let ds = ListingDataset::from_listings(vec![
            listing("Centro", "Private room", 80.0),
            listing("Arganzuela", "Entire home/apt", 120.0),
            listing("Centro", "Entire home/apt", 95.0),
        ]);
        assert_eq!(ds.neighbourhoods, vec!["Arganzuela", "Centro"]);
        assert_eq!(ds.room_types, vec!["Entire home/apt", "Private room"]);
        assert_eq!(ds.price_span, Some((80.0, 120.0)));
    }

    #[test]
    fn empty_dataset_has_no_price_span() {
        let ds = ListingDataset::from_listings(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.price_span, None);
    }

    #[test]
    fn raw_listing_without_price_is_dropped() {
        let raw = RawListing {
            name: Some("Flat".into()),
            neighbourhood: Some("Centro".into()),
            room_type: Some("Private room".into()),
            price: None,
            number_of_reviews: Some(3),
            availability_365: Some(120),
        };
        assert!(raw.into_listing().is_none());
    }
}
