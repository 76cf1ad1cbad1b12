/// Data layer: core types, loading, filtering, and statistics.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, drop incomplete rows → ListingDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ListingDataset │  Vec<Listing>, value domains, price span
///   └───────────────┘
///        │
///        ├──────────────────────────┐
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  filter   │  selection  │  stats    │  price band, top reviewed
///   └──────────┘  → indices   └──────────┘
/// ```
///
/// Everything below `loader` is a pure function of (dataset, parameters);
/// the dataset is immutable after load.

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
