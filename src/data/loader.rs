use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Listing, ListingDataset, RawListing};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load-time failure. Dropped rows are not errors; a file that loads
/// but yields zero rows is a valid (empty) dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Columns that must exist in the file and be non-missing per row.
/// `name` is also read but tolerated when absent.
const REQUIRED_COLUMNS: [&str; 5] = [
    "neighbourhood",
    "room_type",
    "price",
    "number_of_reviews",
    "availability_365",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listing dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the required columns (extras ignored)
/// * `.json` – records-oriented array, `df.to_json(orient='records')` style
pub fn load_file(path: &Path) -> Result<ListingDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataLoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.  Rows missing a value in any
/// required column (empty or unparseable cell) are dropped; extra columns
/// are ignored.
fn load_csv(path: &Path) -> Result<ListingDataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &'static str| -> Result<usize, DataLoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };

    let neighbourhood_idx = col(REQUIRED_COLUMNS[0])?;
    let room_type_idx = col(REQUIRED_COLUMNS[1])?;
    let price_idx = col(REQUIRED_COLUMNS[2])?;
    let reviews_idx = col(REQUIRED_COLUMNS[3])?;
    let availability_idx = col(REQUIRED_COLUMNS[4])?;
    let name_idx = headers.iter().position(|h| h == "name");

    let mut listings = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result?;

        let raw = RawListing {
            name: name_idx.and_then(|i| nonempty(record.get(i))),
            neighbourhood: nonempty(record.get(neighbourhood_idx)),
            room_type: nonempty(record.get(room_type_idx)),
            price: cell(record.get(price_idx)),
            number_of_reviews: cell(record.get(reviews_idx)),
            availability_365: cell(record.get(availability_idx)),
        };

        match raw.into_listing() {
            Some(listing) => listings.push(listing),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} CSV rows with missing values");
    }

    Ok(ListingDataset::from_listings(listings))
}

/// A trimmed, non-empty cell value.
fn nonempty(s: Option<&str>) -> Option<String> {
    let s = s?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse a cell; empty or unparseable counts as missing.
fn cell<T: std::str::FromStr>(s: Option<&str>) -> Option<T> {
    nonempty(s)?.parse().ok()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "name": "Cosy studio",
///     "neighbourhood": "Centro",
///     "room_type": "Entire home/apt",
///     "price": 85.0,
///     "number_of_reviews": 42,
///     "availability_365": 180
///   },
///   ...
/// ]
/// ```
///
/// JSON has no header row, so an absent key behaves like a missing cell and
/// drops the record.
fn load_json(path: &Path) -> Result<ListingDataset, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawListing> = serde_json::from_str(&text)?;

    let total = records.len();
    let listings: Vec<Listing> = records
        .into_iter()
        .filter_map(RawListing::into_listing)
        .collect();

    if listings.len() < total {
        log::debug!(
            "Dropped {} JSON records with missing values",
            total - listings.len()
        );
    }

    Ok(ListingDataset::from_listings(listings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("listing-lens-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_rows_with_missing_values_are_dropped() {
        let path = write_temp(
            "drop.csv",
            "name,neighbourhood,room_type,price,number_of_reviews,availability_365\n\
             Flat A,Centro,Private room,80,12,200\n\
             Flat B,Centro,Private room,,3,100\n\
             Flat C,,Private room,60,1,50\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.listings[0].name, "Flat A");
        assert_eq!(ds.listings[0].price, 80.0);
    }

    #[test]
    fn csv_missing_required_column_is_fatal() {
        let path = write_temp(
            "nocol.csv",
            "name,neighbourhood,room_type,number_of_reviews,availability_365\n\
             Flat A,Centro,Private room,12,200\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, DataLoadError::MissingColumn("price")));
    }

    #[test]
    fn csv_with_all_rows_incomplete_loads_as_empty_dataset() {
        let path = write_temp(
            "empty.csv",
            "name,neighbourhood,room_type,price,number_of_reviews,availability_365\n\
             Flat A,Centro,Private room,,12,200\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(ds.is_empty());
        assert_eq!(ds.price_span, None);
    }

    #[test]
    fn csv_extra_columns_are_ignored() {
        let path = write_temp(
            "extra.csv",
            "id,name,neighbourhood,room_type,price,number_of_reviews,availability_365,host_id\n\
             1,Flat A,Centro,Private room,80,12,200,999\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.listings[0].neighbourhood, "Centro");
    }

    #[test]
    fn json_records_load_and_clean() {
        let path = write_temp(
            "records.json",
            r#"[
                {"name": "Flat A", "neighbourhood": "Centro", "room_type": "Private room",
                 "price": 80.0, "number_of_reviews": 12, "availability_365": 200},
                {"name": "Flat B", "neighbourhood": "Centro", "room_type": "Private room",
                 "number_of_reviews": 3, "availability_365": 100}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.listings[0].name, "Flat A");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("listings.parquet")).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedExtension(e) if e == "parquet"));
    }
}
