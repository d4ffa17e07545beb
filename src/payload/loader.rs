use crate::domain::classify::{AdultOnly, Presence};
use crate::domain::hotel::{Dataset, Hotel, Metadata};
use crate::payload::dataset_error::DatasetError;
use crate::payload::models::{RawHotel, RawPayload};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Reads and ingests a viewer payload from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loading hotel payload from {}", path.display());
    parse_payload(&text)
}

/// Parses a viewer payload. Only a document that is not JSON, or whose top
/// level has no `hotels` array, is rejected.
pub fn parse_payload(text: &str) -> Result<Dataset, DatasetError> {
    let payload: RawPayload = serde_json::from_str(text)?;
    let metadata = Metadata::from_raw(payload.metadata.unwrap_or_default());

    let mut hotels = Vec::with_capacity(payload.hotels.len());
    for (idx, entry) in payload.hotels.into_iter().enumerate() {
        match serde_json::from_value::<RawHotel>(entry) {
            Ok(raw) => hotels.push(Hotel::from_raw(raw, idx)),
            Err(e) => log::warn!("Skipping hotel entry #{idx}: {e}"),
        }
    }

    let dataset = Dataset { metadata, hotels };
    report(&dataset);
    Ok(dataset)
}

/// Logs how much of the dataset fell back to unknown classifications.
fn report(dataset: &Dataset) {
    let hotels = &dataset.hotels;

    let mut seen = HashSet::new();
    for hotel in hotels {
        if !seen.insert(hotel.id.as_str()) {
            log::warn!("Duplicate hotel id '{}'; lookups return the first", hotel.id);
        }
    }

    let unknown = |f: fn(&Hotel) -> Presence| {
        hotels.iter().filter(|h| f(h) == Presence::Unknown).count()
    };
    let drinks_unknown = unknown(|h| h.amenities.drinks24h);
    let snacks_unknown = unknown(|h| h.amenities.snacks24h);
    let spa_unknown = unknown(|h| h.amenities.spa);
    let adult_maybe = hotels
        .iter()
        .filter(|h| h.amenities.adult_only == AdultOnly::Maybe)
        .count();

    log::info!(
        "Loaded {} hotels for '{}' (declared {})",
        hotels.len(),
        dataset.metadata.destination,
        dataset
            .metadata
            .total_hotels
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string()),
    );
    log::info!(
        "Unknown amenities: drinks24h={drinks_unknown} snacks24h={snacks_unknown} spa={spa_unknown}; adult_only maybe={adult_maybe}"
    );
}
