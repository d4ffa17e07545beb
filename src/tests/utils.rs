use crate::domain::hotel::{Dataset, Hotel};
use crate::payload::{models::RawHotel, parse_payload};
use serde_json::{json, Value};

pub const SAMPLE_PAYLOAD: &str = include_str!("fixtures/hotels.json");

/// Parsed copy of the sample payload in `fixtures/hotels.json`.
pub fn sample_dataset() -> Dataset {
    parse_payload(SAMPLE_PAYLOAD).unwrap_or_else(|e| panic!("Fixture failed to parse: {e}"))
}

/// Hotel from an ad-hoc JSON entry, through the same ingestion as a payload.
pub fn hotel(value: Value) -> Hotel {
    let raw: RawHotel = serde_json::from_value(value).unwrap();
    Hotel::from_raw(raw, 0)
}

pub fn hotel_at(id: &str, price: f64) -> Hotel {
    hotel(json!({
        "id": id,
        "name": format!("Hotel {id}"),
        "price_range": { "min": price, "max": price, "avg": price },
    }))
}

pub fn ids<'a>(hotels: &[&'a Hotel]) -> Vec<&'a str> {
    hotels.iter().map(|h| h.id.as_str()).collect()
}

/// A: 100, 5 stars, 4.5, drinks. B: 50, 3 stars, 4.0, no drinks.
pub fn two_hotel_dataset() -> Dataset {
    Dataset {
        metadata: Default::default(),
        hotels: vec![
            hotel(json!({
                "id": "A", "name": "Alpha Resort", "stars": 5, "google_rating": 4.5,
                "drinks24h": true,
                "price_range": { "min": 100, "max": 180, "avg": 140 },
            })),
            hotel(json!({
                "id": "B", "name": "Bravo Inn", "stars": 3, "google_rating": 4.0,
                "drinks24h": false,
                "price_range": { "min": 50, "max": 70, "avg": 60 },
            })),
        ],
    }
}
