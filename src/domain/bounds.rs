use crate::domain::hotel::Hotel;
use serde::Serialize;

/// Dataset-wide price envelope over each hotel's cheapest package
/// (`price_range.min`). Recomputed on load, never on filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl PriceBounds {
    pub fn from_hotels(hotels: &[Hotel]) -> Self {
        if hotels.is_empty() {
            return PriceBounds::default();
        }

        let prices = hotels.iter().map(|h| h.price_range.min);
        let min = prices.clone().fold(f64::INFINITY, f64::min);
        let max = prices.clone().fold(f64::NEG_INFINITY, f64::max);
        let avg = prices.sum::<f64>() / hotels.len() as f64;

        PriceBounds {
            min: min.floor(),
            max: max.ceil(),
            avg,
        }
    }
}
