// src/domain/sort.rs

use crate::domain::criteria::{SortDirection, SortKey};
use crate::domain::hotel::Hotel;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Returns a new, stably ordered list. Ties keep their incoming order in
/// both directions, since descending reverses the comparison rather than
/// the output.
pub fn sort<'a>(hotels: &[&'a Hotel], key: SortKey, direction: SortDirection) -> Vec<&'a Hotel> {
    let names = NameCollator::new();
    let mut out = hotels.to_vec();
    // `sort_by` is a stable merge sort.
    out.sort_by(|a, b| compare(&names, a, b, key, direction));
    out
}

pub fn compare(
    names: &NameCollator,
    a: &Hotel,
    b: &Hotel,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ord = compare_by_key(names, a, b, key);
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn compare_by_key(names: &NameCollator, a: &Hotel, b: &Hotel, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => names.compare(&a.name, &b.name),
        SortKey::Stars => compare_numbers(a.stars.unwrap_or(0.0), b.stars.unwrap_or(0.0)),
        SortKey::Rating => compare_numbers(
            a.google_rating.unwrap_or(0.0),
            b.google_rating.unwrap_or(0.0),
        ),
        SortKey::Reviews => a.review_count.unwrap_or(0).cmp(&b.review_count.unwrap_or(0)),
        SortKey::Price => compare_numbers(a.price_range.min, b.price_range.min),
    }
}

/// Hotel-name ordering under the root-locale Unicode collation.
///
/// Accents and case are secondary to the base letters, so "Éden Roc" sorts
/// with the e's and "riu" next to "Riu" (lowercase first). Identical names
/// compare equal.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::warn!("Root collation data unavailable, sorting names case-insensitively: {e}");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ord = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        // Collation ties: lowercase first.
        ord.then_with(|| b.cmp(a))
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
