// src/domain/filter.rs

use crate::domain::criteria::{Amenity, FilterCriteria};
use crate::domain::hotel::Hotel;

/// Keeps the hotels that satisfy every active predicate, preserving input order.
///
/// The price window is read as given; callers pass normalized criteria
/// (see [`FilterCriteria::normalized`]).
pub fn apply<'a, I>(hotels: I, criteria: &FilterCriteria) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    let needle = search_needle(criteria.search());
    hotels
        .into_iter()
        .filter(|hotel| matches(hotel, criteria, needle.as_deref()))
        .collect()
}

/// Trimmed, lower-cased search text, or `None` when there is nothing to match.
fn search_needle(search: &str) -> Option<String> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn matches(hotel: &Hotel, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        if !hotel.name_key.contains(needle) {
            return false;
        }
    }

    if !criteria.price().contains(hotel.price_range.min) {
        return false;
    }

    let min_rating = criteria.min_rating();
    if min_rating > 0.0 && hotel.stars.unwrap_or(0.0) < min_rating {
        return false;
    }

    let amenities = &hotel.amenities;
    let required = |amenity| criteria.requires(amenity);

    if required(Amenity::Drinks24h) && !amenities.drinks24h.is_yes() {
        return false;
    }
    if required(Amenity::Snacks24h) && !amenities.snacks24h.is_yes() {
        return false;
    }
    if required(Amenity::Spa) && !amenities.spa.is_yes() {
        return false;
    }

    // Strictly 1: "maybe" does not satisfy an adults-only requirement.
    if required(Amenity::AdultsOnly) && !amenities.adult_only.is_yes() {
        return false;
    }

    true
}
