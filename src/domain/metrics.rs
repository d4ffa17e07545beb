use crate::domain::bounds::PriceBounds;
use crate::domain::criteria::{Amenity, FilterCriteria};
use crate::domain::hotel::Hotel;

pub fn count(hotels: &[&Hotel]) -> usize {
    hotels.len()
}

/// Whether anything differs from a fresh reset. Drives the reset affordance only.
pub fn has_active_filters(criteria: &FilterCriteria, bounds: &PriceBounds) -> bool {
    let price = criteria.price();
    !criteria.search().is_empty()
        || criteria.min_rating() > 0.0
        || Amenity::ALL.iter().any(|a| criteria.requires(*a))
        || price.min > bounds.min
        || price.max < bounds.max
}
