//! The browsing session the UI talks to.
//!
//! `HotelViewer` owns the current criteria and price bounds and borrows the
//! loaded dataset through an `Arc`, so many sessions can share one load.
//! Every getter recomputes from scratch: filtering and sorting are pure,
//! so calling them repeatedly per request is harmless.

use crate::domain::criteria::{Amenity, FilterCriteria, SortDirection, SortKey};
use crate::domain::hotel::{Dataset, Hotel};
use crate::domain::{filter, metrics, sort, PriceBounds};
use crate::errors::ViewerError;
use crate::payload::{parse_payload, DatasetError};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct HotelViewer {
    dataset: Option<Arc<Dataset>>,
    bounds: PriceBounds,
    criteria: FilterCriteria,
}

impl HotelViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over an already-loaded dataset.
    pub fn with_dataset(dataset: Arc<Dataset>) -> Self {
        let mut viewer = Self::new();
        viewer.load_dataset(dataset);
        viewer
    }

    /// Swaps in a dataset: recomputes bounds and re-seeds the price window.
    /// Search, rating, amenity and sort settings carry over.
    pub fn load_dataset(&mut self, dataset: impl Into<Arc<Dataset>>) {
        let dataset = dataset.into();
        self.bounds = PriceBounds::from_hotels(&dataset.hotels);
        self.criteria.reseed_price(&self.bounds);
        log::debug!(
            "Viewer loaded {} hotels, price bounds {}..{}",
            dataset.hotels.len(),
            self.bounds.min,
            self.bounds.max
        );
        self.dataset = Some(dataset);
    }

    pub fn load_payload(&mut self, json: &str) -> Result<(), DatasetError> {
        let dataset = parse_payload(json)?;
        self.load_dataset(dataset);
        Ok(())
    }

    pub fn dataset(&self) -> Result<&Dataset, ViewerError> {
        self.dataset.as_deref().ok_or(ViewerError::NotLoaded)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.set_search(text);
    }

    pub fn set_min_rating(&mut self, rating: f64) -> Result<(), ViewerError> {
        self.criteria.set_min_rating(rating)
    }

    pub fn set_price_min(&mut self, min: f64) -> Result<(), ViewerError> {
        self.criteria.set_price_min(min)
    }

    pub fn set_price_max(&mut self, max: f64) -> Result<(), ViewerError> {
        self.criteria.set_price_max(max)
    }

    /// Call when the user is done editing a price bound.
    pub fn normalize_price_range(&mut self) {
        self.criteria.normalize_price_range();
    }

    pub fn toggle_require(&mut self, amenity: Amenity) {
        self.criteria.toggle_require(amenity);
    }

    pub fn set_require(&mut self, amenity: Amenity, required: bool) {
        self.criteria.set_require(amenity, required);
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.criteria.set_sort(key);
    }

    pub fn set_sort_by_name(&mut self, key: &str) -> Result<(), ViewerError> {
        let key = key.parse::<SortKey>()?;
        self.set_sort(key);
        Ok(())
    }

    pub fn set_sort_order(&mut self, key: SortKey, direction: SortDirection) {
        self.criteria.set_sort_order(key, direction);
    }

    /// Back to defaults, price window re-opened to the current bounds.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::seeded(&self.bounds);
    }

    pub fn criteria(&self) -> Result<&FilterCriteria, ViewerError> {
        self.dataset()?;
        Ok(&self.criteria)
    }

    pub fn bounds(&self) -> Result<PriceBounds, ViewerError> {
        self.dataset()?;
        Ok(self.bounds)
    }

    pub fn filtered_sorted(&self) -> Result<Vec<&Hotel>, ViewerError> {
        let dataset = self.dataset()?;
        let criteria = self.criteria.normalized();
        let filtered = filter::apply(&dataset.hotels, &criteria);
        let ordered = sort::sort(&filtered, criteria.sort_key(), criteria.sort_direction());
        log::trace!(
            "Filtered {} of {} hotels",
            ordered.len(),
            dataset.hotels.len()
        );
        Ok(ordered)
    }

    pub fn count(&self) -> Result<usize, ViewerError> {
        Ok(metrics::count(&self.filtered_sorted()?))
    }

    pub fn has_active_filters(&self) -> Result<bool, ViewerError> {
        self.dataset()?;
        Ok(metrics::has_active_filters(&self.criteria, &self.bounds))
    }
}
