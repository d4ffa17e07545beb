// src/domain/criteria.rs

use crate::domain::bounds::PriceBounds;
use crate::errors::ViewerError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Stars,
    Rating,
    Reviews,
    Price,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Stars,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Stars => "stars",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Price => "price",
        }
    }
}

impl FromStr for SortKey {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ViewerError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ViewerError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Amenities a user can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amenity {
    Drinks24h,
    Snacks24h,
    Spa,
    AdultsOnly,
}

impl Amenity {
    pub const ALL: [Amenity; 4] = [
        Amenity::Drinks24h,
        Amenity::Snacks24h,
        Amenity::Spa,
        Amenity::AdultsOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Amenity::Drinks24h => "drinks24h",
            Amenity::Snacks24h => "snacks24h",
            Amenity::Spa => "spa",
            Amenity::AdultsOnly => "adults_only",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Amenity::Drinks24h => "24h drinks",
            Amenity::Snacks24h => "24h snacks",
            Amenity::Spa => "Spa",
            Amenity::AdultsOnly => "Adults only",
        }
    }
}

impl FromStr for Amenity {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ViewerError::InvalidAmenity(s.to_string()))
    }
}

/// Inclusive price window applied to `price_range.min`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceWindow {
    pub min: f64,
    pub max: f64,
}

impl PriceWindow {
    pub fn from_bounds(bounds: &PriceBounds) -> Self {
        PriceWindow {
            min: bounds.min,
            max: bounds.max,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// User-adjustable parameters driving filtering and sorting.
///
/// Mutation goes through the setters; a price window edited out of order
/// stays that way until [`FilterCriteria::normalize_price_range`] runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    search: String,
    min_rating: f64,
    price: PriceWindow,
    require_drinks24h: bool,
    require_snacks24h: bool,
    require_spa: bool,
    require_adults_only: bool,
    sort_key: SortKey,
    sort_direction: SortDirection,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_rating: 0.0,
            price: PriceWindow::default(),
            require_drinks24h: false,
            require_snacks24h: false,
            require_spa: false,
            require_adults_only: false,
            sort_key: SortKey::Price,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl FilterCriteria {
    /// Defaults with the price window opened to the whole dataset.
    pub fn seeded(bounds: &PriceBounds) -> Self {
        Self {
            price: PriceWindow::from_bounds(bounds),
            ..Self::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn price(&self) -> PriceWindow {
        self.price
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn requires(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Drinks24h => self.require_drinks24h,
            Amenity::Snacks24h => self.require_snacks24h,
            Amenity::Spa => self.require_spa,
            Amenity::AdultsOnly => self.require_adults_only,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// `0` clears the constraint.
    pub fn set_min_rating(&mut self, rating: f64) -> Result<(), ViewerError> {
        self.min_rating = finite("min_rating", rating)?;
        Ok(())
    }

    pub fn set_price_min(&mut self, min: f64) -> Result<(), ViewerError> {
        self.price.min = finite("price_min", min)?;
        Ok(())
    }

    pub fn set_price_max(&mut self, max: f64) -> Result<(), ViewerError> {
        self.price.max = finite("price_max", max)?;
        Ok(())
    }

    /// Overwrites the price window, leaving every other field alone.
    pub fn reseed_price(&mut self, bounds: &PriceBounds) {
        self.price = PriceWindow::from_bounds(bounds);
    }

    /// Swaps the price bounds if they were entered out of order.
    pub fn normalize_price_range(&mut self) {
        if self.price.min > self.price.max {
            std::mem::swap(&mut self.price.min, &mut self.price.max);
        }
    }

    /// Copy with the price window put in order; what filtering consumes.
    pub fn normalized(&self) -> FilterCriteria {
        let mut out = self.clone();
        out.normalize_price_range();
        out
    }

    pub fn set_require(&mut self, amenity: Amenity, required: bool) {
        let slot = match amenity {
            Amenity::Drinks24h => &mut self.require_drinks24h,
            Amenity::Snacks24h => &mut self.require_snacks24h,
            Amenity::Spa => &mut self.require_spa,
            Amenity::AdultsOnly => &mut self.require_adults_only,
        };
        *slot = required;
    }

    pub fn toggle_require(&mut self, amenity: Amenity) {
        let current = self.requires(amenity);
        self.set_require(amenity, !current);
    }

    /// Header-click policy: the active key flips direction, any other key
    /// becomes active in ascending order.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_sort_order(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// The `(key, direction)` a click on `key` would produce.
    pub fn next_sort(&self, key: SortKey) -> (SortKey, SortDirection) {
        let mut next = self.clone();
        next.set_sort(key);
        (next.sort_key, next.sort_direction)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ViewerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewerError::NonFinite { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f64, max: f64) -> PriceBounds {
        PriceBounds { min, max, avg: (min + max) / 2.0 }
    }

    #[test]
    fn defaults_sort_by_price_ascending() {
        let c = FilterCriteria::default();
        assert_eq!(c.sort_key(), SortKey::Price);
        assert_eq!(c.sort_direction(), SortDirection::Asc);
        assert_eq!(c.min_rating(), 0.0);
        assert!(Amenity::ALL.iter().all(|a| !c.requires(*a)));
    }

    #[test]
    fn normalize_swaps_out_of_order_bounds() {
        let mut c = FilterCriteria::seeded(&bounds(100.0, 900.0));
        c.set_price_min(700.0).unwrap();
        c.set_price_max(200.0).unwrap();
        assert_eq!(c.price(), PriceWindow { min: 700.0, max: 200.0 });

        assert_eq!(c.normalized().price(), PriceWindow { min: 200.0, max: 700.0 });
        // normalized() leaves the original untouched
        assert_eq!(c.price().min, 700.0);

        c.normalize_price_range();
        assert_eq!(c.price(), PriceWindow { min: 200.0, max: 700.0 });
    }

    #[test]
    fn toggle_policy() {
        let mut c = FilterCriteria::default();
        c.set_sort(SortKey::Price);
        assert_eq!((c.sort_key(), c.sort_direction()), (SortKey::Price, SortDirection::Desc));

        c.set_sort(SortKey::Rating);
        assert_eq!((c.sort_key(), c.sort_direction()), (SortKey::Rating, SortDirection::Asc));

        c.set_sort(SortKey::Rating);
        assert_eq!(c.sort_direction(), SortDirection::Desc);

        assert_eq!(c.next_sort(SortKey::Name), (SortKey::Name, SortDirection::Asc));
        assert_eq!(c.sort_key(), SortKey::Rating);
    }

    #[test]
    fn rejects_unknown_keys_and_non_finite_numbers() {
        assert!(matches!("distance".parse::<SortKey>(), Err(ViewerError::InvalidSortKey(k)) if k == "distance"));
        assert!("sideways".parse::<SortDirection>().is_err());
        assert!("pool".parse::<Amenity>().is_err());

        let mut c = FilterCriteria::default();
        assert!(c.set_min_rating(f64::NAN).is_err());
        assert!(c.set_price_max(f64::INFINITY).is_err());
        assert_eq!(c, FilterCriteria::default());
    }

    #[test]
    fn toggle_require_round_trips() {
        let mut c = FilterCriteria::default();
        c.toggle_require(Amenity::Spa);
        assert!(c.requires(Amenity::Spa));
        c.toggle_require(Amenity::Spa);
        assert!(!c.requires(Amenity::Spa));
    }
}
