// src/domain/hotel.rs

use crate::domain::classify::{
    classify_adult_only, classify_flag, classify_spa, AdultOnly, Presence,
};
use crate::payload::lenient::number_from_value;
use crate::payload::models::{
    RawHotel, RawMetadata, RawPackage, RawPriceRange, RawReviewSummary,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

/// A loaded payload. Immutable once built; views borrow from it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    pub metadata: Metadata,
    pub hotels: Vec<Hotel>,
}

impl Dataset {
    pub fn find(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Metadata {
    pub destination: String,
    pub source: String,
    pub generated_at: Option<NaiveDateTime>,
    pub budget: Option<f64>,
    pub total_hotels: Option<u64>,
}

impl Metadata {
    pub fn from_raw(raw: RawMetadata) -> Self {
        Metadata {
            destination: raw.destination.unwrap_or_default(),
            source: raw.source.unwrap_or_default(),
            generated_at: raw.generated_at.as_deref().and_then(parse_datetime),
            budget: raw.budget,
            total_hotels: raw.total_hotels.and_then(non_negative_int),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Amenity answers, classified once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Amenities {
    pub drinks24h: Presence,
    pub snacks24h: Presence,
    pub spa: Presence,
    pub adult_only: AdultOnly,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewSummary {
    pub good_points: Vec<String>,
    pub bad_points: Vec<String>,
    pub ugly_points: Vec<String>,
    pub overall_summary: String,
    pub review_count_analyzed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub departure: Option<NaiveDate>,
    #[serde(rename = "return")]
    pub return_date: Option<NaiveDate>,
    pub duration_days: Option<i64>,
    pub room_type: String,
    pub price: f64,
    pub url: Option<String>,
    pub meal_plan_label: Option<String>,
    pub drinks24h: Presence,
    pub snacks24h: Presence,
    pub spa: Presence,
}

/// Represents a hotel as the viewer sees it: flattened, with every loosely
/// typed source field already resolved to a canonical value.
#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,

    pub stars: Option<f64>,
    pub google_rating: Option<f64>,
    pub review_count: Option<u64>,

    pub price_range: PriceRange,
    pub amenities: Amenities,
    /// Source text (or count) behind `amenities.spa`, for display.
    pub spa_label: Option<String>,

    pub air_transat_url: Option<String>,
    pub google_maps_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub meal_plan_code: Option<String>,
    pub meal_plan_label: Option<String>,
    pub number_of_restaurants: Option<u64>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub review_summary: Option<ReviewSummary>,

    pub packages: Vec<Package>,

    /// Lower-cased name, shared by search and name ordering.
    #[serde(skip)]
    pub name_key: String,
}

impl Hotel {
    /// Builds the canonical record from a raw payload entry. `index` is the
    /// entry's position in the payload and only feeds the fallback id.
    pub fn from_raw(raw: RawHotel, index: usize) -> Self {
        let name = raw.name.unwrap_or_default();
        let name_key = name.to_lowercase();

        let amenities = Amenities {
            drinks24h: classify_flag(&raw.drinks24h),
            snacks24h: classify_flag(&raw.snacks24h),
            spa: classify_spa(&raw.spa_available),
            adult_only: classify_adult_only(&raw.adult_only),
        };

        Hotel {
            id: raw
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| format!("hotel_{index:03}")),
            name,
            city: raw.city.unwrap_or_default(),
            stars: raw.stars,
            google_rating: raw.google_rating,
            review_count: raw.review_count.and_then(non_negative_int),
            price_range: raw.price_range.map(PriceRange::from_raw).unwrap_or_default(),
            amenities,
            spa_label: display_label(&raw.spa_available),
            air_transat_url: raw.air_transat_url,
            google_maps_url: raw.google_maps_url,
            thumbnail_url: raw.thumbnail_url,
            meal_plan_code: raw.meal_plan_code,
            meal_plan_label: raw.meal_plan_label,
            number_of_restaurants: raw.number_of_restaurants.and_then(non_negative_int),
            departure_date: raw.departure_date.as_deref().and_then(parse_date),
            return_date: raw.return_date.as_deref().and_then(parse_date),
            review_summary: raw.review_summary.map(ReviewSummary::from_raw),
            packages: raw.packages.into_iter().map(Package::from_raw).collect(),
            name_key,
        }
    }
}

impl PriceRange {
    fn from_raw(raw: RawPriceRange) -> Self {
        PriceRange {
            min: raw.min.unwrap_or(0.0),
            max: raw.max.unwrap_or(0.0),
            avg: raw.avg.unwrap_or(0.0),
        }
    }
}

impl ReviewSummary {
    fn from_raw(raw: RawReviewSummary) -> Self {
        ReviewSummary {
            good_points: raw.good_points,
            bad_points: raw.bad_points,
            ugly_points: raw.ugly_points,
            overall_summary: raw.overall_summary.unwrap_or_default(),
            review_count_analyzed: raw
                .review_count_analyzed
                .and_then(non_negative_int)
                .unwrap_or(0),
        }
    }
}

impl Package {
    fn from_raw(raw: RawPackage) -> Self {
        let departure = raw.departure.as_deref().and_then(parse_date);
        let return_date = raw.return_date.as_deref().and_then(parse_date);

        // Prefer the payload's own figure; fall back to the date span.
        let duration_days = raw.duration_days.map(|d| d as i64).or_else(|| {
            departure
                .zip(return_date)
                .map(|(dep, ret)| (ret - dep).num_days())
        });

        Package {
            departure,
            return_date,
            duration_days,
            room_type: raw
                .room_type
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| "Standard".to_string()),
            price: raw.price.unwrap_or(0.0),
            url: raw.url,
            meal_plan_label: raw.meal_plan_label,
            drinks24h: classify_flag(&raw.drinks24h),
            snacks24h: classify_flag(&raw.snacks24h),
            spa: classify_spa(&raw.spa_available),
        }
    }
}

fn display_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(_) => number_from_value(value).map(|n| n.to_string()),
        _ => None,
    }
}

fn non_negative_int(n: f64) -> Option<u64> {
    (n >= 0.0).then(|| n.round() as u64)
}

/// Accepts RFC 3339, naive ISO date-times and bare dates.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}
