use crate::payload::lenient;
use serde::Deserialize;
use serde_json::Value;

// payload
//  ├── metadata
//  │    ├── destination
//  │    ├── source
//  │    ├── generated_at
//  │    ├── budget
//  │    └── total_hotels
//  └── hotels[]
//       ├── id, name, city
//       ├── stars, google_rating, review_count
//       ├── price_range { min, max, avg }
//       ├── drinks24h, snacks24h, spa_available, adult_only
//       ├── review_summary
//       └── packages[]
//            ├── departure, return, duration_days
//            ├── room_type, price, url
//            └── drinks24h, snacks24h, spa_available

/// Top-level document. `hotels` stays untyped so a single bad entry
/// can be skipped instead of failing the whole load.
#[derive(Debug, Deserialize)]
pub struct RawPayload {
    #[serde(default, deserialize_with = "lenient::object")]
    pub metadata: Option<RawMetadata>,
    pub hotels: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default, deserialize_with = "lenient::string")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_hotels: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawHotel {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub stars: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub google_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub review_count: Option<f64>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub price_range: Option<RawPriceRange>,

    // Loosely typed on the wire: bool | number | string | null.
    #[serde(default)]
    pub drinks24h: Value,
    #[serde(default)]
    pub snacks24h: Value,
    #[serde(default)]
    pub spa_available: Value,
    #[serde(default)]
    pub adult_only: Value,

    #[serde(default, deserialize_with = "lenient::string")]
    pub air_transat_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub google_maps_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meal_plan_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meal_plan_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub number_of_restaurants: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub departure_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub return_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub review_summary: Option<RawReviewSummary>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub packages: Vec<RawPackage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPriceRange {
    #[serde(default, deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPackage {
    #[serde(default, deserialize_with = "lenient::string")]
    pub departure: Option<String>,
    #[serde(default, rename = "return", deserialize_with = "lenient::string")]
    pub return_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meal_plan_label: Option<String>,

    #[serde(default)]
    pub drinks24h: Value,
    #[serde(default)]
    pub snacks24h: Value,
    #[serde(default)]
    pub spa_available: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawReviewSummary {
    #[serde(default, deserialize_with = "lenient::list")]
    pub good_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub bad_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ugly_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub overall_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub review_count_analyzed: Option<f64>,
}
