//! URL query string <-> viewer criteria.
//!
//! Each request carries the complete filter state, so the page stays
//! bookmarkable and the server keeps no per-user state.

use crate::domain::criteria::{Amenity, FilterCriteria, SortDirection, SortKey};
use crate::domain::PriceBounds;
use crate::errors::ServerError;
use crate::viewer::HotelViewer;
use std::collections::HashMap;
use url::form_urlencoded;

pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .into_owned()
        .collect()
}

/// Feeds query parameters through the viewer setters. Blank values are
/// ignored, the way an untouched form field would be.
pub fn apply_params(
    viewer: &mut HotelViewer,
    params: &HashMap<String, String>,
) -> Result<(), ServerError> {
    let value = |name: &str| {
        params
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    if let Some(q) = value("q") {
        viewer.set_search(q);
    }
    if let Some(rating) = value("min_rating") {
        viewer.set_min_rating(parse_number("min_rating", rating)?)?;
    }
    if let Some(min) = value("price_min") {
        viewer.set_price_min(parse_number("price_min", min)?)?;
    }
    if let Some(max) = value("price_max") {
        viewer.set_price_max(parse_number("price_max", max)?)?;
    }
    // Submitting the form is the end of a price edit.
    viewer.normalize_price_range();

    for amenity in Amenity::ALL {
        if let Some(flag) = value(amenity.as_str()) {
            viewer.set_require(amenity, parse_flag(amenity.as_str(), flag)?);
        }
    }

    match (value("sort"), value("dir")) {
        (Some(key), dir) => {
            let key = key.parse::<SortKey>()?;
            let dir = dir.map(str::parse::<SortDirection>).transpose()?.unwrap_or_default();
            viewer.set_sort_order(key, dir);
        }
        (None, Some(_)) => {
            return Err(ServerError::BadRequest("dir given without sort".into()));
        }
        (None, None) => {}
    }

    Ok(())
}

fn parse_number(name: &str, raw: &str) -> Result<f64, ServerError> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| ServerError::BadRequest(format!("{name} is not a number: {raw}")))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ServerError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(ServerError::BadRequest(format!("{name} is not a flag: {raw}"))),
    }
}

/// Serializes criteria back into a query string. Fields at their reset
/// value are left out to keep links short.
pub fn to_query_string(criteria: &FilterCriteria, bounds: &PriceBounds) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if !criteria.search().is_empty() {
        out.append_pair("q", criteria.search());
    }
    if criteria.min_rating() > 0.0 {
        out.append_pair("min_rating", &criteria.min_rating().to_string());
    }
    let price = criteria.price();
    if price.min != bounds.min {
        out.append_pair("price_min", &price.min.to_string());
    }
    if price.max != bounds.max {
        out.append_pair("price_max", &price.max.to_string());
    }
    for amenity in Amenity::ALL {
        if criteria.requires(amenity) {
            out.append_pair(amenity.as_str(), "1");
        }
    }
    out.append_pair("sort", criteria.sort_key().as_str());
    out.append_pair("dir", criteria.sort_direction().as_str());

    out.finish()
}

/// Same criteria with a different sort order, as a query string.
pub fn with_sort(
    criteria: &FilterCriteria,
    bounds: &PriceBounds,
    key: SortKey,
    direction: SortDirection,
) -> String {
    let mut next = criteria.clone();
    next.set_sort_order(key, direction);
    to_query_string(&next, bounds)
}

/// Link to a hotel's detail page; the id is encoded so any payload id routes.
pub fn hotel_path(id: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/hotels/{encoded}")
}

pub fn hotel_id_from_path(segment: &str) -> String {
    // `parse` splits on '=' and '&'; decode the segment as a single key.
    form_urlencoded::parse(segment.replace('=', "%3D").replace('&', "%26").as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::two_hotel_dataset;
    use std::sync::Arc;

    fn viewer_from(query: &str) -> Result<HotelViewer, ServerError> {
        let mut viewer = HotelViewer::with_dataset(Arc::new(two_hotel_dataset()));
        apply_params(&mut viewer, &parse_query(Some(query)))?;
        Ok(viewer)
    }

    #[test]
    fn decodes_and_applies_every_field() {
        let viewer = viewer_from(
            "q=Grand+Palladium%20Resort&min_rating=4&price_min=60&price_max=1%2C000&drinks24h=on&spa=1&sort=rating&dir=desc",
        )
        .unwrap();
        let c = viewer.criteria().unwrap();

        assert_eq!(c.search(), "Grand Palladium Resort");
        assert_eq!(c.min_rating(), 4.0);
        assert_eq!((c.price().min, c.price().max), (60.0, 1000.0));
        assert!(c.requires(Amenity::Drinks24h));
        assert!(c.requires(Amenity::Spa));
        assert!(!c.requires(Amenity::Snacks24h));
        assert_eq!(c.sort_key(), SortKey::Rating);
        assert_eq!(c.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn blank_fields_are_ignored_and_prices_normalized() {
        let viewer = viewer_from("q=&min_rating=&price_min=90&price_max=55").unwrap();
        let c = viewer.criteria().unwrap();
        assert_eq!(c.search(), "");
        assert_eq!((c.price().min, c.price().max), (55.0, 90.0));
    }

    #[test]
    fn bad_input_is_a_bad_request() {
        assert!(matches!(viewer_from("price_min=cheap"), Err(ServerError::BadRequest(_))));
        assert!(matches!(viewer_from("sort=distance"), Err(ServerError::BadRequest(_))));
        assert!(matches!(viewer_from("sort=price&dir=up"), Err(ServerError::BadRequest(_))));
        assert!(matches!(viewer_from("dir=asc"), Err(ServerError::BadRequest(_))));
        assert!(matches!(viewer_from("spa=maybe"), Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn amenity_flags_accept_both_polarities() {
        let viewer = viewer_from("drinks24h=0&snacks24h=off&spa=TRUE&adults_only=no").unwrap();
        let c = viewer.criteria().unwrap();
        assert!(!c.requires(Amenity::Drinks24h));
        assert!(!c.requires(Amenity::Snacks24h));
        assert!(c.requires(Amenity::Spa));
        assert!(!c.requires(Amenity::AdultsOnly));
    }

    #[test]
    fn query_string_round_trips_through_the_parser() {
        let original = viewer_from("q=riu&min_rating=3&price_max=80&snacks24h=1&sort=name&dir=desc").unwrap();
        let c = original.criteria().unwrap();
        let bounds = original.bounds().unwrap();
        let qs = to_query_string(c, &bounds);

        let rebuilt = viewer_from(&qs).unwrap();
        assert_eq!(rebuilt.criteria().unwrap(), c);
    }

    #[test]
    fn hotel_paths_round_trip() {
        for id in ["hotel_000", "Riu Palace & Spa", "a=b", "ñandú"] {
            let path = hotel_path(id);
            let segment = path.trim_start_matches("/hotels/");
            assert_eq!(hotel_id_from_path(segment), id);
        }
        assert_eq!(hotel_id_from_path("Riu%20Palace"), "Riu Palace");
    }

    #[test]
    fn defaults_only_carry_the_sort() {
        let viewer = viewer_from("").unwrap();
        let qs = to_query_string(viewer.criteria().unwrap(), &viewer.bounds().unwrap());
        assert_eq!(qs, "sort=price&dir=asc");
    }
}
