use super::{body_bytes, get};
use crate::errors::ServerError;
use serde_json::Value;

fn api(uri: &str) -> Value {
    let resp = get(uri).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    serde_json::from_slice(&body_bytes(resp)).expect("Body is not JSON")
}

fn ids(view: &Value) -> Vec<&str> {
    view["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect()
}

#[test]
fn default_view_carries_bounds_and_all_hotels() {
    let view = api("/api/hotels");

    assert_eq!(view["count"], 4);
    assert_eq!(view["has_active_filters"], false);
    assert_eq!(view["bounds"]["min"], 1850.0);
    assert_eq!(view["bounds"]["max"], 5800.0);
    assert_eq!(view["metadata"]["destination"], "cancun");
}

#[test]
fn drinks_filter_keeps_confirmed_hotels_only() {
    let view = api("/api/hotels?drinks24h=1");

    assert_eq!(view["count"], 2);
    assert_eq!(view["has_active_filters"], true);
    assert_eq!(ids(&view), vec!["hotel_000", "hotel_003"]);
}

#[test]
fn adults_only_excludes_maybe_and_unknown() {
    let view = api("/api/hotels?adults_only=on");
    assert_eq!(ids(&view), vec!["hotel_000"]);
}

#[test]
fn price_window_is_normalized_from_the_query() {
    let view = api("/api/hotels?price_min=4500&price_max=1900");
    assert_eq!(ids(&view), vec!["hotel_000", "hotel_003"]);
}

#[test]
fn rating_sort_descending() {
    let view = api("/api/hotels?sort=rating&dir=desc");
    assert_eq!(ids(&view).first(), Some(&"hotel_001"));
}

#[test]
fn non_numeric_price_is_rejected() {
    assert!(matches!(
        get("/api/hotels?price_max=lots"),
        Err(ServerError::BadRequest(_))
    ));
}
