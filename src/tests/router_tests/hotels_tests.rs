use super::{body_text, get, request};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use http::Method;

#[test]
fn index_lists_every_hotel_by_default() {
    let resp = get("/").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("<strong>4</strong> of 4 hotels"));
    assert!(body.contains("Secrets Maroma"));
    assert!(body.contains("aria-disabled=\"true\""), "Reset should start disabled");
    assert!(body.contains("Hotels in cancun"));
    assert!(body.contains("Source: transat"));
}

#[test]
fn search_narrows_and_enables_reset() {
    let body = body_text(get("/?q=riu").unwrap());

    assert!(body.contains("<strong>1</strong> of 4 hotels"));
    assert!(body.contains("Riu Palace Costa Mujeres"));
    assert!(!body.contains("Secrets Maroma"));
    assert!(!body.contains("aria-disabled"));
}

#[test]
fn rows_follow_the_requested_order() {
    let body = body_text(get("/?sort=price&dir=asc").unwrap());
    let at = |name: &str| body.find(name).unwrap_or_else(|| panic!("{name} missing"));

    assert!(at("Ocean Breeze Budget") < at("Dreams Riviera Cancun"));
    assert!(at("Dreams Riviera Cancun") < at("Riu Palace Costa Mujeres"));
    assert!(at("Riu Palace Costa Mujeres") < at("Secrets Maroma"));
}

#[test]
fn headers_link_to_the_next_sort_state() {
    let body = body_text(get("/?sort=price&dir=asc").unwrap());

    // Clicking the active column flips it, any other column starts ascending.
    assert!(body.contains("href=\"/?sort=price&amp;dir=desc\""));
    assert!(body.contains("href=\"/?sort=stars&amp;dir=asc\""));
}

#[test]
fn empty_result_renders_a_message() {
    let body = body_text(get("/?q=nowhere").unwrap());
    assert!(body.contains("No hotels match these filters."));
}

#[test]
fn unknown_sort_key_is_a_bad_request() {
    let err = get("/?sort=distance").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(error_to_response(err).status(), 400);
}

#[test]
fn detail_page_renders_the_hotel() {
    let resp = get("/hotels/hotel_001").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Secrets Maroma"));
    assert!(body.contains("Packages"));
}

#[test]
fn unknown_routes_are_not_found() {
    assert!(matches!(get("/hotels/nope"), Err(ServerError::NotFound)));
    assert!(matches!(get("/admin"), Err(ServerError::NotFound)));
    assert!(matches!(request(Method::POST, "/"), Err(ServerError::NotFound)));
    assert_eq!(error_to_response(ServerError::NotFound).status(), 404);
}

#[test]
fn fractional_min_rating_survives_the_form() {
    let body = body_text(get("/?min_rating=3.5").unwrap());
    assert!(body.contains(r#"<option value="3.5" selected>3.5+</option>"#));
}

#[test]
fn unrecognised_amenity_flag_is_a_bad_request() {
    let err = get("/?spa=maybe").unwrap_err();
    assert_eq!(error_to_response(err).status(), 400);
}
